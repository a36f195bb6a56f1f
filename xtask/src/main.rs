//! Build automation tasks for the led-matrix-pins project.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use led_matrix_pins::{Pin, PinTable, LED_MATRIX, LED_MATRIX_EXTENDED};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for led-matrix-pins", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, doc tests, clippy, embedded build, docs
    CheckAll,
    /// Build the library for a microcontroller target
    Build {
        #[arg(long, default_value = "thumbv7em-none-eabihf")]
        target: String,
        #[arg(long)]
        defmt: bool,
    },
    /// Print the pin assignment as a positive x negative grid
    Pins {
        /// Use the full ten-entry positive list
        #[arg(long)]
        extended: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { target, defmt } => build_lib(&target, defmt),
        Commands::Pins { extended } => {
            if extended {
                print_table(&LED_MATRIX_EXTENDED);
            } else {
                print_table(&LED_MATRIX);
            }
            ExitCode::SUCCESS
        }
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Running host tests...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "test",
        "--package",
        "led-matrix-pins",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Running clippy on the library...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "clippy",
        "--lib",
        "--package",
        "led-matrix-pins",
        "--features",
        "defmt",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building for embedded target (defmt)...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--package",
        "led-matrix-pins",
        "--target",
        "thumbv7em-none-eabihf",
        "--features",
        "defmt",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--no-deps",
        "--package",
        "led-matrix-pins",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_lib(target: &str, defmt: bool) -> ExitCode {
    let workspace_root = workspace_root();
    println!("{}", format!("Building library for {target}").cyan());

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--package",
        "led-matrix-pins",
        "--target",
        target,
    ]);
    if defmt {
        cmd.args(["--features", "defmt"]);
    }

    if run_command(&mut cmd) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            format!("Note: install the target with: rustup target add {target}").yellow()
        );
        ExitCode::FAILURE
    }
}

fn print_table<const P: usize, const N: usize>(table: &PinTable<P, N>) {
    println!(
        "{}",
        format!("{P} positive x {N} negative = {} LEDs", table.led_count())
            .cyan()
            .bold()
    );

    print!("{:>6}", "");
    for pin in table.negative() {
        print!("{:>4}", format!("-{}", pin.number()).blue());
    }
    println!();

    for (pin, led_indexes) in led_rows(table) {
        print!("{:>6}", format!("+{}", pin.number()).red());
        for led_index in led_indexes {
            print!("{:>4}", led_index.bright_black());
        }
        println!();
    }
}

/// One row per positive pin, holding the LED index of each (positive, negative) pair.
fn led_rows<const P: usize, const N: usize>(table: &PinTable<P, N>) -> Vec<(Pin, Vec<usize>)> {
    let mut rows = Vec::with_capacity(P);
    let mut row = Vec::with_capacity(N);
    for (led_index, pair) in table.pairs().enumerate() {
        row.push(led_index);
        if pair.negative_index == N - 1 {
            rows.push((pair.positive, std::mem::take(&mut row)));
        }
    }
    rows
}

fn workspace_root() -> std::path::PathBuf {
    std::env::current_dir().expect("Failed to get current directory")
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_rows_follow_positive_pins() {
        let rows = led_rows(&LED_MATRIX);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].0, Pin::new(16));
        assert_eq!(rows[0].1, (0..10).collect::<Vec<_>>());
        assert_eq!(rows[6].0, Pin::new(18));
        assert_eq!(rows[6].1, (60..70).collect::<Vec<_>>());
    }

    #[test]
    fn led_rows_cover_extended_table() {
        let rows = led_rows(&LED_MATRIX_EXTENDED);
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|(_, row)| row.len() == 10));
        assert_eq!(rows[9].0, Pin::new(22));
    }
}
