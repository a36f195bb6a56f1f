//! Pin assignments for a multiplexed LED matrix.
//!
//! The matrix is driven through [`POS_PINS`] (anode side, analog-capable pins
//! 14-25) and [`NEG_PINS`] (cathode side, digital-only pins 3-7 and 29-33).
//! Driver code lights an LED by driving `POS_PINS[i]` high and `NEG_PINS[j]`
//! low. [`LED_MATRIX`] is the same data as a validated [`PinTable`]; any
//! wiring mistake that breaks a table invariant fails the build.
#![no_std]

mod error;
pub mod pin;
pub mod pin_table;

pub use error::{Error, Result};
pub use pin::{Pin, PinKind, Role};
pub use pin_table::{PinPair, PinTable};

pub const POS_PIN_COUNT: usize = 7;
pub const NEG_PIN_COUNT: usize = 10;

/// Positive (anode) pins in drive order.
pub const POS_PINS: [u8; POS_PIN_COUNT] = [16, 17, 21, 23, 15, 19, 18];

/// The full ten-entry positive pin list as wired: [`POS_PINS`] followed by
/// `24, 25, 22`. The wiring list marks off the last three entries after the
/// seventh, which is where [`POS_PINS`] stops.
pub const POS_PINS_EXTENDED: [u8; 10] = [16, 17, 21, 23, 15, 19, 18, 24, 25, 22];

/// Negative (cathode) pins in drive order.
pub const NEG_PINS: [u8; NEG_PIN_COUNT] = [31, 6, 3, 7, 29, 4, 5, 30, 32, 33];

/// The 7x10 matrix wired through [`POS_PINS`] and [`NEG_PINS`].
pub const LED_MATRIX: PinTable<POS_PIN_COUNT, NEG_PIN_COUNT> = PinTable::new(POS_PINS, NEG_PINS);

/// The 10x10 matrix driven through [`POS_PINS_EXTENDED`] and [`NEG_PINS`].
pub const LED_MATRIX_EXTENDED: PinTable<10, NEG_PIN_COUNT> =
    PinTable::new(POS_PINS_EXTENDED, NEG_PINS);

// The extended list only appends to the positive set; it never reorders it.
const _: () = {
    let mut short: &[u8] = &POS_PINS;
    let mut full: &[u8] = &POS_PINS_EXTENDED;
    while let ([expected, short_rest @ ..], [actual, full_rest @ ..]) = (short, full) {
        assert!(*expected == *actual);
        short = short_rest;
        full = full_rest;
    }
};

// Forces evaluation, so an invalid table is a build error even when unused.
const _: () = assert!(LED_MATRIX.led_count() == POS_PIN_COUNT * NEG_PIN_COUNT);
const _: () = assert!(LED_MATRIX_EXTENDED.led_count() == 100);
