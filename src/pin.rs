//! Physical pin numbers and their capabilities on the target board.
//!
//! Pin numbers follow the board's own numbering scheme (the numbers printed
//! next to the header pins), not the MCU's port/bit names.

use core::ops::RangeInclusive;

use derive_more::derive::Display;

use crate::{Error, Result};

/// Highest pin number on the target board.
pub const MAX_PIN: u8 = 33;

/// Pins that can be read as analog inputs (and driven as outputs).
pub const ANALOG_PINS: RangeInclusive<u8> = 14..=25;

/// Lower block of digital-only pins.
pub const DIGITAL_PINS_LOW: RangeInclusive<u8> = 3..=7;

/// Upper block of digital-only pins.
pub const DIGITAL_PINS_HIGH: RangeInclusive<u8> = 29..=33;

/// A physical pin in the board's numbering scheme.
///
/// ```
/// use led_matrix_pins::pin::{Pin, PinKind};
///
/// const A2: Pin = Pin::new(16);
/// const _: () = assert!(A2.is_analog());
/// assert_eq!(A2.kind(), Some(PinKind::Analog));
/// ```
///
/// Numbers above [`MAX_PIN`] are rejected at compile time:
///
/// ```compile_fail
/// use led_matrix_pins::pin::Pin;
///
/// const _: Pin = Pin::new(34);
/// ```
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[display("pin {_0}")]
pub struct Pin(u8);

impl Pin {
    /// Const constructor for pins known at compile time.
    ///
    /// # Panics
    ///
    /// Panics when `number` is above [`MAX_PIN`]; in a `const` this is a build error.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        assert!(number <= MAX_PIN, "pin number out of range");
        Self(number)
    }

    /// Runtime constructor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] when `number` is above [`MAX_PIN`].
    pub const fn try_new(number: u8) -> Result<Self> {
        if number > MAX_PIN {
            return Err(Error::PinOutOfRange(number));
        }
        Ok(Self(number))
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Capability class, or `None` for pins outside both documented ranges.
    #[must_use]
    pub const fn kind(self) -> Option<PinKind> {
        if self.is_analog() {
            Some(PinKind::Analog)
        } else if self.is_digital() {
            Some(PinKind::Digital)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_analog(self) -> bool {
        in_range(self.0, &ANALOG_PINS)
    }

    #[must_use]
    pub const fn is_digital(self) -> bool {
        in_range(self.0, &DIGITAL_PINS_LOW) || in_range(self.0, &DIGITAL_PINS_HIGH)
    }

    /// Whether this pin can serve the given side of a drive pair.
    #[must_use]
    pub const fn suits(self, role: Role) -> bool {
        match role {
            Role::Positive => self.is_analog(),
            Role::Negative => self.is_digital(),
        }
    }
}

impl From<Pin> for u8 {
    fn from(pin: Pin) -> Self {
        pin.0
    }
}

impl TryFrom<u8> for Pin {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self> {
        Self::try_new(number)
    }
}

// `RangeInclusive::contains` is not const.
const fn in_range(value: u8, range: &RangeInclusive<u8>) -> bool {
    *range.start() <= value && value <= *range.end()
}

/// Capability class of a pin.
#[expect(
    clippy::module_name_repetitions,
    reason = "`Kind` alone is ambiguous once re-exported at the crate root"
)]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinKind {
    #[display("analog")]
    Analog,
    #[display("digital")]
    Digital,
}

/// Which side of an LED drive pair a pin sits on.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Anode side; sources current.
    #[display("positive")]
    Positive,
    /// Cathode side; sinks current.
    #[display("negative")]
    Negative,
}

impl Role {
    /// The capability a pin needs to fill this role.
    #[must_use]
    pub const fn required_kind(self) -> PinKind {
        match self {
            Self::Positive => PinKind::Analog,
            Self::Negative => PinKind::Digital,
        }
    }
}
