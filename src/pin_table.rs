//! A fully const table of the positive and negative pins that drive an LED matrix.
//!
//! See [`PinTable`] for examples and the invariants it checks.

use itertools::iproduct;

use crate::{
    Error, Result,
    pin::{MAX_PIN, Pin, Role},
};

/// Positive (anode) and negative (cathode) pins for a multiplexed LED matrix.
///
/// Lighting one LED means driving one positive pin high and one negative pin
/// low, so `P` positive and `N` negative pins address up to `P * N` LEDs.
///
/// # Examples
///
/// ```
/// use led_matrix_pins::pin_table::PinTable;
///
/// const TABLE: PinTable<2, 3> = PinTable::new([16, 17], [3, 4, 5]);
/// const _: () = assert!(TABLE.led_count() == 6);
///
/// let pair = TABLE.pair(1, 2)?;
/// assert_eq!((pair.positive.number(), pair.negative.number()), (17, 5));
/// # Ok::<(), led_matrix_pins::Error>(())
/// ```
///
/// Compile-time validation catches wiring mistakes:
///
/// ```compile_fail
/// # use led_matrix_pins::pin_table::PinTable;
/// // Pin 40 does not exist on the board
/// const _: PinTable<1, 1> = PinTable::new([40], [3]);
/// ```
///
/// ```compile_fail
/// # use led_matrix_pins::pin_table::PinTable;
/// // Pin 16 assigned twice
/// const _: PinTable<2, 1> = PinTable::new([16, 16], [3]);
/// ```
///
/// ```compile_fail
/// # use led_matrix_pins::pin_table::PinTable;
/// // Pin 4 on both sides
/// const _: PinTable<1, 1> = PinTable::new([4], [4]);
/// ```
///
/// ```compile_fail
/// # use led_matrix_pins::pin_table::PinTable;
/// // Pin 16 is analog, not a digital-only sink
/// const _: PinTable<1, 1> = PinTable::new([17], [16]);
/// ```
///
/// ```compile_fail
/// # use led_matrix_pins::pin_table::PinTable;
/// // Pin 4 is digital-only, not an analog-capable source
/// const _: PinTable<1, 1> = PinTable::new([4], [3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinTable<const P: usize, const N: usize> {
    positive: [Pin; P],
    negative: [Pin; N],
}

/// One addressable LED: a positive pin, a negative pin, and where each sits in its set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinPair {
    pub positive: Pin,
    pub negative: Pin,
    pub positive_index: usize,
    pub negative_index: usize,
}

impl<const P: usize, const N: usize> PinTable<P, N> {
    /// Constructor: verifies every pin is in range, unique, on one side only,
    /// and capable of its role. Panics otherwise, which is a compile error in
    /// a `const` context.
    ///
    /// # Panics
    ///
    /// Panics on the same violations [`PinTable::try_new`] reports as errors.
    #[must_use]
    pub const fn new(positive: [u8; P], negative: [u8; N]) -> Self {
        match validate(&positive, &negative) {
            Ok(()) => {}
            Err(Error::PinOutOfRange(_)) => panic!("pin number out of range"),
            Err(Error::DuplicatePin(_)) => panic!("duplicate pin within one set"),
            Err(Error::SharedPin(_)) => panic!("pin appears in both positive and negative sets"),
            Err(Error::WrongPinKind {
                role: Role::Positive,
                ..
            }) => panic!("positive pin is not analog-capable"),
            Err(Error::WrongPinKind {
                role: Role::Negative,
                ..
            }) => panic!("negative pin is not digital-only"),
            Err(Error::IndexOutOfBounds) => panic!("index out of bounds"),
        }
        Self::from_checked(positive, negative)
    }

    /// Runtime constructor for tables that are not known at compile time.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: [`Error::PinOutOfRange`],
    /// [`Error::DuplicatePin`], [`Error::SharedPin`] or [`Error::WrongPinKind`].
    pub fn try_new(positive: [u8; P], negative: [u8; N]) -> Result<Self> {
        validate(&positive, &negative).inspect_err(|err| log_rejection(*err))?;
        Ok(Self::from_checked(positive, negative))
    }

    #[expect(clippy::indexing_slicing, reason = "Loop index is below the array length")]
    #[expect(clippy::arithmetic_side_effects, reason = "Loop index is below the array length")]
    const fn from_checked(positive: [u8; P], negative: [u8; N]) -> Self {
        let mut positive_pins = [Pin::new(0); P];
        let mut i = 0;
        while i < P {
            positive_pins[i] = Pin::new(positive[i]);
            i += 1;
        }

        let mut negative_pins = [Pin::new(0); N];
        let mut j = 0;
        while j < N {
            negative_pins[j] = Pin::new(negative[j]);
            j += 1;
        }

        Self {
            positive: positive_pins,
            negative: negative_pins,
        }
    }

    /// Positive pins in drive order.
    #[must_use]
    pub const fn positive(&self) -> &[Pin; P] {
        &self.positive
    }

    /// Negative pins in drive order.
    #[must_use]
    pub const fn negative(&self) -> &[Pin; N] {
        &self.negative
    }

    #[must_use]
    pub const fn positive_numbers(&self) -> [u8; P] {
        pin_numbers(&self.positive)
    }

    #[must_use]
    pub const fn negative_numbers(&self) -> [u8; N] {
        pin_numbers(&self.negative)
    }

    /// Number of LEDs the table can address.
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Both sets are real arrays, so the product is small"
    )]
    pub const fn led_count(&self) -> usize {
        P * N
    }

    /// Look up the pins for one LED by its positive and negative index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when either index is outside its set.
    pub fn pair(&self, positive_index: usize, negative_index: usize) -> Result<PinPair> {
        let positive = self
            .positive
            .get(positive_index)
            .ok_or(Error::IndexOutOfBounds)?;
        let negative = self
            .negative
            .get(negative_index)
            .ok_or(Error::IndexOutOfBounds)?;
        Ok(PinPair {
            positive: *positive,
            negative: *negative,
            positive_index,
            negative_index,
        })
    }

    /// Every addressable pair, positive-major: all negatives for positive 0, then positive 1, ...
    pub fn pairs(&self) -> impl Iterator<Item = PinPair> + '_ {
        let positives = self.positive.iter().copied().enumerate();
        let negatives = self.negative.iter().copied().enumerate();
        iproduct!(positives, negatives).map(|(positive, negative)| PinPair {
            positive: positive.1,
            negative: negative.1,
            positive_index: positive.0,
            negative_index: negative.0,
        })
    }

    /// Which set holds `pin`, and at what index.
    #[must_use]
    pub fn role_of(&self, pin: Pin) -> Option<(Role, usize)> {
        if let Some(index) = self.positive.iter().position(|&candidate| candidate == pin) {
            return Some((Role::Positive, index));
        }
        self.negative
            .iter()
            .position(|&candidate| candidate == pin)
            .map(|index| (Role::Negative, index))
    }

    #[must_use]
    pub fn contains(&self, pin: Pin) -> bool {
        self.role_of(pin).is_some()
    }

    /// Const equality helper for compile-time assertions.
    ///
    /// ```
    /// use led_matrix_pins::pin_table::PinTable;
    ///
    /// const A: PinTable<2, 2> = PinTable::new([16, 17], [3, 4]);
    /// const B: PinTable<2, 2> = PinTable::new([17, 16], [3, 4]);
    /// const _: () = assert!(A.equals(&A));
    /// const _: () = assert!(!A.equals(&B));
    /// ```
    #[must_use]
    #[expect(clippy::indexing_slicing, reason = "Loop index is below the array length")]
    #[expect(clippy::arithmetic_side_effects, reason = "Loop index is below the array length")]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < P {
            if self.positive[i].number() != other.positive[i].number() {
                return false;
            }
            i += 1;
        }
        let mut j = 0;
        while j < N {
            if self.negative[j].number() != other.negative[j].number() {
                return false;
            }
            j += 1;
        }
        true
    }

    /// Log both pin sets, one line each.
    #[cfg(feature = "defmt")]
    pub fn log_summary(&self) {
        defmt::info!(
            "LED matrix: {} positive x {} negative = {} LEDs",
            P,
            N,
            self.led_count()
        );
        defmt::info!("positive pins: {}", self.positive_numbers());
        defmt::info!("negative pins: {}", self.negative_numbers());
    }
}

#[cfg(feature = "defmt")]
fn log_rejection(err: Error) {
    defmt::warn!("Rejected pin table: {}", err);
}

#[cfg(not(feature = "defmt"))]
const fn log_rejection(_err: Error) {}

#[expect(clippy::indexing_slicing, reason = "Loop index is below the array length")]
#[expect(clippy::arithmetic_side_effects, reason = "Loop index is below the array length")]
const fn pin_numbers<const L: usize>(pins: &[Pin; L]) -> [u8; L] {
    let mut numbers = [0_u8; L];
    let mut i = 0;
    while i < L {
        numbers[i] = pins[i].number();
        i += 1;
    }
    numbers
}

/// Check the table invariants; returns the first violation found.
///
/// Range and uniqueness are checked before capability so that a pin listed on
/// both sides reports [`Error::SharedPin`] rather than a kind mismatch.
#[expect(
    clippy::indexing_slicing,
    reason = "Loop indexes are below the array lengths; pin numbers are checked against MAX_PIN"
)]
#[expect(clippy::arithmetic_side_effects, reason = "Loop index is below the array length")]
const fn validate<const P: usize, const N: usize>(
    positive: &[u8; P],
    negative: &[u8; N],
) -> Result<()> {
    let mut seen = [None::<Role>; MAX_PIN as usize + 1];

    let mut i = 0;
    while i < P {
        let number = positive[i];
        if number > MAX_PIN {
            return Err(Error::PinOutOfRange(number));
        }
        if seen[number as usize].is_some() {
            return Err(Error::DuplicatePin(number));
        }
        seen[number as usize] = Some(Role::Positive);
        i += 1;
    }

    let mut j = 0;
    while j < N {
        let number = negative[j];
        if number > MAX_PIN {
            return Err(Error::PinOutOfRange(number));
        }
        match seen[number as usize] {
            Some(Role::Positive) => return Err(Error::SharedPin(number)),
            Some(Role::Negative) => return Err(Error::DuplicatePin(number)),
            None => {}
        }
        seen[number as usize] = Some(Role::Negative);
        j += 1;
    }

    let mut positive_index = 0;
    while positive_index < P {
        let number = positive[positive_index];
        if !Pin::new(number).suits(Role::Positive) {
            return Err(Error::WrongPinKind {
                pin: number,
                role: Role::Positive,
            });
        }
        positive_index += 1;
    }

    let mut negative_index = 0;
    while negative_index < N {
        let number = negative[negative_index];
        if !Pin::new(number).suits(Role::Negative) {
            return Err(Error::WrongPinKind {
                pin: number,
                role: Role::Negative,
            });
        }
        negative_index += 1;
    }

    Ok(())
}
