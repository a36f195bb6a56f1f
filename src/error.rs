use derive_more::derive::{Display, Error};

use crate::pin::Role;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The pin number is above the highest pin on the board.
    #[display("Pin {_0} is out of range")]
    PinOutOfRange(#[error(not(source))] u8),

    /// The same pin appears twice within one set.
    #[display("Pin {_0} is assigned twice in the same role")]
    DuplicatePin(#[error(not(source))] u8),

    /// The same pin appears in both the positive and negative sets.
    #[display("Pin {_0} is assigned as both positive and negative")]
    SharedPin(#[error(not(source))] u8),

    /// The pin lacks the capability its role needs.
    #[display("Pin {pin} cannot serve as a {role} pin")]
    WrongPinKind { pin: u8, role: Role },

    /// A positive or negative index is outside its set.
    #[display("Index out of bounds")]
    IndexOutOfBounds,
}
