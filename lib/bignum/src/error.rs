//! Error type.

/// Result type.
///
/// A result with the crate's [`enum@Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by fallible [`crate::WordBuffer`] operations.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A hex string contained a character outside `0-9a-fA-F`.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The rejected character.
        digit: char,
        /// Index of the rejected character in the input.
        position: usize,
    },
    /// Subtraction of a larger number from a smaller one.
    #[error("subtracting a larger number from a smaller one is not allowed")]
    Underflow,
    /// An argument outside the domain of an operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
