//! This module provides [`WordBuffer`], an arbitrary-precision unsigned
//! integer over 32-bit words, along with its hex codec, bitwise logic,
//! shifts, addition, subtraction and comparison.
//!
//! Every operation borrows its operands and returns a newly allocated
//! buffer.

/// Addition with carry propagation.
pub mod add;
pub mod bitwise;
pub mod buffer;
/// Magnitude comparison.
pub mod cmp;
pub mod convert;
pub mod hex;
pub mod shift;
/// Subtraction with borrow propagation.
pub mod sub;
/// Word type and carry/borrow primitives.
pub mod word;

pub use buffer::WordBuffer;
pub use shift::BitShift;
pub use word::{Word, WideWord};
