//! Logical shifts of [`WordBuffer`].
//!
//! Bits are moved across the word sequence directly: every source word is
//! widened to a [`WideWord`] and split back into the two destination words it
//! straddles, so any bit count works regardless of word-boundary alignment.

use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::{
    arithmetic::{
        buffer::WordBuffer,
        word::{join, split, WideWord, Word},
    },
    error::{Error, Result},
};

/// Direction of a bit shift.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BitShift {
    /// Towards the most significant end, i.e. multiplication by a power of
    /// two.
    Left,
    /// Towards the least significant end, i.e. floored division by a power
    /// of two.
    Right,
}

impl WordBuffer {
    /// Shift `self` left by `bit_count` bits, computing `self * 2^bit_count`.
    ///
    /// The buffer grows by `bit_count` bits, rounded up to whole words.
    #[must_use]
    pub fn shift_left(&self, bit_count: usize) -> Self {
        let bits_in_word = Word::BITS as usize;
        let (word_shift, bit_shift) =
            (bit_count / bits_in_word, bit_count % bits_in_word);
        let len = self.word_count() + bit_count.div_ceil(bits_in_word);

        // Destination word `i` receives the low part of source word
        // `i - word_shift` and the high part of the word below it.
        Self::from_lsb_words((0..len).map(|i| {
            let Some(source) = i.checked_sub(word_shift) else {
                return 0;
            };
            let low = source.checked_sub(1).map_or(0, |j| self.word_from_lsb(j));
            let wide = join(self.word_from_lsb(source), low) << bit_shift;
            split(wide).0
        }))
    }

    /// Shift `self` right by `bit_count` bits, computing
    /// `floor(self / 2^bit_count)`.
    ///
    /// The word count is preserved. Shifting out every bit yields zero.
    #[must_use]
    pub fn shift_right(&self, bit_count: usize) -> Self {
        let bits_in_word = Word::BITS as usize;
        let (word_shift, bit_shift) =
            (bit_count / bits_in_word, bit_count % bits_in_word);

        if word_shift >= self.word_count() {
            return Self::allocate(self.word_count());
        }

        Self::from_lsb_words((0..self.word_count()).map(|i| {
            let source = i + word_shift;
            let wide: WideWord = join(
                self.word_from_lsb(source + 1),
                self.word_from_lsb(source),
            ) >> bit_shift;
            split(wide).1
        }))
    }

    /// Shift `self` by a signed `bit_count` in the given `direction`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] - if `bit_count` is negative or does not
    ///   fit into `usize`.
    pub fn shift(&self, direction: BitShift, bit_count: i64) -> Result<Self> {
        let Ok(bit_count) = usize::try_from(bit_count) else {
            tracing::debug!(bit_count, ?direction, "rejected shift count");
            return Err(Error::InvalidArgument(
                "bit count must be a non-negative integer",
            ));
        };

        Ok(match direction {
            BitShift::Left => self.shift_left(bit_count),
            BitShift::Right => self.shift_right(bit_count),
        })
    }
}

impl Shl<usize> for WordBuffer {
    type Output = Self;

    /// Computes the bitwise shift left operation.
    ///
    /// Differently from the built-in numeric types (u8, u32, u64, etc.) this
    /// operation never overflows: the result grows to hold every bit.
    fn shl(self, rhs: usize) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl Shl<usize> for &WordBuffer {
    type Output = WordBuffer;

    fn shl(self, rhs: usize) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl ShlAssign<usize> for WordBuffer {
    fn shl_assign(&mut self, rhs: usize) {
        *self = self.shift_left(rhs);
    }
}

impl Shr<usize> for WordBuffer {
    type Output = Self;

    /// Computes bitwise shift right operation.
    ///
    /// Differently from the built-in numeric types (u8, u32, u64, etc.) this
    /// operation does *not* panic if the number of bits shifted is larger
    /// than the width of the buffer. Instead the result will be saturated to
    /// zero.
    fn shr(self, rhs: usize) -> Self::Output {
        self.shift_right(rhs)
    }
}

impl Shr<usize> for &WordBuffer {
    type Output = WordBuffer;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shift_right(rhs)
    }
}

impl ShrAssign<usize> for WordBuffer {
    fn shr_assign(&mut self, rhs: usize) {
        *self = self.shift_right(rhs);
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use crate::{from_hex, BitShift, Error, WordBuffer};

    #[test]
    fn shift_left_across_words() {
        let value = from_hex!("77f4db377ecae90c");
        let shifted = value.shift_left(36);
        assert_eq!(shifted.to_hex(), "77f4db377ecae90c000000000");
        assert_eq!(shifted.word_count(), 2 + 2);
    }

    #[test]
    fn shift_left_whole_words() {
        let value = WordBuffer::from_words([0xdead_beef]);
        let shifted = value.shift_left(64);
        assert_eq!(shifted.words(), &[0xdead_beef, 0, 0]);
    }

    #[test]
    fn shift_right_keeps_word_count() {
        let value = from_hex!("ad63c52a31682b2a5119acc30c16b956005b943c");
        let shifted = value.shift_right(16);
        assert_eq!(shifted.to_hex(), "ad63c52a31682b2a5119acc30c16b956005b");
        assert_eq!(shifted.word_count(), value.word_count());
    }

    #[test]
    fn shift_right_past_width_is_zero() {
        let value = WordBuffer::from_words([u32::MAX, u32::MAX]);
        assert_eq!(value.shift_right(64).words(), &[0, 0]);
        assert_eq!(value.shift_right(1000).words(), &[0, 0]);
        assert_eq!(value.shift_right(63).words(), &[0, 1]);
    }

    #[test]
    fn shift_by_zero_is_identity() {
        let value = WordBuffer::from_words([0, 0x1234, 0x5678]);
        assert_eq!(value.shift_left(0).words(), value.words());
        assert_eq!(value.shift_right(0).words(), value.words());
    }

    #[test]
    fn shift_zero_width_buffer() {
        let empty = WordBuffer::allocate(0);
        assert_eq!(empty.shift_left(5).words(), &[0]);
        assert_eq!(empty.shift_right(5).word_count(), 0);
    }

    #[test]
    fn shifted_bits_follow_original() {
        let value = from_hex!("9");
        let shifted = value.shift_left(35);
        assert_eq!(shifted.num_bits(), 4 + 35);
        assert!(shifted.get_bit(38) && shifted.get_bit(35));
        assert!(!shifted.get_bit(37) && !shifted.get_bit(36));
        assert!((0..35).all(|i| !shifted.get_bit(i)));
    }

    #[test]
    fn signed_shift() {
        let value = from_hex!("1");
        assert_eq!(value.shift(BitShift::Left, 4), Ok(from_hex!("10")));
        assert_eq!(value.shift(BitShift::Right, 1), Ok(from_hex!("0")));
        assert!(matches!(
            value.shift(BitShift::Left, -1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            value.shift(BitShift::Right, i64::MIN),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn shift_operators() {
        let mut value = from_hex!("ff");
        assert_eq!(&value << 8, from_hex!("ff00"));
        assert_eq!(&value >> 4, from_hex!("f"));
        value <<= 40;
        value >>= 36;
        assert_eq!(value, from_hex!("ff0"));
    }

    #[test]
    fn shifts_match_reference() {
        proptest!(|(words: Vec<u32>, bits in 0usize..300)| {
            let value = WordBuffer::from_words(words);
            let reference = BigUint::from(&value);

            let left = value.shift_left(bits);
            prop_assert_eq!(BigUint::from(&left), &reference << bits);
            prop_assert_eq!(
                left.word_count(),
                value.word_count() + bits.div_ceil(32)
            );

            let right = value.shift_right(bits);
            prop_assert_eq!(BigUint::from(&right), &reference >> bits);
            prop_assert_eq!(right.word_count(), value.word_count());
        });
    }
}
