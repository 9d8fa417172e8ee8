//! Conversions between [`WordBuffer`] and other representations.

use num_bigint::BigUint;

use crate::arithmetic::{
    buffer::WordBuffer,
    word::{Word, WORD_BYTES},
};

impl WordBuffer {
    /// Create a [`WordBuffer`] from big-endian `bytes`.
    ///
    /// The bytes are left-padded with zeroes to a whole number of words. The
    /// result always holds at least one word.
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let word_count = bytes.len().div_ceil(WORD_BYTES).max(1);
        let mut padded = vec![0u8; word_count * WORD_BYTES - bytes.len()];
        padded.extend_from_slice(bytes);

        let words = padded
            .chunks_exact(WORD_BYTES)
            .map(|chunk| {
                let mut buf = [0u8; WORD_BYTES];
                buf.copy_from_slice(chunk);
                Word::from_be_bytes(buf)
            })
            .collect::<Vec<_>>();
        Self::from_words(words)
    }

    /// Big-endian bytes of every word, [`WordBuffer::byte_count`] in total.
    #[must_use]
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|word| word.to_be_bytes()).collect()
    }
}

/// From traits implementation for primitives.
macro_rules! impl_from_primitive {
    ($($int:ty),*) => {
        $(
            impl From<$int> for WordBuffer {
                #[inline]
                fn from(val: $int) -> WordBuffer {
                    WordBuffer::from_be_bytes(&val.to_be_bytes())
                }
            }
        )*
    };
}

impl_from_primitive!(u8, u16, u32, u64, u128, usize);

impl From<&WordBuffer> for BigUint {
    fn from(value: &WordBuffer) -> Self {
        // `BigUint` keeps its 32-bit digits least significant first.
        let digits: Vec<u32> = value.words.iter().rev().copied().collect();
        BigUint::new(digits)
    }
}

impl From<WordBuffer> for BigUint {
    fn from(value: WordBuffer) -> Self {
        BigUint::from(&value)
    }
}

impl From<&BigUint> for WordBuffer {
    fn from(value: &BigUint) -> Self {
        let digits = value.to_u32_digits();
        if digits.is_empty() {
            return WordBuffer::default();
        }
        WordBuffer::from_lsb_words(digits)
    }
}

impl From<BigUint> for WordBuffer {
    fn from(value: BigUint) -> Self {
        WordBuffer::from(&value)
    }
}
