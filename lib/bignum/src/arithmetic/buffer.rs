//! This module contains the [`WordBuffer`] unsigned big integer, stored as a
//! growable sequence of 32-bit [`Word`]s, most significant word first.

use core::{
    fmt::{Debug, Result},
    hash::{Hash, Hasher},
};

use crate::arithmetic::word::{Word, WORD_BYTES};

/// Heap-allocated big unsigned integer.
///
/// Words are kept most significant first. Leading zero words are allowed and
/// preserved by every operation; only the hex representation is trimmed.
/// Equality, ordering and hashing consider the numeric value, so buffers that
/// differ only by leading zero words compare equal.
#[derive(Clone)]
pub struct WordBuffer {
    pub(crate) words: Vec<Word>,
}

impl Default for WordBuffer {
    /// A single zero word.
    fn default() -> Self {
        Self::allocate(1)
    }
}

impl WordBuffer {
    /// Create a [`WordBuffer`] of `word_count` zero words.
    ///
    /// A `word_count` of zero is valid and represents zero without any words.
    #[must_use]
    pub fn allocate(word_count: usize) -> Self {
        Self { words: vec![0; word_count] }
    }

    /// Wrap the provided `words` verbatim, most significant word first.
    #[must_use]
    pub fn from_words(words: impl Into<Vec<Word>>) -> Self {
        Self { words: words.into() }
    }

    /// Number of words held, including leading zero words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of bytes held, i.e. `word_count() * 4`.
    #[must_use]
    pub fn byte_count(&self) -> usize {
        self.words.len() * WORD_BYTES
    }

    /// Returns the words, most significant first.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Consume `self` and return the words, most significant first.
    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Returns the words without leading zero words.
    ///
    /// Empty for a zero value.
    #[must_use]
    pub fn significant_words(&self) -> &[Word] {
        let leading = self.words.iter().take_while(|&&word| word == 0).count();
        &self.words[leading..]
    }

    /// Returns a copy of `self` with leading zero words removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::from_words(self.significant_words())
    }

    /// Checks `self` is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Return the minimum number of bits needed to encode this number.
    #[must_use]
    pub fn num_bits(&self) -> usize {
        match self.significant_words() {
            [] => 0,
            [high, rest @ ..] => {
                rest.len() * Word::BITS as usize
                    + (Word::BITS - high.leading_zeros()) as usize
            }
        }
    }

    /// Find the `i`-th bit of `self`, bit `0` being the least significant.
    ///
    /// Bits above the stored words are `false`.
    #[must_use]
    pub fn get_bit(&self, i: usize) -> bool {
        let bits_in_word = Word::BITS as usize;
        let word = self.word_from_lsb(i / bits_in_word);
        word >> (i % bits_in_word) & 1 == 1
    }

    /// Returns the `i`-th word counting from the least significant end.
    ///
    /// Words past the most significant one read as zero, which right-aligns
    /// operands of different lengths.
    #[inline]
    pub(crate) fn word_from_lsb(&self, i: usize) -> Word {
        self.words.len().checked_sub(i + 1).map_or(0, |index| self.words[index])
    }

    /// Build a buffer from words produced least significant first.
    pub(crate) fn from_lsb_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.reverse();
        Self { words }
    }
}

impl PartialEq for WordBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.significant_words() == other.significant_words()
    }
}

impl Eq for WordBuffer {}

impl Hash for WordBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl Debug for WordBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        f.debug_struct("WordBuffer")
            .field("value", &format_args!("{self:#x}"))
            .field("words", &self.words.len())
            .finish()
    }
}

impl AsRef<[Word]> for WordBuffer {
    #[inline]
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}
