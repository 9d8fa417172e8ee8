//! Bitwise logic over [`WordBuffer`]s.
//!
//! Operands of different lengths are right-aligned: the least significant
//! words line up and the missing high words of the shorter operand read as
//! zero. Results hold as many words as the longer operand.

use core::{
    borrow::Borrow,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not,
    },
};

use crate::arithmetic::{buffer::WordBuffer, word::Word};

impl WordBuffer {
    /// Word-wise one's complement of `self`.
    ///
    /// The word count is preserved, so zero high words become
    /// [`Word::MAX`].
    #[must_use]
    pub fn complement(&self) -> Self {
        Self::from_words(self.words.iter().map(|word| !word).collect::<Vec<_>>())
    }

    /// Bitwise exclusive or of `self` and `rhs`.
    #[must_use]
    pub fn xor(&self, rhs: &Self) -> Self {
        self.zip_aligned(rhs, |a, b| a ^ b)
    }

    /// Bitwise or of `self` and `rhs`.
    #[must_use]
    pub fn or(&self, rhs: &Self) -> Self {
        self.zip_aligned(rhs, |a, b| a | b)
    }

    /// Bitwise and of `self` and `rhs`.
    #[must_use]
    pub fn and(&self, rhs: &Self) -> Self {
        self.zip_aligned(rhs, |a, b| a & b)
    }

    /// Combine right-aligned words of `self` and `rhs` with `op`.
    fn zip_aligned(&self, rhs: &Self, op: impl Fn(Word, Word) -> Word) -> Self {
        let len = self.word_count().max(rhs.word_count());
        Self::from_lsb_words(
            (0..len).map(|i| op(self.word_from_lsb(i), rhs.word_from_lsb(i))),
        )
    }
}

macro_rules! impl_bit_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident, $method:ident) => {
        impl<B: Borrow<WordBuffer>> $op<B> for WordBuffer {
            type Output = WordBuffer;

            fn $fn(self, rhs: B) -> Self::Output {
                WordBuffer::$method(&self, rhs.borrow())
            }
        }

        impl<B: Borrow<WordBuffer>> $op<B> for &WordBuffer {
            type Output = WordBuffer;

            fn $fn(self, rhs: B) -> Self::Output {
                WordBuffer::$method(self, rhs.borrow())
            }
        }

        impl<B: Borrow<WordBuffer>> $op_assign<B> for WordBuffer {
            fn $fn_assign(&mut self, rhs: B) {
                *self = WordBuffer::$method(self, rhs.borrow());
            }
        }
    };
}

impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, or);
impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and);

impl Not for WordBuffer {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl Not for &WordBuffer {
    type Output = WordBuffer;

    fn not(self) -> Self::Output {
        self.complement()
    }
}
