use core::{
    borrow::Borrow,
    ops::{Add, AddAssign},
};

use num_traits::{CheckedAdd, Zero};

use crate::arithmetic::{
    buffer::WordBuffer,
    word::{adc, Word},
};

impl WordBuffer {
    /// Add `rhs` to `self`.
    ///
    /// Operands are right-aligned and the carry runs from the least
    /// significant word up. The result holds as many words as the longer
    /// operand, plus one leading word if a carry remains.
    #[must_use]
    pub fn widening_add(&self, rhs: &Self) -> Self {
        let len = self.word_count().max(rhs.word_count());
        let mut words = Vec::with_capacity(len + 1);

        let mut carry: Word = 0;
        for i in 0..len {
            let (sum, next) =
                adc(self.word_from_lsb(i), rhs.word_from_lsb(i), carry);
            words.push(sum);
            carry = next;
        }
        if carry != 0 {
            words.push(carry);
        }

        Self::from_lsb_words(words)
    }
}

impl<B: Borrow<WordBuffer>> Add<B> for WordBuffer {
    type Output = WordBuffer;

    fn add(self, rhs: B) -> Self::Output {
        self.widening_add(rhs.borrow())
    }
}

impl<B: Borrow<WordBuffer>> Add<B> for &WordBuffer {
    type Output = WordBuffer;

    fn add(self, rhs: B) -> Self::Output {
        self.widening_add(rhs.borrow())
    }
}

impl<B: Borrow<WordBuffer>> AddAssign<B> for WordBuffer {
    fn add_assign(&mut self, rhs: B) {
        *self = self.widening_add(rhs.borrow());
    }
}

impl CheckedAdd for WordBuffer {
    /// Never fails, since the result grows as needed.
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self.widening_add(v))
    }
}

impl Zero for WordBuffer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        WordBuffer::is_zero(self)
    }
}
