use core::{
    borrow::Borrow,
    cmp::Ordering,
    ops::{Sub, SubAssign},
};

use num_traits::CheckedSub;

use crate::{
    arithmetic::{
        buffer::WordBuffer,
        word::{sbb, Word},
    },
    error::{Error, Result},
};

impl WordBuffer {
    /// Subtract `rhs` from `self`.
    ///
    /// Operands are right-aligned and the borrow runs from the least
    /// significant word up. The result holds as many words as `self`.
    /// Neither operand is modified.
    ///
    /// # Errors
    ///
    /// * [`Error::Underflow`] - if `rhs` is greater than `self`.
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        if self.compare(rhs) == Ordering::Less {
            tracing::debug!(lhs = %self, rhs = %rhs, "rejected subtraction underflow");
            return Err(Error::Underflow);
        }

        let mut borrow: Word = 0;
        let difference = Self::from_lsb_words((0..self.word_count()).map(|i| {
            let (difference, next) =
                sbb(self.word_from_lsb(i), rhs.word_from_lsb(i), borrow);
            borrow = next;
            difference
        }));
        debug_assert_eq!(borrow, 0, "borrow out of the minuend");

        Ok(difference)
    }
}

impl<B: Borrow<WordBuffer>> Sub<B> for WordBuffer {
    type Output = WordBuffer;

    /// Subtract two numbers and panic on underflow.
    ///
    /// Use [`WordBuffer::subtract`] for the fallible version.
    fn sub(self, rhs: B) -> Self::Output {
        &self - rhs
    }
}

impl<B: Borrow<WordBuffer>> Sub<B> for &WordBuffer {
    type Output = WordBuffer;

    /// Subtract two numbers and panic on underflow.
    ///
    /// Use [`WordBuffer::subtract`] for the fallible version.
    fn sub(self, rhs: B) -> Self::Output {
        match self.subtract(rhs.borrow()) {
            Ok(difference) => difference,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<B: Borrow<WordBuffer>> SubAssign<B> for WordBuffer {
    fn sub_assign(&mut self, rhs: B) {
        *self = &*self - rhs;
    }
}

impl CheckedSub for WordBuffer {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.subtract(v).ok()
    }
}
