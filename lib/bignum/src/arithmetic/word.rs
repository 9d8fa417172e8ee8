use static_assertions::const_assert_eq;

/// Single storage unit of a [`crate::WordBuffer`].
pub type Word = u32;
/// Integer wide enough to hold the sum or product of two [`Word`]s.
pub type WideWord = u64;

/// Number of bytes in a [`Word`].
pub const WORD_BYTES: usize = Word::BITS as usize / 8;
/// Number of bits encoded by a single hex digit.
pub const BITS_PER_HEX_DIGIT: usize = 4;
/// Number of hex digits needed to print a [`Word`].
pub const HEX_DIGITS_PER_WORD: usize = Word::BITS as usize / BITS_PER_HEX_DIGIT;

/// Value one past the largest [`Word`].
const WORD_MODULUS: WideWord = 1 << Word::BITS;

const_assert_eq!(HEX_DIGITS_PER_WORD, 8);
const_assert_eq!(WideWord::BITS, 2 * Word::BITS);

/// Calculate `a + b + carry` and return the result and carry.
#[inline(always)]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let tmp = a as WideWord + b as WideWord + carry as WideWord;
    let carry = (tmp >> Word::BITS) as Word;
    (tmp as Word, carry)
}

/// Calculate `a - b - borrow` and return the result and borrow.
#[inline(always)]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let tmp = WORD_MODULUS + a as WideWord - b as WideWord - borrow as WideWord;
    let borrow = if tmp >> Word::BITS == 0 { 1 } else { 0 };
    (tmp as Word, borrow)
}

/// Join a pair of words into a [`WideWord`], `high` taking the upper half.
#[inline(always)]
#[must_use]
pub const fn join(high: Word, low: Word) -> WideWord {
    (high as WideWord) << Word::BITS | low as WideWord
}

/// Split a [`WideWord`] into its `(high, low)` words.
#[inline(always)]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn split(wide: WideWord) -> (Word, Word) {
    ((wide >> Word::BITS) as Word, wide as Word)
}
