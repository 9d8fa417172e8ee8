//! Hexadecimal encoding of [`WordBuffer`].
//!
//! Parsing accepts `0-9a-fA-F` without a `0x` prefix, and an empty string
//! denotes zero. Formatting always yields the canonical form: lowercase (or
//! uppercase, for [`UpperHex`]) digits without leading zeroes, `"0"` for zero.

use core::{
    fmt::{Display, LowerHex, Result, UpperHex, Write},
    str::FromStr,
};

use crate::{
    arithmetic::{
        buffer::WordBuffer,
        word::{Word, BITS_PER_HEX_DIGIT, HEX_DIGITS_PER_WORD},
    },
    error::{Error, Result as CrateResult},
};

const HEX_RADIX: u32 = 16;

impl WordBuffer {
    /// Parse a number from a hex string.
    ///
    /// The digits are left-padded with zeroes to a multiple of eight, then
    /// every group of eight digits becomes one word, most significant first.
    /// The result always holds at least one word.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidDigit`] - if `hex` contains a character outside
    ///   `0-9a-fA-F`. No buffer is produced in that case.
    pub fn parse(hex: &str) -> CrateResult<Self> {
        let digits = hex
            .chars()
            .enumerate()
            .map(|(position, digit)| parse_digit(digit, position))
            .collect::<CrateResult<Vec<Word>>>()
            .inspect_err(|err| tracing::debug!(%err, "rejected hex input"))?;

        let word_count = digits.len().div_ceil(HEX_DIGITS_PER_WORD).max(1);
        let padding = word_count * HEX_DIGITS_PER_WORD - digits.len();

        let mut words = vec![0; word_count];
        for (index, digit) in digits.into_iter().enumerate() {
            let word = &mut words[(index + padding) / HEX_DIGITS_PER_WORD];
            *word = *word << BITS_PER_HEX_DIGIT | digit;
        }

        Ok(Self::from_words(words))
    }

    /// Canonical lowercase hex representation of `self`.
    ///
    /// Equivalent to `format!("{self:x}")`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    /// Write every word as eight zero-padded digits with the leading zeroes
    /// of the whole number stripped.
    fn write_digits(&self, out: &mut impl Write, upper: bool) -> Result {
        let Some((high, rest)) = self.significant_words().split_first() else {
            return out.write_char('0');
        };

        // The highest non-zero word is unpadded, the rest keep their width.
        if upper {
            write!(out, "{high:X}")?;
            for word in rest {
                write!(out, "{word:08X}")?;
            }
        } else {
            write!(out, "{high:x}")?;
            for word in rest {
                write!(out, "{word:08x}")?;
            }
        }
        Ok(())
    }

    fn fmt_hex(&self, f: &mut core::fmt::Formatter<'_>, upper: bool) -> Result {
        let mut digits = String::with_capacity(self.words.len() * HEX_DIGITS_PER_WORD);
        self.write_digits(&mut digits, upper)?;
        f.pad_integral(true, "0x", &digits)
    }
}

// Try to parse a hex digit at `position` of the input.
fn parse_digit(digit: char, position: usize) -> CrateResult<Word> {
    digit.to_digit(HEX_RADIX).ok_or(Error::InvalidDigit { digit, position })
}

impl FromStr for WordBuffer {
    type Err = Error;

    fn from_str(s: &str) -> CrateResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for WordBuffer {
    type Error = Error;

    fn try_from(value: &str) -> CrateResult<Self> {
        Self::parse(value)
    }
}

impl LowerHex for WordBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        self.fmt_hex(f, false)
    }
}

impl UpperHex for WordBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        self.fmt_hex(f, true)
    }
}

impl Display for WordBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        self.fmt_hex(f, false)
    }
}

/// This macro converts a string hex number to a [`WordBuffer`].
///
/// Panics if the literal holds a non-hex character.
#[macro_export]
macro_rules! from_hex {
    ($num:literal) => {
        match $crate::WordBuffer::parse($num) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    };
}
