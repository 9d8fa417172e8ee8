use core::cmp::Ordering;

use crate::arithmetic::buffer::WordBuffer;

impl WordBuffer {
    /// Compare magnitudes of `self` and `rhs`.
    ///
    /// Leading zero words are ignored: the number with more significant words
    /// is larger, otherwise words are compared from the most significant one
    /// down, and the first difference decides.
    #[must_use]
    pub fn compare(&self, rhs: &Self) -> Ordering {
        let (a, b) = (self.significant_words(), rhs.significant_words());
        // Equal-length word slices order lexicographically, most significant
        // word first.
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl Ord for WordBuffer {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.compare(rhs)
    }
}

impl PartialOrd for WordBuffer {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

#[cfg(test)]
mod test {
    use core::cmp::Ordering;

    use num_bigint::BigUint;
    use proptest::prelude::*;

    use crate::{from_hex, WordBuffer};

    #[test]
    fn compare_against_zero() {
        let a = from_hex!(
            "33ced2c76b26cae94e162c4c0d2c0ff7c13094b0185a3c122e732d5ba77efebc"
        );
        assert_eq!(a.compare(&from_hex!("0")), Ordering::Greater);
        assert_eq!(from_hex!("0").compare(&a), Ordering::Less);
        assert_eq!(
            WordBuffer::allocate(0).compare(&WordBuffer::allocate(3)),
            Ordering::Equal
        );
    }

    #[test]
    fn compare_ignores_leading_zero_words() {
        let a = WordBuffer::from_words([0, 0, 0, 5]);
        let b = WordBuffer::from_words([4, 0]);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);

        let a = WordBuffer::from_words([0, 1, 2]);
        let b = WordBuffer::from_words([1, 2]);
        assert_eq!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn compare_decides_on_first_differing_word() {
        // Equal high words, the middle word decides before the last one.
        let a = WordBuffer::from_words([7, 1, 9]);
        let b = WordBuffer::from_words([7, 2, 0]);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);

        let a = WordBuffer::from_words([7, 2, 1]);
        let b = WordBuffer::from_words([7, 2, 0]);
        assert_eq!(a.compare(&b), Ordering::Greater);
        assert!(a > b);
        assert!(b <= a);
        assert_eq!(a.clone().max(b), a);
    }

    #[test]
    fn compare_matches_reference() {
        proptest!(|(a: Vec<u32>, b: Vec<u32>)| {
            let (a, b) = (WordBuffer::from_words(a), WordBuffer::from_words(b));
            prop_assert_eq!(a.compare(&b), BigUint::from(&a).cmp(&BigUint::from(&b)));
        });
    }
}
