use std::cmp::Ordering;

use super::errors::UnresolvedTie;
use super::hands::{Combination, Hand};

/// Orders two hands: combination first, then the triple for full houses,
/// then the tie-break rank, then the rank cascade. Hands that agree on all
/// of it cannot be ordered and produce an [`UnresolvedTie`].
pub fn compare(a: &Hand, b: &Hand) -> Result<Ordering, UnresolvedTie> {
    if a.combination() != b.combination() {
        return Ok(a.combination().cmp(&b.combination()));
    }

    if a.combination() == Combination::FullHouse {
        match a.primary_rank().cmp(&b.primary_rank()) {
            Ordering::Equal => {}
            decided => return Ok(decided),
        }
    }

    if a.tie_break() != b.tie_break() {
        return Ok(a.tie_break().cmp(&b.tie_break()));
    }

    a.ranks()
        .zip(b.ranks())
        .map(|(left, right)| left.cmp(&right))
        .find(|ordering| *ordering != Ordering::Equal)
        .ok_or_else(|| UnresolvedTie {
            first: a.to_string(),
            second: b.to_string(),
        })
}

/// `true` when `a` beats `b`.
pub fn greater_than(a: &Hand, b: &Hand) -> Result<bool, UnresolvedTie> {
    Ok(compare(a, b)? == Ordering::Greater)
}

impl Hand {
    pub fn beats(&self, other: &Hand) -> Result<bool, UnresolvedTie> {
        greater_than(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("2D 9C AS AH AC", "3D 6D 7D TD QD", Ordering::Less)] // trips < flush
    #[case("9S 9H 9C 9D 2S", "AS AH AC KD KS", Ordering::Greater)] // quads > full house
    #[case("TH JH QH KH AH", "9C TC JC QC KC", Ordering::Greater)] // royal > straight flush
    #[case("5C 6C 7C 8C 9C", "4H 5H 6H 7H 8H", Ordering::Greater)]
    #[case("2H 2D 4C 4D 4S", "3C 3D 3S 9S 9D", Ordering::Greater)] // triple decides
    #[case("3C 3D 3S AS AD", "3H 3C 3D KS KD", Ordering::Greater)] // same triple, pair decides
    #[case("5H 5C KS KD 2C", "6H 6C QS QD AC", Ordering::Greater)] // higher pair decides
    #[case("5H 5C KS KD 2C", "4H 4C KH KC 3C", Ordering::Greater)] // cascade after top pair
    #[case("TS JH QC KD AS", "9S TH JC QD KS", Ordering::Greater)]
    fn test_compare(#[case] first: &str, #[case] second: &str, #[case] expected: Ordering) {
        let (a, b) = (hand(first), hand(second));
        assert_eq!(compare(&a, &b), Ok(expected));
        assert_eq!(compare(&b, &a), Ok(expected.reverse()));
    }

    #[test]
    fn test_full_house_uses_triple_not_pair() {
        let low_triple_high_pair = hand("3C 3D 3S AS AD");
        let high_triple_low_pair = hand("4C 4D 4S 2S 2D");
        assert!(!low_triple_high_pair
            .beats(&high_triple_low_pair)
            .unwrap());
        assert!(high_triple_low_pair
            .beats(&low_triple_high_pair)
            .unwrap());
    }

    #[test]
    fn test_cascade_decides_equal_pairs() {
        let a = hand("4D 6S 9H QH QC");
        let b = hand("3D 6D 7H QD QS");
        assert_eq!(a.tie_break(), b.tie_break());
        assert_eq!(greater_than(&a, &b), Ok(true));
        assert_eq!(greater_than(&b, &a), Ok(false));
    }

    #[test]
    fn test_identical_ranks_are_unresolved() {
        let a = hand("2H 3D 5S 9C KD");
        let b = hand("2C 3H 5D 9S KH");
        let err = compare(&a, &b).unwrap_err();
        assert_eq!(err.first, a.to_string());
        assert_eq!(err.second, b.to_string());
        assert!(greater_than(&b, &a).is_err());
    }

    #[test]
    fn test_duplicate_hand_is_unresolved() {
        let a = hand("AH AH KD KD 2S");
        assert!(a.beats(&a.clone()).is_err());
    }
}
