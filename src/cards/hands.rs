use std::fmt;
use std::str::FromStr;

use super::basic::{Card, Rank};
use super::errors::{HandError, PokerError};

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Combination {
    HighCard = 1,
    OnePair = 2,
    TwoPairs = 3,
    ThreeOfKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Combination {
    pub fn name(self) -> &'static str {
        match self {
            Combination::HighCard => "High Card",
            Combination::OnePair => "One Pair",
            Combination::TwoPairs => "Two Pairs",
            Combination::ThreeOfKind => "Three of a Kind",
            Combination::Straight => "Straight",
            Combination::Flush => "Flush",
            Combination::FullHouse => "Full House",
            Combination::FourOfKind => "Four of a Kind",
            Combination::StraightFlush => "Straight Flush",
            Combination::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ranks of a hand grouped by how often they occur, largest group first.
/// Groups of equal size are ordered by rank, higher first, so the
/// representative of two pairs is always the higher pair.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RankGroups(Vec<(Rank, usize)>);

impl RankGroups {
    /// Expects cards sorted by rank, highest first.
    fn of(cards: &[Card]) -> Self {
        let mut groups: Vec<(Rank, usize)> = Vec::with_capacity(cards.len());
        for card in cards {
            match groups.last_mut() {
                Some((rank, count)) if *rank == card.rank => *count += 1,
                _ => groups.push((card.rank, 1)),
            }
        }
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self(groups)
    }

    fn count(&self, index: usize) -> usize {
        self.0.get(index).map_or(0, |&(_, count)| count)
    }

    fn primary(&self) -> Rank {
        self.0[0].0
    }
}

/// Everything the predicates look at, computed once per hand.
struct Shape<'a> {
    cards: &'a [Card; HAND_SIZE],
    groups: RankGroups,
}

impl Shape<'_> {
    fn high(&self) -> Rank {
        self.cards[0].rank
    }

    fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    // Ace only counts high, so A-2-3-4-5 is not a straight.
    fn is_straight(&self) -> bool {
        self.cards
            .windows(2)
            .all(|pair| pair[0].rank.value() == pair[1].rank.value() + 1)
    }
}

type Predicate = fn(&Shape) -> Option<Rank>;

/// Evaluated top to bottom, the first match classifies the hand.
const PREDICATES: [(Combination, Predicate); 9] = [
    (Combination::RoyalFlush, royal_flush),
    (Combination::StraightFlush, straight_flush),
    (Combination::FourOfKind, four_of_kind),
    (Combination::FullHouse, full_house),
    (Combination::Flush, flush),
    (Combination::Straight, straight),
    (Combination::ThreeOfKind, three_of_kind),
    (Combination::TwoPairs, two_pairs),
    (Combination::OnePair, one_pair),
];

const ROYAL_RANKS: [Rank; HAND_SIZE] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

fn royal_flush(shape: &Shape) -> Option<Rank> {
    let royal = shape
        .cards
        .iter()
        .map(|card| card.rank)
        .eq(ROYAL_RANKS.iter().copied());
    (royal && shape.is_flush()).then(|| shape.high())
}

fn straight_flush(shape: &Shape) -> Option<Rank> {
    (shape.is_straight() && shape.is_flush()).then(|| shape.high())
}

fn four_of_kind(shape: &Shape) -> Option<Rank> {
    (shape.groups.count(0) == 4).then(|| shape.groups.primary())
}

fn full_house(shape: &Shape) -> Option<Rank> {
    (shape.groups.count(0) == 3 && shape.groups.count(1) == 2).then(|| shape.groups.primary())
}

fn flush(shape: &Shape) -> Option<Rank> {
    shape.is_flush().then(|| shape.high())
}

fn straight(shape: &Shape) -> Option<Rank> {
    shape.is_straight().then(|| shape.high())
}

fn three_of_kind(shape: &Shape) -> Option<Rank> {
    (shape.groups.count(0) == 3).then(|| shape.groups.primary())
}

fn two_pairs(shape: &Shape) -> Option<Rank> {
    (shape.groups.count(0) == 2 && shape.groups.count(1) == 2).then(|| shape.groups.primary())
}

fn one_pair(shape: &Shape) -> Option<Rank> {
    (shape.groups.count(0) == 2).then(|| shape.groups.primary())
}

fn classify(cards: &[Card; HAND_SIZE]) -> (Combination, Rank) {
    let shape = Shape {
        cards,
        groups: RankGroups::of(cards),
    };

    PREDICATES
        .iter()
        .find_map(|(combination, predicate)| predicate(&shape).map(|rank| (*combination, rank)))
        .unwrap_or((Combination::HighCard, shape.high()))
}

/// Five cards sorted by rank (highest first) together with the combination
/// they form. Classification happens once, in [`Hand::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    combination: Combination,
    tie_break: Rank,
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let mut cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongCount(cards.len()))?;

        // Stable, so equal ranks keep their input order.
        cards.sort_by(|a, b| b.cmp_rank(a));
        let (combination, tie_break) = classify(&cards);

        Ok(Self {
            cards,
            combination,
            tie_break,
        })
    }

    /// Decodes every token and builds a hand from the result.
    pub fn from_tokens<'a, I>(tokens: I) -> Result<Self, PokerError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cards = tokens
            .into_iter()
            .map(Card::decode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(&cards)?)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.cards.iter().map(|card| card.rank)
    }

    pub fn combination(&self) -> Combination {
        self.combination
    }

    pub fn tie_break(&self) -> Rank {
        self.tie_break
    }

    /// Rank of the most frequent group, e.g. the triple of a full house.
    pub fn primary_rank(&self) -> Rank {
        RankGroups::of(&self.cards).primary()
    }
}

impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(s.split_whitespace())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand<")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, ">")
    }
}
