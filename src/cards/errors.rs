use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown rank '{0}'")]
    UnknownRank(char),
    #[error("Unknown suit '{0}'")]
    UnknownSuit(char),
    #[error("Malformed card token '{0}', expected a rank and a suit character")]
    MalformedToken(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("A hand needs exactly 5 cards, got {0}")]
    WrongCount(usize),
}

/// Both hands share combination, tie-break and every rank of the cascade.
/// A fair deck cannot produce this; duplicated cards can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot decide between {first} and {second}: every rank ties")]
pub struct UnresolvedTie {
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokerError {
    #[error("Card parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Hand construction error: {0}")]
    Hand(#[from] HandError),
    #[error(transparent)]
    Tie(#[from] UnresolvedTie),
}
