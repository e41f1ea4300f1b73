use super::errors::PokerError;
use super::hands::{Hand, HAND_SIZE};

/// Splits a record of ten card tokens into the first and second player's
/// hands. The first five tokens go to player one, everything after to player
/// two, so a short or long line fails on hand size rather than being padded
/// or truncated.
pub fn parse_line(line: &str) -> Result<(Hand, Hand), PokerError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let split = tokens.len().min(HAND_SIZE);
    let (first, second) = tokens.split_at(split);

    let first = Hand::from_tokens(first.iter().copied())?;
    let second = Hand::from_tokens(second.iter().copied())?;
    Ok((first, second))
}

/// Parses a record and reports whether player one's hand wins.
pub fn first_player_wins(line: &str) -> Result<bool, PokerError> {
    let (first, second) = parse_line(line)?;
    Ok(first.beats(&second)?)
}
