pub mod basic;
pub mod compare;
pub mod errors;
pub mod hands;
pub mod line;


pub use basic::{Card, Rank, Suit};
pub use compare::{compare, greater_than};
pub use errors::{HandError, ParseError, PokerError, UnresolvedTie};
pub use hands::{Combination, Hand, HAND_SIZE};
pub use line::{first_player_wins, parse_line};
