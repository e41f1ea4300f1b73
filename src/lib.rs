// Library crate for the poker hand evaluator
// This file exposes the public API for the scanner binary and integration tests

pub mod batch;
pub mod cards;
pub mod config;

// Re-export commonly used types for easier access in tests
pub use batch::{scan_file, scan_lines, BatchError, ErrorPolicy, RecordError, Tally};
pub use cards::{
    compare, first_player_wins, greater_than, parse_line, Card, Combination, Hand, HandError,
    ParseError, PokerError, Rank, Suit, UnresolvedTie,
};
pub use config::{ConfigError, ReportFormat, ScanConfig};
