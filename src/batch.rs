use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::cards::{compare, parse_line, Combination, PokerError};

/// What to do with a record that cannot be parsed or decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    #[default]
    Abort,
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip" => Ok(ErrorPolicy::Skip),
            _ => Err(()),
        }
    }
}

/// Why a single record could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Record is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
    #[error(transparent)]
    Poker(#[from] PokerError),
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to read hand records: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: {source}")]
    Line { line: usize, source: RecordError },
}

/// Running totals over a corpus of hand records.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    /// Non-blank records seen, including failed ones.
    pub records: usize,
    pub first_player_wins: usize,
    pub second_player_wins: usize,
    pub unresolved_ties: usize,
    pub skipped: usize,
    /// Combination of the winning hand, for every decided record.
    pub winning_combinations: BTreeMap<Combination, usize>,
}

impl Tally {
    fn record_win(&mut self, first_wins: bool, combination: Combination) {
        if first_wins {
            self.first_player_wins += 1;
        } else {
            self.second_player_wins += 1;
        }
        *self.winning_combinations.entry(combination).or_insert(0) += 1;
    }

    pub fn decided(&self) -> usize {
        self.first_player_wins + self.second_player_wins
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "First player won {} times", self.first_player_wins)
    }
}

/// Decides one record: whether player one wins and the winning combination.
fn score_record(line: &str) -> Result<(bool, Combination), RecordError> {
    let (first, second) = parse_line(line)?;
    let ordering = compare(&first, &second).map_err(PokerError::from)?;
    Ok(match ordering {
        Ordering::Greater => (true, first.combination()),
        _ => (false, second.combination()),
    })
}

/// Scores every record read from `reader`. Blank lines are ignored.
#[instrument(skip(reader))]
pub fn scan_lines<R: BufRead>(reader: R, policy: ErrorPolicy) -> Result<Tally, BatchError> {
    let mut tally = Tally::default();

    // Split on raw bytes so a badly encoded record fails on its own line
    // instead of ending the scan.
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_number = index + 1;

        let record = match String::from_utf8(bytes) {
            Ok(line) if line.trim().is_empty() => {
                debug!(line = line_number, "Skipping blank line");
                continue;
            }
            Ok(line) => Ok(line),
            Err(e) => Err(RecordError::from(e)),
        };
        tally.records += 1;

        match record.and_then(|line| score_record(&line)) {
            Ok((first_wins, combination)) => {
                debug!(
                    line = line_number,
                    first_wins,
                    combination = %combination,
                    "Scored hand record"
                );
                tally.record_win(first_wins, combination);
            }
            Err(source) if policy == ErrorPolicy::Skip => {
                warn!(line = line_number, error = %source, "Skipping hand record");
                match source {
                    RecordError::Poker(PokerError::Tie(_)) => tally.unresolved_ties += 1,
                    _ => tally.skipped += 1,
                }
            }
            Err(source) => {
                return Err(BatchError::Line {
                    line: line_number,
                    source,
                })
            }
        }
    }

    info!(
        records = tally.records,
        first_player_wins = tally.first_player_wins,
        second_player_wins = tally.second_player_wins,
        unresolved_ties = tally.unresolved_ties,
        skipped = tally.skipped,
        "Finished scanning hand records"
    );
    Ok(tally)
}

pub fn scan_file(path: &Path, policy: ErrorPolicy) -> Result<Tally, BatchError> {
    info!(path = %path.display(), "Opening hand records");
    let file = File::open(path)?;
    scan_lines(BufReader::new(file), policy)
}
