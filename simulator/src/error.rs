//! Error type shared by the simulator.

use thiserror::Error;

/// Errors raised while building tables, evaluating tickets or reporting.
#[derive(Debug, Error)]
pub enum LotteryError {
    /// A (white matches, red match) pair has no prize table entry.
    #[error("Invalid combination of ticket and winning numbers: {white_matches} whites, red match {red_match}")]
    InvalidCombination { white_matches: u8, red_match: bool },

    /// The prize table has a duplicate, out-of-range or missing entry.
    #[error("Invalid prize table: {0}")]
    InvalidPrizeTable(String),

    /// An explicitly built outcome breaks the pool rules.
    #[error("Invalid outcome: {0}")]
    InvalidOutcome(String),

    /// The simulation configuration cannot be run.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The tally could not be rendered as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
