use thiserror::Error;

use crate::board::LotteryBoard;

/// Every failure the engine can hand back. Exactly one of these crosses the
/// boundary per failed operation; nothing else escapes.
#[derive(Error, Debug)]
pub enum LottoError {
    /// Malformed caller input, caught before any network traffic.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The requested lottery is not in the board's current catalog.
    #[error("unknown {board} lottery '{name}'")]
    InvalidLottery { board: LotteryBoard, name: String },

    /// Well-formed locator, but no draw answers to it.
    #[error("no matching result: {0}")]
    NotFound(String),

    /// Transport failure after retries, or an HTTP failure status.
    #[error("request failed: {0}")]
    Network(String),

    /// The page came back but didn't match the board's known layout. Stale
    /// selectors, not a caller problem.
    #[error("unrecognized page layout: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, LottoError>;
