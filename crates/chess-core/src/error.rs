//! Errors raised while bridging rules-engine data into move records.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessCoreError {
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Illegal position: {0}")]
    IllegalPosition(String),
}
