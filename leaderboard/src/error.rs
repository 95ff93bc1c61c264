use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("contract address must start with 0x: {0:?}")]
    MissingPrefix(String),

    #[error("contract address must be 40 hex digits after 0x: {0:?}")]
    InvalidAddress(String),

    #[error("contract address has a bad checksum: {0:?}")]
    BadChecksum(String),

    #[error("contract address not configured")]
    NotConfigured,

    #[error("malformed score list: {0}")]
    MalformedScores(#[from] serde_json::Error),

    #[error("score #{index} is not a non-negative integer: {value:?}")]
    InvalidScore { index: usize, value: String },

    #[error("no score to submit in state {0}")]
    NothingToSubmit(&'static str),
}
