//! Host-side bookkeeping for the on-chain high-score table
//!
//! The contract call itself is made by the page; this crate tracks the
//! submission, validates the contract address and ranks fetched scores.

pub mod address;
pub mod error;
pub mod ranking;
pub mod submission;

pub use address::ContractAddress;
pub use error::LeaderboardError;
pub use ranking::{Leaderboard, PlayerScore, RankedScore, TOP_SCORES_LIMIT};
pub use submission::{Submission, SubmissionAction, SubmissionState, TransitionResult};
