//! Browser client for the dino runner
//!
//! Paints `game_core` frames on a 2D canvas, drives the engine from
//! requestAnimationFrame and keeps track of leaderboard submissions.
//! Everything touching the DOM only exists when compiling for wasm32.

mod input;
mod schedule;
mod scores;

#[cfg(target_arch = "wasm32")]
mod game;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod painter;

#[cfg(target_arch = "wasm32")]
pub use game::DinoGame;
#[cfg(target_arch = "wasm32")]
pub use logging::init_logging;
#[cfg(target_arch = "wasm32")]
pub use scores::{contract_address, player_score, rank_for_score, rank_scores};
pub use scores::ScoreSubmission;
