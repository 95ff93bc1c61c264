//! Leaderboard glue for the page
//!
//! The page performs the contract calls; this side only tracks where a
//! submission stands and parses what comes back.

use leaderboard::Submission;

#[cfg(target_arch = "wasm32")]
use leaderboard::{ContractAddress, Leaderboard, PlayerScore, TOP_SCORES_LIMIT};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Final-score submission exposed to JavaScript
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct ScoreSubmission {
    inner: Submission,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl ScoreSubmission {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self {
            inner: Submission::new(),
        }
    }

    /// "Idle", "Ready", "Pending", "Confirmed" or "Failed"
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn state(&self) -> String {
        self.inner.state().as_str().to_string()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score(&self) -> Option<u32> {
        self.inner.score().and_then(|s| u32::try_from(s).ok())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn attempts(&self) -> u32 {
        self.inner.attempts()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn last_error(&self) -> Option<String> {
        self.inner.last_error().map(str::to_string)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn tx_hash(&self) -> Option<String> {
        self.inner.tx_hash().map(str::to_string)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn busy(&self) -> bool {
        self.inner.is_pending()
    }

    pub fn record_score(&mut self, score: u32) -> bool {
        self.inner.record_score(score as u64).success
    }

    /// Score to send now, or `undefined` if nothing can be sent
    pub fn begin(&mut self) -> Option<u32> {
        match self.inner.begin() {
            Ok(score) => u32::try_from(score).ok(),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }

    pub fn confirm(&mut self, tx_hash: String) -> bool {
        self.inner.confirm(tx_hash).success
    }

    pub fn fail(&mut self, reason: String) -> bool {
        self.inner.fail(reason).success
    }

    pub fn reset(&mut self) -> bool {
        self.inner.reset().success
    }

    /// A failed submission can be retried with `begin`
    pub fn can_retry(&self) -> bool {
        self.inner.is_retryable()
    }
}

impl Default for ScoreSubmission {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank the contract's score list; returns `[{rank, score}, ...]` as JSON
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn rank_scores(scores_json: &str) -> Result<String, JsValue> {
    Leaderboard::from_json(scores_json, TOP_SCORES_LIMIT)
        .and_then(|board| board.to_json())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rank a new score would take on the board, `undefined` if it misses the top
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn rank_for_score(scores_json: &str, score: u32) -> Result<Option<u32>, JsValue> {
    Leaderboard::from_json(scores_json, TOP_SCORES_LIMIT)
        .map(|board| board.rank_for(score as u64, TOP_SCORES_LIMIT))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The player's best as `{score, timestamp}` JSON, `undefined` if none yet
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn player_score(result_json: &str) -> Result<Option<String>, JsValue> {
    let player = PlayerScore::from_json(result_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    player
        .map(|p| serde_json::to_string(&p))
        .transpose()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validated contract address, falling back when the configured one is unusable
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn contract_address(configured: Option<String>, fallback: &str) -> Result<String, JsValue> {
    ContractAddress::resolve(configured.as_deref(), fallback)
        .map(|address| address.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
