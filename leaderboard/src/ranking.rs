use crate::LeaderboardError;
use serde::{Deserialize, Serialize};

/// How many scores the leaderboard shows
pub const TOP_SCORES_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedScore {
    /// 1-based position
    pub rank: u32,
    pub score: u64,
}

/// Scores as the contract returns them: uint256 values arrive either as
/// JSON numbers or as decimal strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(u64),
    Text(String),
}

impl RawScore {
    fn into_u64(self, index: usize) -> Result<u64, LeaderboardError> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(text) => text
                .trim()
                .parse::<u64>()
                .map_err(|_| LeaderboardError::InvalidScore { index, value: text }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<RankedScore>,
}

impl Leaderboard {
    /// Rank scores highest first, keeping at most `limit`
    pub fn from_scores(scores: impl IntoIterator<Item = u64>, limit: usize) -> Self {
        let mut scores: Vec<u64> = scores.into_iter().collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(limit);

        let entries = scores
            .into_iter()
            .zip(1..)
            .map(|(score, rank)| RankedScore { rank, score })
            .collect();
        Self { entries }
    }

    pub fn from_json(json: &str, limit: usize) -> Result<Self, LeaderboardError> {
        let raw: Vec<RawScore> = serde_json::from_str(json)?;
        let scores = raw
            .into_iter()
            .enumerate()
            .map(|(index, score)| score.into_u64(index))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("leaderboard: {} scores fetched", scores.len());
        Ok(Self::from_scores(scores, limit))
    }

    pub fn entries(&self) -> &[RankedScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank a new score would take, `None` if it falls off the board
    pub fn rank_for(&self, score: u64, limit: usize) -> Option<u32> {
        let position = self.entries.iter().take_while(|e| e.score >= score).count();
        (position < limit).then_some(position as u32 + 1)
    }

    pub fn to_json(&self) -> Result<String, LeaderboardError> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

/// The connected player's own best score ("your best score" panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub score: u64,
    /// Unix seconds of the submission
    pub timestamp: u64,
}

impl PlayerScore {
    /// Parse the contract's `[score, timestamp, exists]` tuple
    ///
    /// `None` when the player has never submitted.
    pub fn from_json(json: &str) -> Result<Option<Self>, LeaderboardError> {
        let (score, timestamp, exists): (RawScore, RawScore, bool) = serde_json::from_str(json)?;
        if !exists {
            return Ok(None);
        }
        Ok(Some(Self {
            score: score.into_u64(0)?,
            timestamp: timestamp.into_u64(1)?,
        }))
    }
}
