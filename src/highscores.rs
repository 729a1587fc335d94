//! High score leaderboard
//!
//! Kept in memory for the session only. The list always has exactly its
//! configured length, sorted best first, padded with zeros at start.

use serde::{Deserialize, Serialize};

use crate::session::SessionData;

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    entries: Vec<u64>,
}

impl HighScores {
    /// Leaderboard of `count` zero entries
    pub fn new(count: usize) -> Self {
        Self {
            entries: vec![0; count],
        }
    }

    /// Scores, best first
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().copied()
    }

    /// Insert a score, keeping the best `len()` entries.
    ///
    /// Returns the zero-based rank of the score if it is still on the board.
    /// Ties rank at the first (best) index holding an equal value.
    pub fn insert(&mut self, score: u64) -> Option<usize> {
        let count = self.entries.len();
        self.entries.push(score);
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.truncate(count);
        self.entries.iter().position(|&e| e == score)
    }
}

/// Consume the last game's score into the leaderboard.
///
/// Runs once per ranking screen entry. With no pending score nothing changes
/// and there is no rank to highlight.
pub fn aggregate_last_score(session: &mut SessionData) -> Option<usize> {
    let score = session.last_game_score.take()?;
    let rank = session.high_scores.insert(score);
    match rank {
        Some(rank) => log::info!("Score {} ranked #{}", score, rank + 1),
        None => log::info!("Score {} did not rank", score),
    }
    rank
}
