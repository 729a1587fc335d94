//! Data shared between scenes
//!
//! Created once per session and owned by the scene machine, which lends it to
//! exactly one active scene at a time.

use serde::{Deserialize, Serialize};

use crate::highscores::HighScores;
use crate::sim::DigGrid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Score of the game that just ended, waiting for the ranking screen
    pub last_game_score: Option<u64>,
    pub high_scores: HighScores,
    /// Sand from the latest dig game (empty until one finishes)
    pub dig_grid: DigGrid,
}

impl SessionData {
    pub fn new(ranking_count: usize) -> Self {
        Self {
            last_game_score: None,
            high_scores: HighScores::new(ranking_count),
            dig_grid: DigGrid::default(),
        }
    }

    /// Drop a score nobody ranked before a new game starts
    pub fn discard_stale_score(&mut self) {
        if let Some(score) = self.last_game_score.take() {
            log::warn!("Discarding unranked score {} from a previous game", score);
        }
    }
}
