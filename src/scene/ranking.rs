//! Ranking screen
//!
//! Folds the last game's score into the leaderboard once, on entry, and
//! highlights where it landed. Any press returns to the title.

use super::{SceneContext, SceneId, SceneRequest};
use crate::highscores::aggregate_last_score;
use crate::platform::FrameInput;
use crate::session::SessionData;

/// Snapshot for drawing the ranking screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingView<'a> {
    /// Scores, best first
    pub scores: &'a [u64],
    /// Zero-based index to highlight
    pub highlight: Option<usize>,
}

#[derive(Debug)]
pub struct RankingScene {
    rank: Option<usize>,
}

impl RankingScene {
    pub fn enter(ctx: &mut SceneContext<'_>) -> Self {
        Self {
            rank: aggregate_last_score(ctx.session),
        }
    }

    pub fn update(&mut self, input: &FrameInput) -> SceneRequest {
        if input.primary_pressed {
            SceneRequest::Change(SceneId::Title)
        } else {
            SceneRequest::Stay
        }
    }

    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    pub fn view<'a>(&self, session: &'a SessionData) -> RankingView<'a> {
        RankingView {
            scores: session.high_scores.entries(),
            highlight: self.rank,
        }
    }
}
