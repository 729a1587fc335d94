//! Scenes and the machine that switches between them
//!
//! Exactly one scene is active at a time. A scene is built by its `enter`
//! constructor, updated once per tick, and dropped when it requests a change.
//! Scenes only see the shared session data through the [`SceneContext`] the
//! machine lends them for the duration of a call.

pub mod breakout_game;
pub mod dig_game;
pub mod machine;
pub mod ranking;
pub mod title;

use serde::{Deserialize, Serialize};

use crate::audio::AudioSink;
use crate::platform::FrameInput;
use crate::session::SessionData;
use crate::settings::Settings;

pub use breakout_game::BreakoutGameScene;
pub use dig_game::{DigGameScene, DigView};
pub use machine::{Flow, SceneFactory, SceneMachine, SceneRegistry};
pub use ranking::{RankingScene, RankingView};
pub use title::{TitleButton, TitleScene, TitleView};

/// Scene identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    Title,
    DigGame,
    BreakoutGame,
    Ranking,
}

impl SceneId {
    pub fn is_game(self) -> bool {
        matches!(self, SceneId::DigGame | SceneId::BreakoutGame)
    }

    /// Every scene this one may ask to switch to
    pub fn targets(self, settings: &Settings) -> Vec<SceneId> {
        match self {
            SceneId::Title => vec![settings.title.play_target, SceneId::Ranking],
            SceneId::DigGame | SceneId::BreakoutGame => vec![SceneId::Ranking],
            SceneId::Ranking => vec![SceneId::Title],
        }
    }
}

/// What a scene wants after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    Stay,
    Change(SceneId),
    /// Quit the application
    Exit,
}

/// Everything a scene may touch during `enter` or `update`
pub struct SceneContext<'a> {
    pub session: &'a mut SessionData,
    pub settings: &'a Settings,
    pub audio: &'a mut dyn AudioSink,
}

/// The active scene
#[derive(Debug)]
pub enum Scene {
    Title(TitleScene),
    DigGame(DigGameScene),
    BreakoutGame(BreakoutGameScene),
    Ranking(RankingScene),
}

impl Scene {
    pub fn id(&self) -> SceneId {
        match self {
            Scene::Title(_) => SceneId::Title,
            Scene::DigGame(_) => SceneId::DigGame,
            Scene::BreakoutGame(_) => SceneId::BreakoutGame,
            Scene::Ranking(_) => SceneId::Ranking,
        }
    }

    pub fn update(&mut self, ctx: &mut SceneContext<'_>, input: &FrameInput) -> SceneRequest {
        match self {
            Scene::Title(scene) => scene.update(ctx, input),
            Scene::DigGame(scene) => scene.update(ctx, input),
            Scene::BreakoutGame(scene) => scene.update(ctx, input),
            Scene::Ranking(scene) => scene.update(input),
        }
    }

    /// Read-only snapshot for the drawing layer
    pub fn view<'a>(&'a self, session: &'a SessionData) -> SceneView<'a> {
        match self {
            Scene::Title(scene) => SceneView::Title(scene.view()),
            Scene::DigGame(scene) => SceneView::DigGame(scene.view()),
            Scene::BreakoutGame(scene) => SceneView::BreakoutGame(scene.sim()),
            Scene::Ranking(scene) => SceneView::Ranking(scene.view(session)),
        }
    }
}

/// Read-only snapshot of the active scene
#[derive(Debug)]
pub enum SceneView<'a> {
    Title(TitleView),
    DigGame(DigView<'a>),
    BreakoutGame(&'a crate::sim::BreakoutSimulation),
    Ranking(RankingView<'a>),
}
