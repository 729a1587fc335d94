//! Scene registry and state machine
//!
//! The machine owns the session data for its whole lifetime. On a change
//! request the outgoing scene is dropped before the incoming one is built, so
//! the session is never lent to two scenes at once.

use std::collections::HashMap;

use super::{
    BreakoutGameScene, DigGameScene, RankingScene, Scene, SceneContext, SceneId, SceneRequest, SceneView,
    TitleScene,
};
use crate::audio::AudioSink;
use crate::error::SceneError;
use crate::platform::FrameInput;
use crate::session::SessionData;
use crate::settings::Settings;

/// Builds a scene, running its enter hook
pub type SceneFactory = fn(&mut SceneContext<'_>) -> Scene;

/// Whether the host should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Scene id to factory mapping
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    factories: HashMap<SceneId, SceneFactory>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with all four scenes
    pub fn standard() -> Self {
        Self::new()
            .with(SceneId::Title, |ctx| Scene::Title(TitleScene::enter(ctx)))
            .with(SceneId::DigGame, |ctx| Scene::DigGame(DigGameScene::enter(ctx)))
            .with(SceneId::BreakoutGame, |ctx| Scene::BreakoutGame(BreakoutGameScene::enter(ctx)))
            .with(SceneId::Ranking, |ctx| Scene::Ranking(RankingScene::enter(ctx)))
    }

    /// Register a factory, replacing any previous one for `id`
    pub fn register(&mut self, id: SceneId, factory: SceneFactory) {
        if self.factories.insert(id, factory).is_some() {
            log::warn!("Scene {:?} was already registered and has been replaced", id);
        }
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, id: SceneId, factory: SceneFactory) -> Self {
        self.register(id, factory);
        self
    }

    pub fn contains(&self, id: SceneId) -> bool {
        self.factories.contains_key(&id)
    }

    fn resolve(&self, id: SceneId) -> Result<SceneFactory, SceneError> {
        self.factories.get(&id).copied().ok_or(SceneError::Unregistered { scene: id })
    }
}

/// Drives the active scene once per tick and performs transitions
pub struct SceneMachine<A: AudioSink> {
    registry: SceneRegistry,
    settings: Settings,
    session: SessionData,
    audio: A,
    active: Option<Scene>,
}

impl<A: AudioSink> SceneMachine<A> {
    /// Build a machine. Fails if `settings` do not validate or if a
    /// registered scene can request a transition to an unregistered one.
    pub fn new(registry: SceneRegistry, settings: Settings, audio: A) -> Result<Self, SceneError> {
        settings.validate()?;
        for &id in registry.factories.keys() {
            for target in id.targets(&settings) {
                registry.resolve(target)?;
            }
        }

        let session = SessionData::new(settings.ranking.count);
        Ok(Self {
            registry,
            settings,
            session,
            audio,
            active: None,
        })
    }

    /// Enter the start scene (replacing any active one)
    pub fn init(&mut self, start: SceneId) -> Result<(), SceneError> {
        let factory = self.registry.resolve(start)?;
        self.active = None;
        let mut ctx = SceneContext {
            session: &mut self.session,
            settings: &self.settings,
            audio: &mut self.audio,
        };
        self.active = Some(factory(&mut ctx));
        log::info!("Scene machine started in {:?}", start);
        Ok(())
    }

    /// Update the active scene and apply any transition it requests
    pub fn tick(&mut self, input: &FrameInput) -> Result<Flow, SceneError> {
        let scene = self.active.as_mut().ok_or(SceneError::NotStarted)?;
        let mut ctx = SceneContext {
            session: &mut self.session,
            settings: &self.settings,
            audio: &mut self.audio,
        };

        match scene.update(&mut ctx, input) {
            SceneRequest::Stay => Ok(Flow::Continue),
            SceneRequest::Exit => {
                log::info!("Exit requested from {:?} at tick {}", scene.id(), input.tick_count);
                Ok(Flow::Exit)
            }
            SceneRequest::Change(target) => {
                let factory = self.registry.resolve(target)?;
                let from = scene.id();
                self.active = None;
                let next = factory(&mut ctx);
                log::info!("Scene {:?} -> {:?} at tick {}", from, next.id(), input.tick_count);
                self.active = Some(next);
                Ok(Flow::Continue)
            }
        }
    }

    pub fn active_id(&self) -> Option<SceneId> {
        self.active.as_ref().map(Scene::id)
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.active.as_ref()
    }

    /// Snapshot of the active scene for drawing
    pub fn view(&self) -> Option<SceneView<'_>> {
        self.active.as_ref().map(|scene| scene.view(&self.session))
    }

    pub fn session(&self) -> &SessionData {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}
