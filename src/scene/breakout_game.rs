//! Breakout scene

use glam::Vec2;

use super::{SceneContext, SceneId, SceneRequest};
use crate::audio::SoundEffect;
use crate::platform::FrameInput;
use crate::sim::BreakoutSimulation;

#[derive(Debug)]
pub struct BreakoutGameScene {
    sim: BreakoutSimulation,
    hit_volume: f32,
}

impl BreakoutGameScene {
    pub fn enter(ctx: &mut SceneContext<'_>) -> Self {
        ctx.session.discard_stale_score();

        let screen = &ctx.settings.screen;
        let sim = BreakoutSimulation::new(&ctx.settings.breakout, Vec2::new(screen.width, screen.height));
        log::info!("Breakout: {} bricks", sim.bricks.len());

        Self {
            sim,
            hit_volume: ctx.settings.breakout.hit_volume,
        }
    }

    pub fn update(&mut self, ctx: &mut SceneContext<'_>, input: &FrameInput) -> SceneRequest {
        let events = self.sim.tick(input.pointer.x, input.delta_seconds);

        if events.brick_destroyed.is_some() {
            ctx.audio.play_effect(SoundEffect::BrickHit, self.hit_volume);
        }

        match events.game_over {
            Some(score) => {
                log::info!("Breakout over with {} points", score);
                ctx.session.last_game_score = Some(score);
                SceneRequest::Change(SceneId::Ranking)
            }
            None => SceneRequest::Stay,
        }
    }

    pub fn sim(&self) -> &BreakoutSimulation {
        &self.sim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::test_support::RecordingAudio;
    use crate::session::SessionData;
    use crate::settings::Settings;
    use crate::sim::Rect;

    #[test]
    fn test_brick_hit_plays_sound_and_game_over_records_score() {
        let settings = Settings::default();
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let mut ctx = SceneContext {
            session: &mut session,
            settings: &settings,
            audio: &mut audio,
        };

        let mut scene = BreakoutGameScene::enter(&mut ctx);
        assert_eq!(scene.sim().bricks.len(), 100);

        // Leave a single brick right above the ball
        let brick = Rect::new(Vec2::new(380.0, 380.0), Vec2::new(40.0, 10.0));
        scene.sim.bricks = vec![brick];

        let request = scene.update(&mut ctx, &FrameInput::at(Vec2::new(400.0, 300.0), 1.0 / 60.0));
        assert_eq!(request, SceneRequest::Change(SceneId::Ranking));
        assert_eq!(ctx.session.last_game_score, Some(1));
        drop(ctx);
        assert_eq!(audio.effects, vec![(SoundEffect::BrickHit, 0.5)]);
    }

    #[test]
    fn test_enter_discards_stale_score() {
        let settings = Settings::default();
        let mut session = SessionData::new(5);
        session.last_game_score = Some(77);
        let mut audio = RecordingAudio::default();
        let mut ctx = SceneContext {
            session: &mut session,
            settings: &settings,
            audio: &mut audio,
        };

        BreakoutGameScene::enter(&mut ctx);
        assert_eq!(session.last_game_score, None);
        assert_eq!(session.high_scores.entries(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_ball_keeps_flying() {
        let settings = Settings::default();
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let mut ctx = SceneContext {
            session: &mut session,
            settings: &settings,
            audio: &mut audio,
        };

        let mut scene = BreakoutGameScene::enter(&mut ctx);
        let request = scene.update(&mut ctx, &FrameInput::at(Vec2::new(400.0, 300.0), 1.0 / 60.0));
        assert_eq!(request, SceneRequest::Stay);
        assert!(scene.sim().ball.pos.y < 400.0);
        assert_eq!(ctx.session.last_game_score, None);
    }
}
