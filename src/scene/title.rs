//! Title screen: PLAY, RANKING and EXIT buttons plus the music volume

use glam::Vec2;

use super::{SceneContext, SceneId, SceneRequest};
use crate::audio::Track;
use crate::platform::FrameInput;
use crate::sim::Rect;

/// Title screen buttons, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleButton {
    Play,
    Ranking,
    Exit,
}

impl TitleButton {
    pub const ALL: [TitleButton; 3] = [TitleButton::Play, TitleButton::Ranking, TitleButton::Exit];

    pub fn label(self) -> &'static str {
        match self {
            TitleButton::Play => "PLAY",
            TitleButton::Ranking => "RANKING",
            TitleButton::Exit => "EXIT",
        }
    }
}

/// Snapshot for drawing the title screen
#[derive(Debug, Clone, PartialEq)]
pub struct TitleView {
    pub buttons: [(TitleButton, Rect); 3],
    pub hovered: Option<TitleButton>,
    pub volume: f32,
}

#[derive(Debug)]
pub struct TitleScene {
    buttons: [(TitleButton, Rect); 3],
    play_target: SceneId,
    volume: f32,
    hovered: Option<TitleButton>,
}

impl TitleScene {
    pub fn enter(ctx: &mut SceneContext<'_>) -> Self {
        let title = &ctx.settings.title;
        let center = ctx.settings.screen.center();
        let buttons = TitleButton::ALL.map(|button| {
            let row = button as usize as f32;
            let rect = Rect::from_center(center + Vec2::new(0.0, row * title.button_spacing), title.button_size);
            (button, rect)
        });

        let volume = title.bgm_volume.clamp(0.0, 1.0);
        ctx.audio.set_track_volume(Track::Title, volume);
        ctx.audio.play_track(Track::Title);

        Self {
            buttons,
            play_target: title.play_target,
            volume,
            hovered: None,
        }
    }

    pub fn update(&mut self, ctx: &mut SceneContext<'_>, input: &FrameInput) -> SceneRequest {
        ctx.audio.play_track(Track::Title);
        if let Some(volume) = input.volume {
            self.volume = volume.clamp(0.0, 1.0);
            ctx.audio.set_track_volume(Track::Title, self.volume);
        }

        self.hovered = self
            .buttons
            .iter()
            .find(|(_, rect)| input.hovering(rect))
            .map(|&(button, _)| button);

        let clicked = self
            .buttons
            .iter()
            .find(|(_, rect)| input.clicked(rect))
            .map(|&(button, _)| button);
        match clicked {
            Some(TitleButton::Play) => SceneRequest::Change(self.play_target),
            Some(TitleButton::Ranking) => SceneRequest::Change(SceneId::Ranking),
            Some(TitleButton::Exit) => SceneRequest::Exit,
            None => SceneRequest::Stay,
        }
    }

    /// Centre of a button, for hosts that drive the title programmatically
    pub fn button_center(&self, button: TitleButton) -> Vec2 {
        self.buttons[button as usize].1.center()
    }

    pub fn view(&self) -> TitleView {
        TitleView {
            buttons: self.buttons,
            hovered: self.hovered,
            volume: self.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::test_support::RecordingAudio;
    use crate::session::SessionData;
    use crate::settings::Settings;

    fn enter(settings: &Settings, session: &mut SessionData, audio: &mut RecordingAudio) -> TitleScene {
        let mut ctx = SceneContext {
            session,
            settings,
            audio,
        };
        TitleScene::enter(&mut ctx)
    }

    fn update(scene: &mut TitleScene, settings: &Settings, input: &FrameInput) -> (SceneRequest, RecordingAudio) {
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let mut ctx = SceneContext {
            session: &mut session,
            settings,
            audio: &mut audio,
        };
        let request = scene.update(&mut ctx, input);
        (request, audio)
    }

    #[test]
    fn test_layout_and_music() {
        let settings = Settings::default();
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let scene = enter(&settings, &mut session, &mut audio);

        assert_eq!(scene.button_center(TitleButton::Play), Vec2::new(400.0, 300.0));
        assert_eq!(scene.button_center(TitleButton::Ranking), Vec2::new(400.0, 400.0));
        assert_eq!(scene.button_center(TitleButton::Exit), Vec2::new(400.0, 500.0));
        assert_eq!(audio.tracks_played, vec![Track::Title]);
        assert_eq!(audio.volumes, vec![(Track::Title, 0.2)]);
    }

    #[test]
    fn test_buttons() {
        let settings = Settings::default();
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let mut scene = enter(&settings, &mut session, &mut audio);

        let click = |b| FrameInput::at(scene.button_center(b), 0.016).pressed();
        let (play, ranking, exit) = (click(TitleButton::Play), click(TitleButton::Ranking), click(TitleButton::Exit));

        assert_eq!(update(&mut scene, &settings, &play).0, SceneRequest::Change(SceneId::DigGame));
        assert_eq!(update(&mut scene, &settings, &ranking).0, SceneRequest::Change(SceneId::Ranking));
        assert_eq!(update(&mut scene, &settings, &exit).0, SceneRequest::Exit);
    }

    #[test]
    fn test_hover_without_click() {
        let settings = Settings::default();
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let mut scene = enter(&settings, &mut session, &mut audio);

        let input = FrameInput::at(scene.button_center(TitleButton::Exit), 0.016);
        let (request, audio) = update(&mut scene, &settings, &input);
        assert_eq!(request, SceneRequest::Stay);
        assert_eq!(scene.view().hovered, Some(TitleButton::Exit));
        assert_eq!(audio.tracks_played, vec![Track::Title]);
    }

    #[test]
    fn test_click_on_background() {
        let settings = Settings::default();
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let mut scene = enter(&settings, &mut session, &mut audio);

        let input = FrameInput::at(Vec2::new(5.0, 5.0), 0.016).pressed();
        assert_eq!(update(&mut scene, &settings, &input).0, SceneRequest::Stay);
        assert_eq!(scene.view().hovered, None);
    }

    #[test]
    fn test_alternate_play_target() {
        let mut settings = Settings::default();
        settings.title.play_target = SceneId::BreakoutGame;
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let mut scene = enter(&settings, &mut session, &mut audio);

        let input = FrameInput::at(scene.button_center(TitleButton::Play), 0.016).pressed();
        assert_eq!(update(&mut scene, &settings, &input).0, SceneRequest::Change(SceneId::BreakoutGame));
    }

    #[test]
    fn test_volume_is_clamped() {
        let settings = Settings::default();
        let mut session = SessionData::new(5);
        let mut audio = RecordingAudio::default();
        let mut scene = enter(&settings, &mut session, &mut audio);

        let mut input = FrameInput::at(Vec2::ZERO, 0.016);
        input.volume = Some(1.5);
        let (_, audio) = update(&mut scene, &settings, &input);
        assert_eq!(audio.volumes, vec![(Track::Title, 1.0)]);
        assert_eq!(scene.view().volume, 1.0);
    }
}
