//! Sand digging scene
//!
//! Maps pointer presses onto inventory slots and grid cells, feeds them to
//! the [`DigSimulation`], and hands the score and the dug grid back to the
//! session when the turns run out.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{SceneContext, SceneId, SceneRequest};
use crate::platform::FrameInput;
use crate::sim::{Armed, DigGrid, DigSimulation, Footprint, ItemSlot};

/// Snapshot for drawing the dig screen
#[derive(Debug, Clone)]
pub struct DigView<'a> {
    pub grid: &'a DigGrid,
    pub grid_offset: Vec2,
    pub cell_size: f32,
    pub inventory: &'a [ItemSlot],
    pub armed: Option<Armed>,
    /// Cells the armed scoop would dig at the hovered cell
    pub preview: Option<Footprint>,
    /// Armed scoop's description, else the hovered slot's
    pub description: Option<&'static str>,
    pub turns_remaining: u32,
    pub score: u64,
}

#[derive(Debug)]
pub struct DigGameScene {
    sim: DigSimulation,
    grid_offset: Vec2,
    cell_size: f32,
    hovered_cell: Option<(usize, usize)>,
    hovered_slot: Option<usize>,
}

impl DigGameScene {
    pub fn enter(ctx: &mut SceneContext<'_>) -> Self {
        ctx.session.discard_stale_score();

        let settings = &ctx.settings.dig;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Dig game: {}x{} grid, {} turns, seed {}",
            settings.width,
            settings.height,
            settings.turns,
            seed
        );

        let grid = std::mem::take(&mut ctx.session.dig_grid);
        Self {
            sim: DigSimulation::new(settings, grid, Pcg32::seed_from_u64(seed)),
            grid_offset: settings.grid_offset,
            cell_size: settings.cell_size,
            hovered_cell: None,
            hovered_slot: None,
        }
    }

    pub fn update(&mut self, ctx: &mut SceneContext<'_>, input: &FrameInput) -> SceneRequest {
        self.hovered_cell = self.cell_at(input.pointer);
        self.hovered_slot = self
            .sim
            .inventory()
            .iter()
            .find(|slot| input.hovering(&slot.region))
            .map(|slot| slot.index);

        if input.primary_pressed {
            // Slot presses win over grid presses in the same frame
            if let Some(slot) = self.hovered_slot {
                self.sim.select_slot(slot);
            } else if let Some((x, y)) = self.hovered_cell {
                self.sim.dig_at(x, y);
            }
        }

        if self.sim.is_finished() {
            let score = self.sim.score();
            log::info!("Sundown! Dig game over with {} points", score);
            ctx.session.last_game_score = Some(score);
            ctx.session.dig_grid = self.sim.take_grid();
            return SceneRequest::Change(SceneId::Ranking);
        }
        SceneRequest::Stay
    }

    /// Grid cell under a screen position
    pub fn cell_at(&self, pos: Vec2) -> Option<(usize, usize)> {
        let local = (pos - self.grid_offset) / self.cell_size;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let (x, y) = (local.x as usize, local.y as usize);
        let grid = self.sim.grid();
        (x < grid.width() && y < grid.height()).then_some((x, y))
    }

    /// Screen position of a cell's centre
    pub fn cell_center(&self, x: usize, y: usize) -> Vec2 {
        self.grid_offset + (Vec2::new(x as f32, y as f32) + 0.5) * self.cell_size
    }

    pub fn sim(&self) -> &DigSimulation {
        &self.sim
    }

    pub fn view(&self) -> DigView<'_> {
        let armed = self.sim.armed();
        let description = match armed {
            Some(armed) => Some(armed.tool.description()),
            None => self
                .hovered_slot
                .and_then(|i| self.sim.inventory().get(i))
                .map(|slot| slot.tool.description()),
        };

        DigView {
            grid: self.sim.grid(),
            grid_offset: self.grid_offset,
            cell_size: self.cell_size,
            inventory: self.sim.inventory(),
            armed,
            preview: self.hovered_cell.and_then(|(x, y)| self.sim.preview(x, y)),
            description,
            turns_remaining: self.sim.turns_remaining(),
            score: self.sim.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::test_support::RecordingAudio;
    use crate::session::SessionData;
    use crate::settings::Settings;
    use crate::sim::ToolKind;

    struct Harness {
        settings: Settings,
        session: SessionData,
        audio: RecordingAudio,
    }

    impl Harness {
        fn new(turns: u32) -> Self {
            let mut settings = Settings::default();
            settings.dig.turns = turns;
            settings.dig.seed = Some(3);
            Self {
                settings,
                session: SessionData::new(5),
                audio: RecordingAudio::default(),
            }
        }

        fn enter(&mut self) -> DigGameScene {
            let mut ctx = SceneContext {
                session: &mut self.session,
                settings: &self.settings,
                audio: &mut self.audio,
            };
            DigGameScene::enter(&mut ctx)
        }

        fn update(&mut self, scene: &mut DigGameScene, input: FrameInput) -> SceneRequest {
            let mut ctx = SceneContext {
                session: &mut self.session,
                settings: &self.settings,
                audio: &mut self.audio,
            };
            scene.update(&mut ctx, &input)
        }
    }

    fn press(pos: Vec2) -> FrameInput {
        FrameInput::at(pos, 0.016).pressed()
    }

    #[test]
    fn test_cell_mapping() {
        let mut h = Harness::new(25);
        let scene = h.enter();
        assert_eq!(scene.cell_at(Vec2::new(80.0, 70.0)), Some((0, 0)));
        assert_eq!(scene.cell_at(Vec2::new(529.0, 519.0)), Some((8, 8)));
        assert_eq!(scene.cell_at(Vec2::new(530.0, 100.0)), None);
        assert_eq!(scene.cell_at(Vec2::new(79.0, 100.0)), None);
        assert_eq!(scene.cell_at(scene.cell_center(4, 2)), Some((4, 2)));
    }

    #[test]
    fn test_select_then_dig() {
        let mut h = Harness::new(25);
        let mut scene = h.enter();
        let slot = scene.sim().inventory()[1].region.center();

        assert_eq!(h.update(&mut scene, press(slot)), SceneRequest::Stay);
        assert_eq!(scene.view().description, Some(ToolKind::Standard.description()));

        let corner = scene.cell_center(8, 8);
        h.update(&mut scene, FrameInput::at(corner, 0.016));
        assert_eq!(scene.view().preview, Some(Footprint { x: 7, y: 7, size: 2 }));

        h.update(&mut scene, press(corner));
        assert_eq!(scene.sim().turns_remaining(), 24);
        assert_eq!(scene.sim().score(), 40);

        // Still holding the scoop: the preview stays and a second press digs again
        assert_eq!(scene.view().preview, Some(Footprint { x: 7, y: 7, size: 2 }));
        h.update(&mut scene, press(corner));
        assert_eq!(scene.sim().turns_remaining(), 23);
        assert_eq!(scene.sim().score(), 40 + 160);

        // Pressing a slot puts the scoop down
        h.update(&mut scene, press(slot));
        assert_eq!(scene.view().preview, None);
    }

    #[test]
    fn test_press_outside_grid_does_nothing() {
        let mut h = Harness::new(25);
        let mut scene = h.enter();
        let slot = scene.sim().inventory()[0].region.center();
        h.update(&mut scene, press(slot));
        h.update(&mut scene, press(Vec2::new(700.0, 300.0)));
        assert_eq!(scene.sim().turns_remaining(), 25);
        assert!(scene.sim().armed().is_some());
    }

    #[test]
    fn test_hovered_slot_description() {
        let mut h = Harness::new(25);
        let mut scene = h.enter();
        let slot = scene.sim().inventory()[2].region.center();
        h.update(&mut scene, FrameInput::at(slot, 0.016));
        assert_eq!(scene.view().description, Some(ToolKind::Medium.description()));
    }

    #[test]
    fn test_last_turn_hands_off_to_ranking() {
        let mut h = Harness::new(1);
        h.session.last_game_score = Some(999);
        let mut scene = h.enter();
        // Stale score from an unranked game is dropped on entry
        assert_eq!(h.session.last_game_score, None);

        let slot = scene.sim().inventory()[0].region.center();
        let origin = scene.cell_center(0, 0);
        h.update(&mut scene, press(slot));
        let request = h.update(&mut scene, press(origin));

        assert_eq!(request, SceneRequest::Change(SceneId::Ranking));
        assert_eq!(h.session.last_game_score, Some(10));
        assert_eq!(h.session.dig_grid.get(0, 0), Some(1));
        assert_eq!(h.session.dig_grid.width(), 9);
    }
}
