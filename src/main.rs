//! Sand Castle entry point
//!
//! Runs the scene machine headless with an autopilot standing in for the
//! player: it presses PLAY, plays a few rounds, acknowledges each ranking and
//! finally presses EXIT. Drawing and real audio belong to a host front end.
//!
//! Usage: `sand-castle [settings.json]`

use std::process::ExitCode;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use sand_castle::audio::{AudioSink, LogAudio, Track};
use sand_castle::platform::FrameInput;
use sand_castle::scene::{Scene, TitleButton};
use sand_castle::{Flow, SceneMachine, SceneRegistry, Settings};

/// Simulated frame time (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after ten simulated minutes
const MAX_FRAMES: u64 = 60 * 60 * 10;
/// Games the autopilot plays before exiting
const ROUNDS: u32 = 2;
/// Frames the autopilot lingers on the ranking screen
const RANKING_PAUSE: u64 = 90;
/// Chance per dig-game frame that the autopilot touches a slot while armed
const SWAP_CHANCE: f64 = 0.25;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Sand Castle (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let start = settings.start_scene;
    let mut machine = match SceneMachine::new(SceneRegistry::standard(), settings, LogAudio::new()) {
        Ok(machine) => machine,
        Err(e) => {
            log::error!("Bad scene configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = machine.init(start) {
        log::error!("Failed to start: {}", e);
        return ExitCode::FAILURE;
    }

    let mut pilot = Autopilot::new(rand::random());
    let mut exited = false;
    for frame in 0..MAX_FRAMES {
        let input = pilot.next_input(&machine, frame);
        match machine.tick(&input) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                exited = true;
                break;
            }
            Err(e) => {
                log::error!("Scene machine stopped: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    machine.audio_mut().stop_track(Track::Title);

    if !exited {
        log::warn!("Autopilot ran out of frames in {:?}", machine.active_id());
    }
    log::info!("High scores: {:?}", machine.session().high_scores.entries());
    ExitCode::SUCCESS
}

/// Scripted player
struct Autopilot {
    rng: Pcg32,
    rounds_left: u32,
    /// Frame the ranking screen was first seen on
    ranking_since: Option<u64>,
}

impl Autopilot {
    fn new(seed: u64) -> Self {
        log::info!("Autopilot seed: {}", seed);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            rounds_left: ROUNDS,
            ranking_since: None,
        }
    }

    fn next_input<A: AudioSink>(&mut self, machine: &SceneMachine<A>, frame: u64) -> FrameInput {
        let mut input = FrameInput {
            tick_count: frame,
            ..FrameInput::at(Vec2::ZERO, FRAME_DT)
        };

        match machine.scene() {
            Some(Scene::Title(title)) => {
                let button = if self.rounds_left > 0 {
                    self.rounds_left -= 1;
                    TitleButton::Play
                } else {
                    TitleButton::Exit
                };
                input.pointer = title.button_center(button);
                input.primary_pressed = true;
            }
            Some(Scene::DigGame(dig)) => {
                let sim = dig.sim();
                // Now and then put the scoop down to pick another one
                let swap = sim.armed().is_none() || self.rng.random_bool(SWAP_CHANCE);
                if swap && !sim.inventory().is_empty() {
                    let slot = self.rng.random_range(0..sim.inventory().len());
                    input.pointer = sim.inventory()[slot].region.center();
                } else {
                    let grid = sim.grid();
                    let x = self.rng.random_range(0..grid.width());
                    let y = self.rng.random_range(0..grid.height());
                    input.pointer = dig.cell_center(x, y);
                }
                input.primary_pressed = true;
            }
            Some(Scene::BreakoutGame(breakout)) => {
                // Catch the ball off-centre so it does not bounce straight up forever
                let ball = breakout.sim().ball.pos;
                input.pointer = Vec2::new(ball.x + self.rng.random_range(-20.0f32..20.0), ball.y);
            }
            Some(Scene::Ranking(ranking)) => {
                let since = *self.ranking_since.get_or_insert(frame);
                if since == frame {
                    log::info!(
                        "Ranking: {:?}, highlighted {:?}",
                        machine.session().high_scores.entries(),
                        ranking.rank()
                    );
                }
                if frame - since >= RANKING_PAUSE {
                    self.ranking_since = None;
                    input.primary_pressed = true;
                }
            }
            None => {}
        }
        input
    }
}
