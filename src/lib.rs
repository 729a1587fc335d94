//! Sand Castle - a sandbox digging game with a breakout side mode
//!
//! Core modules:
//! - `sim`: Deterministic simulations (dig grid, breakout physics)
//! - `scene`: Scene state machine (title, games, ranking)
//! - `session`: Data shared across scenes for one session
//! - `highscores`: In-memory top-N leaderboard
//! - `platform`: Per-tick input and timing snapshot
//! - `audio`: Fire-and-forget sound interface
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod scene;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{SceneError, SettingsError};
pub use highscores::HighScores;
pub use scene::{Flow, SceneId, SceneMachine, SceneRegistry};
pub use session::SessionData;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen size
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Number of entries kept on the leaderboard
    pub const RANKING_COUNT: usize = 5;

    /// Sand grid dimensions (cells)
    pub const GRID_WIDTH: usize = 9;
    pub const GRID_HEIGHT: usize = 9;
    /// Sand cell side length (pixels)
    pub const CELL_SIZE: f32 = 50.0;
    /// Top-left corner of the sand grid on screen
    pub const GRID_OFFSET: (f32, f32) = (80.0, 70.0);
    /// Digs allowed before sundown
    pub const DIG_TURNS: u32 = 25;
    /// Points per dig are `DIG_POINTS * depth²`
    pub const DIG_POINTS: u64 = 10;
    /// Inventory slot centres and side length
    pub const SLOT_CENTERS: [(f32, f32); 3] = [(150.0, 650.0), (300.0, 650.0), (450.0, 650.0)];
    pub const SLOT_SIZE: f32 = 90.0;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 480.0;
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_START: (f32, f32) = (400.0, 400.0);

    /// Paddle defaults (centre y, size)
    pub const PADDLE_Y: f32 = 500.0;
    pub const PADDLE_SIZE: (f32, f32) = (60.0, 10.0);
    /// Horizontal offset from paddle centre is scaled by this before renormalising
    pub const PADDLE_DEFLECTION: f32 = 10.0;

    /// Brick defaults
    pub const BRICK_SIZE: (f32, f32) = (40.0, 20.0);
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_TOP: f32 = 60.0;
    pub const BRICK_HIT_VOLUME: f32 = 0.5;

    /// Title screen background track volume
    pub const BGM_VOLUME: f32 = 0.2;
    /// Title buttons (300x60), PLAY at screen centre, the rest stacked below
    pub const BUTTON_SIZE: (f32, f32) = (300.0, 60.0);
    pub const BUTTON_SPACING: f32 = 100.0;
}
