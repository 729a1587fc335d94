//! Game settings
//!
//! Every tunable of the scenes and simulations lives here. Defaults match the
//! values in [`crate::consts`]; a JSON file may override any subset.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::scene::SceneId;
use crate::sim::ToolKind;

/// Logical screen / playfield size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl ScreenSettings {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Title screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSettings {
    /// Initial background track volume (0.0 - 1.0)
    pub bgm_volume: f32,
    /// Scene the PLAY button starts
    pub play_target: SceneId,
    pub button_size: Vec2,
    /// Vertical distance between stacked buttons
    pub button_spacing: f32,
}

impl Default for TitleSettings {
    fn default() -> Self {
        Self {
            bgm_volume: BGM_VOLUME,
            play_target: SceneId::DigGame,
            button_size: Vec2::from(BUTTON_SIZE),
            button_spacing: BUTTON_SPACING,
        }
    }
}

/// Sand digging game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DigSettings {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    pub cell_size: f32,
    /// Top-left corner of the grid on screen
    pub grid_offset: Vec2,
    pub turns: u32,
    /// Base points per dug cell (multiplied by depth squared)
    pub points: u64,
    /// When false only `fixed_tool` is available and it is always armed
    pub inventory_enabled: bool,
    pub slot_centers: Vec<Vec2>,
    pub slot_size: f32,
    /// Tool in each slot at game start, same length as `slot_centers`
    pub initial_tools: Vec<ToolKind>,
    pub fixed_tool: ToolKind,
    /// Seed for tool replacement draws; random per game when absent
    pub seed: Option<u64>,
}

impl Default for DigSettings {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            grid_offset: Vec2::from(GRID_OFFSET),
            turns: DIG_TURNS,
            points: DIG_POINTS,
            inventory_enabled: true,
            slot_centers: SLOT_CENTERS.iter().map(|&c| Vec2::from(c)).collect(),
            slot_size: SLOT_SIZE,
            initial_tools: vec![ToolKind::Mini, ToolKind::Standard, ToolKind::Medium],
            fixed_tool: ToolKind::Standard,
            seed: None,
        }
    }
}

/// Breakout game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutSettings {
    /// Ball speed magnitude (pixels/s), restored after every paddle bounce
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub ball_start: Vec2,
    /// Paddle centre y
    pub paddle_y: f32,
    pub paddle_size: Vec2,
    pub paddle_deflection: f32,
    pub brick_size: Vec2,
    pub brick_rows: u32,
    /// y of the first brick row
    pub brick_top: f32,
    pub hit_volume: f32,
}

impl Default for BreakoutSettings {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            ball_radius: BALL_RADIUS,
            ball_start: Vec2::from(BALL_START),
            paddle_y: PADDLE_Y,
            paddle_size: Vec2::from(PADDLE_SIZE),
            paddle_deflection: PADDLE_DEFLECTION,
            brick_size: Vec2::from(BRICK_SIZE),
            brick_rows: BRICK_ROWS,
            brick_top: BRICK_TOP,
            hit_volume: BRICK_HIT_VOLUME,
        }
    }
}

/// Ranking screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Leaderboard length
    pub count: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            count: RANKING_COUNT,
        }
    }
}

/// All settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scene entered by `SceneMachine::init` in the binary
    pub start_scene: SceneId,
    pub screen: ScreenSettings,
    pub title: TitleSettings,
    pub dig: DigSettings,
    pub breakout: BreakoutSettings,
    pub ranking: RankingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_scene: SceneId::Title,
            screen: ScreenSettings::default(),
            title: TitleSettings::default(),
            dig: DigSettings::default(),
            breakout: BreakoutSettings::default(),
            ranking: RankingSettings::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject configurations the scenes cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid =
            |msg: &str| -> Result<(), SettingsError> { Err(SettingsError::Invalid(msg.to_string())) };

        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return invalid("screen size must be positive");
        }
        if !self.title.play_target.is_game() {
            return invalid("title.play_target must be a game scene");
        }

        let dig = &self.dig;
        if dig.width == 0 || dig.height == 0 {
            return invalid("dig grid must have at least one cell");
        }
        if dig.cell_size <= 0.0 {
            return invalid("dig.cell_size must be positive");
        }
        if dig.turns == 0 {
            return invalid("dig.turns must be at least 1");
        }
        if dig.inventory_enabled {
            if dig.slot_centers.is_empty() {
                return invalid("dig inventory needs at least one slot");
            }
            if dig.slot_centers.len() != dig.initial_tools.len() {
                return invalid("dig.initial_tools must have one tool per slot");
            }
        }

        let bo = &self.breakout;
        if bo.ball_speed <= 0.0 {
            return invalid("breakout.ball_speed must be positive");
        }
        if bo.brick_size.x <= 0.0 || bo.brick_size.y <= 0.0 || bo.brick_rows == 0 {
            return invalid("breakout needs at least one row of non-empty bricks");
        }
        if bo.brick_size.x > self.screen.width {
            return invalid("breakout bricks are wider than the playfield");
        }

        if self.ranking.count == 0 {
            return invalid("ranking.count must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "dig": { "turns": 3, "seed": 7 } }"#).unwrap();
        assert_eq!(settings.dig.turns, 3);
        assert_eq!(settings.dig.seed, Some(7));
        assert_eq!(settings.dig.width, GRID_WIDTH);
        assert_eq!(settings.breakout.ball_speed, BALL_SPEED);
        assert_eq!(settings.start_scene, SceneId::Title);
    }

    #[test]
    fn test_scene_ids_in_json() {
        let settings = Settings::from_json(
            r#"{ "start_scene": "DigGame", "title": { "play_target": "BreakoutGame" } }"#,
        )
        .unwrap();
        assert_eq!(settings.start_scene, SceneId::DigGame);
        assert_eq!(settings.title.play_target, SceneId::BreakoutGame);
    }

    #[test]
    fn test_rejects_non_game_play_target() {
        let err = Settings::from_json(r#"{ "title": { "play_target": "Ranking" } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_slot_tool_mismatch() {
        let mut settings = Settings::default();
        settings.dig.initial_tools.pop();
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        // Irrelevant once the inventory is off
        settings.dig.inventory_enabled = false;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_turns() {
        let mut settings = Settings::default();
        settings.dig.turns = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
