//! Breakout simulation
//!
//! A ball bounces between a pointer-driven paddle, the walls and a wall of
//! bricks. Each brick breaks on the first hit and is worth one point. The
//! game ends when the ball drops below the playfield or no bricks remain.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{HitFace, circle_intersects_rect, hit_face};
use super::shapes::{Circle, Rect};
use crate::settings::BreakoutSettings;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// The paddle. Only its x follows the pointer; y and size are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub center: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.size)
    }
}

/// Things that happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickEvents {
    /// Brick destroyed this tick (at most one)
    pub brick_destroyed: Option<Rect>,
    pub paddle_hit: bool,
    /// Set once the game is over, with the final score
    pub game_over: Option<u64>,
}

/// Breakout game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakoutSimulation {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Remaining bricks in scan order
    pub bricks: Vec<Rect>,
    pub score: u64,
    /// Playfield width and height
    pub field: Vec2,
    /// Speed magnitude restored on every paddle bounce
    pub speed: f32,
    /// Scale applied to the paddle-centre offset when bouncing
    pub deflection: f32,
    finished: bool,
}

impl BreakoutSimulation {
    /// New game with the standard brick wall
    pub fn new(settings: &BreakoutSettings, field: Vec2) -> Self {
        let bricks = brick_wall(settings, field.x);
        Self::with_bricks(settings, field, bricks)
    }

    /// New game with a custom set of bricks (scanned in the given order)
    pub fn with_bricks(settings: &BreakoutSettings, field: Vec2, bricks: Vec<Rect>) -> Self {
        Self {
            ball: Ball {
                pos: settings.ball_start,
                vel: Vec2::new(0.0, -settings.ball_speed),
                radius: settings.ball_radius,
            },
            paddle: Paddle {
                center: Vec2::new(field.x / 2.0, settings.paddle_y),
                size: settings.paddle_size,
            },
            bricks,
            score: 0,
            field,
            speed: settings.ball_speed,
            deflection: settings.paddle_deflection,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` seconds with the paddle centred on `pointer_x`.
    ///
    /// Order matters: move, one brick, ceiling, side walls, paddle, then the
    /// end-of-game check.
    pub fn tick(&mut self, pointer_x: f32, dt: f32) -> TickEvents {
        let mut events = TickEvents::default();
        if self.finished {
            events.game_over = Some(self.score);
            return events;
        }

        // Paddle is not kept inside the playfield
        self.paddle.center.x = pointer_x;

        self.ball.pos += self.ball.vel * dt;

        let circle = self.ball.circle();
        if let Some(i) = self.bricks.iter().position(|b| circle_intersects_rect(&circle, b)) {
            let brick = self.bricks.remove(i);
            match hit_face(&circle, &brick) {
                HitFace::Horizontal => self.ball.vel.y = -self.ball.vel.y,
                HitFace::Vertical => self.ball.vel.x = -self.ball.vel.x,
            }
            self.score += 1;
            events.brick_destroyed = Some(brick);
            log::debug!("Brick at ({}, {}) destroyed, score {}", brick.pos.x, brick.pos.y, self.score);
        }

        // Ceiling
        if self.ball.pos.y < 0.0 && self.ball.vel.y < 0.0 {
            self.ball.vel.y = -self.ball.vel.y;
        }

        // Side walls
        if (self.ball.pos.x < 0.0 && self.ball.vel.x < 0.0)
            || (self.field.x < self.ball.pos.x && self.ball.vel.x > 0.0)
        {
            self.ball.vel.x = -self.ball.vel.x;
        }

        // Paddle: bounce angle follows the offset from the paddle centre,
        // speed snaps back to the configured magnitude
        let paddle = self.paddle.rect();
        if self.ball.vel.y > 0.0 && circle_intersects_rect(&self.ball.circle(), &paddle) {
            let dir = Vec2::new((self.ball.pos.x - paddle.center().x) * self.deflection, -self.ball.vel.y);
            self.ball.vel = dir.normalize_or_zero() * self.speed;
            events.paddle_hit = true;
        }

        if self.field.y < self.ball.pos.y || self.bricks.is_empty() {
            self.finished = true;
            events.game_over = Some(self.score);
        }

        events
    }
}

/// Standard layout: as many columns as fit the playfield width, rows from
/// `brick_top` down, enumerated row by row.
pub fn brick_wall(settings: &BreakoutSettings, field_width: f32) -> Vec<Rect> {
    let size = settings.brick_size;
    let columns = (field_width / size.x).floor() as u32;
    (0..settings.brick_rows)
        .flat_map(|row| {
            (0..columns).map(move |col| {
                Rect::new(
                    Vec2::new(col as f32 * size.x, settings.brick_top + row as f32 * size.y),
                    size,
                )
            })
        })
        .collect()
}
