//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is passed in, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (bricks scanned in insertion order)
//! - No rendering, audio or platform dependencies

pub mod breakout;
pub mod collision;
pub mod dig;
pub mod shapes;

pub use breakout::{Ball, BreakoutSimulation, Paddle, TickEvents, brick_wall};
pub use collision::{HitFace, circle_intersects_rect, circle_intersects_segment, hit_face};
pub use dig::{Armed, DigGrid, DigReport, DigSimulation, Footprint, ItemSlot, TOOL_CATALOG, ToolKind};
pub use shapes::{Circle, Rect, Segment};
