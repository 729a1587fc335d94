//! Platform abstraction layer
//!
//! The host (window, browser, test harness) polls its devices once per frame
//! and hands the result to the scene machine as a [`FrameInput`]. Nothing in
//! the core reads devices or clocks directly.

use glam::Vec2;

use crate::sim::Rect;

/// Input and timing for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Seconds since the previous tick
    pub delta_seconds: f32,
    /// Frames since start
    pub tick_count: u64,
    /// New background volume from the title screen slider, if it moved
    pub volume: Option<f32>,
}

impl FrameInput {
    /// Input with the pointer at `pointer` and nothing pressed
    pub fn at(pointer: Vec2, delta_seconds: f32) -> Self {
        Self {
            pointer,
            delta_seconds,
            ..Self::default()
        }
    }

    /// Same input with the primary button pressed
    pub fn pressed(mut self) -> Self {
        self.primary_pressed = true;
        self
    }

    pub fn hovering(&self, region: &Rect) -> bool {
        region.contains(self.pointer)
    }

    /// Primary button pressed while over `region`
    pub fn clicked(&self, region: &Rect) -> bool {
        self.primary_pressed && self.hovering(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_needs_press_and_hover() {
        let button = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        let inside = Vec2::new(15.0, 15.0);

        assert!(!FrameInput::at(inside, 0.016).clicked(&button));
        assert!(FrameInput::at(inside, 0.016).pressed().clicked(&button));
        assert!(!FrameInput::at(Vec2::ZERO, 0.016).pressed().clicked(&button));
        assert!(FrameInput::at(inside, 0.016).hovering(&button));
    }
}
