//! Axis-aligned geometry for bricks, paddle, buttons and grid cells
//!
//! Screen coordinates: x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle of the given size centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Inclusive on the top/left edges, exclusive on bottom/right, so adjacent
    /// cells never both claim a point.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }

    /// Top edge, left to right
    pub fn top_edge(&self) -> Segment {
        Segment::new(self.pos, Vec2::new(self.right(), self.top()))
    }

    /// Bottom edge, left to right
    pub fn bottom_edge(&self) -> Segment {
        Segment::new(Vec2::new(self.left(), self.bottom()), Vec2::new(self.right(), self.bottom()))
    }

    /// Point inside the rectangle closest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.pos, self.pos + self.size)
    }
}

/// A circle (the ball)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Point on the segment closest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let line = self.end - self.start;
        let len_sq = line.length_squared();
        if len_sq < 0.0001 {
            return self.start; // Degenerate segment
        }
        let t = ((point - self.start).dot(line) / len_sq).clamp(0.0, 1.0);
        self.start + line * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(400.0, 500.0), Vec2::new(60.0, 10.0));
        assert_eq!(r.pos, Vec2::new(370.0, 495.0));
        assert_eq!(r.center(), Vec2::new(400.0, 500.0));
    }

    #[test]
    fn test_contains_half_open() {
        let r = Rect::new(Vec2::ZERO, Vec2::splat(50.0));
        assert!(r.contains(Vec2::ZERO));
        assert!(r.contains(Vec2::new(49.9, 49.9)));
        assert!(!r.contains(Vec2::new(50.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.0, 50.0)));
    }

    #[test]
    fn test_segment_closest_point() {
        let s = Segment::new(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(s.closest_point(Vec2::new(5.0, 3.0)), Vec2::new(5.0, 0.0));
        assert_eq!(s.closest_point(Vec2::new(-4.0, 3.0)), Vec2::ZERO);
        assert_eq!(s.closest_point(Vec2::new(20.0, -1.0)), Vec2::new(10.0, 0.0));
    }
}
