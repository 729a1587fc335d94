//! Collision detection between the ball and axis-aligned rectangles
//!
//! Overlap tests only; the response (which velocity component flips) is
//! decided by the breakout tick.

use super::shapes::{Circle, Rect, Segment};

/// Which face of a brick the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitFace {
    /// Top or bottom edge - reflect vertical velocity
    Horizontal,
    /// Anything else (side edges, or fully inside) - reflect horizontal velocity
    Vertical,
}

/// Check whether a circle overlaps a rectangle (touching counts)
pub fn circle_intersects_rect(circle: &Circle, rect: &Rect) -> bool {
    let closest = rect.closest_point(circle.center);
    closest.distance_squared(circle.center) <= circle.radius * circle.radius
}

/// Check whether a circle touches a line segment
pub fn circle_intersects_segment(circle: &Circle, segment: &Segment) -> bool {
    let closest = segment.closest_point(circle.center);
    closest.distance_squared(circle.center) <= circle.radius * circle.radius
}

/// Classify which face of `rect` the ball hit.
///
/// Only meaningful when the two already overlap.
pub fn hit_face(circle: &Circle, rect: &Rect) -> HitFace {
    if circle_intersects_segment(circle, &rect.bottom_edge())
        || circle_intersects_segment(circle, &rect.top_edge())
    {
        HitFace::Horizontal
    } else {
        HitFace::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn brick() -> Rect {
        Rect::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 20.0))
    }

    #[test]
    fn test_circle_rect_overlap() {
        let ball = Circle::new(Vec2::new(120.0, 94.0), 8.0);
        assert!(circle_intersects_rect(&ball, &brick()));

        let ball = Circle::new(Vec2::new(120.0, 80.0), 8.0);
        assert!(!circle_intersects_rect(&ball, &brick()));
    }

    #[test]
    fn test_circle_rect_corner_miss() {
        // Diagonal to the corner, inside the bounding box but outside the radius
        let ball = Circle::new(Vec2::new(94.0, 94.0), 8.0);
        assert!(!circle_intersects_rect(&ball, &brick()));
    }

    #[test]
    fn test_hit_face_from_below() {
        let ball = Circle::new(Vec2::new(120.0, 126.0), 8.0);
        assert!(circle_intersects_rect(&ball, &brick()));
        assert_eq!(hit_face(&ball, &brick()), HitFace::Horizontal);
    }

    #[test]
    fn test_hit_face_from_side() {
        let ball = Circle::new(Vec2::new(145.0, 110.0), 8.0);
        assert!(circle_intersects_rect(&ball, &brick()));
        assert_eq!(hit_face(&ball, &brick()), HitFace::Vertical);
    }

    #[test]
    fn test_hit_face_ball_inside() {
        let ball = Circle::new(Vec2::new(120.0, 110.0), 4.0);
        assert_eq!(hit_face(&ball, &brick()), HitFace::Vertical);
    }
}
