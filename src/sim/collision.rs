//! Axis-aligned overlap tests and arena bounds
//!
//! The sim stands in for the physics engine's overlap callbacks in headless
//! form; sprite rotation is cosmetic and does not affect the hitbox.

use glam::Vec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Axis-aligned bounding box, stored as center + half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// True if the two boxes overlap (touching edges count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() <= self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() <= self.half.y + other.half.y
    }
}

/// Confine a sprite center to the arena so its bounds stay inside
pub fn clamp_to_arena(pos: Vec2, half: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(half.x, ARENA_WIDTH - half.x),
        pos.y.clamp(half.y, ARENA_HEIGHT - half.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_hit_and_miss() {
        let a = Aabb::new(Vec2::new(100.0, 100.0), Vec2::splat(12.0));
        let b = Aabb::new(Vec2::new(110.0, 95.0), Vec2::splat(12.0));
        let c = Aabb::new(Vec2::new(150.0, 100.0), Vec2::splat(12.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_touching_edges() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_clamp_to_arena() {
        let half = Vec2::splat(12.0);
        let inside = clamp_to_arena(Vec2::new(400.0, 400.0), half);
        assert_eq!(inside, Vec2::new(400.0, 400.0));
        let clamped = clamp_to_arena(Vec2::new(-50.0, 900.0), half);
        assert_eq!(clamped, Vec2::new(12.0, ARENA_HEIGHT - 12.0));
    }
}
