//! Collision detection between axis-aligned boxes
//!
//! Screen coordinates: y grows downward, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// True if the player box overlaps any obstacle (stops at the first hit)
pub fn detect(player: &Aabb, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| player.overlaps(&o.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;
    use proptest::prelude::*;

    fn player_box() -> Aabb {
        Aabb::new(Vec2::new(50.0, 100.0), Vec2::new(78.0, 121.0))
    }

    fn box_obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            id: 1,
            kind: ObstacleKind::Box,
            pos: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_overlap_detected() {
        // Box obstacle is 68x70
        let obstacles = [box_obstacle_at(100.0, 150.0)];
        assert!(detect(&player_box(), &obstacles));
    }

    #[test]
    fn test_separated_by_one_unit() {
        let player = player_box();
        // Right of the player
        assert!(!detect(&player, &[box_obstacle_at(129.0, 150.0)]));
        // Left of the player (obstacle right edge at 49)
        assert!(!detect(&player, &[box_obstacle_at(-19.0, 150.0)]));
        // Below the player (player bottom at 221)
        assert!(!detect(&player, &[box_obstacle_at(100.0, 222.0)]));
        // Above the player (obstacle bottom at 99)
        assert!(!detect(&player, &[box_obstacle_at(100.0, 29.0)]));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let player = player_box();
        assert!(!detect(&player, &[box_obstacle_at(128.0, 150.0)]));
        assert!(!detect(&player, &[box_obstacle_at(100.0, 221.0)]));
    }

    #[test]
    fn test_any_obstacle_counts() {
        let obstacles = [
            box_obstacle_at(600.0, 320.0),
            box_obstacle_at(400.0, 320.0),
            box_obstacle_at(100.0, 150.0),
        ];
        assert!(detect(&player_box(), &obstacles));
        assert!(!detect(&player_box(), &obstacles[..2]));
    }

    #[test]
    fn test_empty_set() {
        assert!(!detect(&player_box(), &[]));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Aabb::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn box_shifted_past_right_edge_never_overlaps(
            y in 0.0f32..300.0,
            gap in 0u32..50,
        ) {
            let player = player_box();
            let obstacle = box_obstacle_at(player.right() + gap as f32, y);
            prop_assert!(!detect(&player, &[obstacle]));
        }
    }
}
