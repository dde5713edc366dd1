//! Sprite manifest
//!
//! One image per player pose and obstacle kind.

use crate::sim::{ObstacleKind, Pose};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    PlayerRun,
    PlayerJump,
    Box,
    Bike,
    Spike,
    Cactus,
}

impl SpriteId {
    /// Load order; also the number of assets the game waits for
    pub const ALL: [SpriteId; 6] = [
        SpriteId::PlayerRun,
        SpriteId::PlayerJump,
        SpriteId::Box,
        SpriteId::Bike,
        SpriteId::Spike,
        SpriteId::Cactus,
    ];

    /// Image path relative to the page
    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteId::PlayerRun => "main-sprite.png",
            SpriteId::PlayerJump => "jumping-sprite.png",
            SpriteId::Box => "box.png",
            SpriteId::Bike => "bike.png",
            SpriteId::Spike => "spike.png",
            SpriteId::Cactus => "cactus.png",
        }
    }

    /// Position in `ALL`, for array-backed image tables
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl From<Pose> for SpriteId {
    fn from(pose: Pose) -> Self {
        match pose {
            Pose::Running => SpriteId::PlayerRun,
            Pose::Jumping => SpriteId::PlayerJump,
        }
    }
}

impl From<ObstacleKind> for SpriteId {
    fn from(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Box => SpriteId::Box,
            ObstacleKind::Bike => SpriteId::Bike,
            ObstacleKind::Spike => SpriteId::Spike,
            ObstacleKind::Cactus => SpriteId::Cactus,
        }
    }
}
