//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod kinematics;
pub mod obstacles;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use snapshot::Snapshot;
pub use state::{
    GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, ObstacleStream, Player, Pose,
    Progress, SpawnWindow,
};
pub use tick::{TickInput, start, tick};
