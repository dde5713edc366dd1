//! Hurdle - A side-scrolling jump-over-obstacles game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, collisions, difficulty)
//! - `driver`: Owns the session and decides when the next frame is scheduled
//! - `renderer`: Sprite manifest and Canvas 2D painter
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::{LoopDriver, StartOutcome, StatusMessage};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Gap between the ground line and the bottom edge of the field
    pub const GROUND_MARGIN: f32 = 10.0;

    /// Player sprite boxes (running on the ground vs. mid-jump)
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_RUN_WIDTH: f32 = 78.0;
    pub const PLAYER_RUN_HEIGHT: f32 = 121.0;
    pub const PLAYER_JUMP_WIDTH: f32 = 74.0;
    pub const PLAYER_JUMP_HEIGHT: f32 = 162.0;

    /// Kinematics, in units per tick
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_IMPULSE: f32 = -20.0;
    /// How far above the ground line a jump is still accepted
    pub const JUMP_TOLERANCE: f32 = 5.0;

    /// Horizontal scroll speed at session start
    pub const START_SPEED: f32 = 5.0;

    /// Spawn countdown window at session start (ticks)
    pub const START_MIN_SPAWN_INTERVAL: f32 = 90.0;
    pub const START_MAX_SPAWN_INTERVAL: f32 = 150.0;
    /// Floors the window never shrinks below
    pub const MIN_SPAWN_INTERVAL_FLOOR: f32 = 40.0;
    pub const MAX_SPAWN_INTERVAL_FLOOR: f32 = 70.0;

    /// Score +1 every this many ticks
    pub const TICKS_PER_POINT: u64 = 10;
    /// Difficulty steps up each time score hits a multiple of this
    pub const POINTS_PER_LEVEL: u32 = 100;
    pub const SPEED_INCREMENT: f32 = 0.5;
    pub const SPAWN_INTERVAL_SCALE: f32 = 0.98;
}
