//! Game balance and geometry
//!
//! Every number the simulation depends on. Defaults come from `consts`;
//! a JSON override can replace any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SpawnWindow;

/// Level-ups simulated when checking the spawn window; far more than a run reaches
const MAX_CHECKED_LEVELS: u32 = 10_000;

/// Errors raised while loading or validating a tuning
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("Invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("{name} is {value}, expected {expected}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },

    #[error("{name} {value} is below its floor {floor}")]
    BelowFloor {
        name: &'static str,
        value: f32,
        floor: f32,
    },

    #[error("Spawn window is inverted: min {min} > max {max}")]
    InvertedWindow { min: f32, max: f32 },

    #[error("Spawn window shrinks to {min}..{max} after {levels} level-ups, leaving no whole tick")]
    WindowCollapses { min: f32, max: f32, levels: u32 },
}

/// Data-driven balance for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub ground_margin: f32,

    // === Player ===
    pub player_x: f32,
    pub run_size: (f32, f32),
    pub jump_size: (f32, f32),
    pub gravity: f32,
    /// Upward velocity applied by a jump (negative is up)
    pub jump_impulse: f32,
    pub jump_tolerance: f32,

    // === Obstacles ===
    pub start_speed: f32,
    pub start_min_spawn_interval: f32,
    pub start_max_spawn_interval: f32,
    pub min_spawn_interval_floor: f32,
    pub max_spawn_interval_floor: f32,

    // === Difficulty ===
    pub ticks_per_point: u64,
    pub points_per_level: u32,
    pub speed_increment: f32,
    pub spawn_interval_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_margin: GROUND_MARGIN,

            player_x: PLAYER_X,
            run_size: (PLAYER_RUN_WIDTH, PLAYER_RUN_HEIGHT),
            jump_size: (PLAYER_JUMP_WIDTH, PLAYER_JUMP_HEIGHT),
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            jump_tolerance: JUMP_TOLERANCE,

            start_speed: START_SPEED,
            start_min_spawn_interval: START_MIN_SPAWN_INTERVAL,
            start_max_spawn_interval: START_MAX_SPAWN_INTERVAL,
            min_spawn_interval_floor: MIN_SPAWN_INTERVAL_FLOOR,
            max_spawn_interval_floor: MAX_SPAWN_INTERVAL_FLOOR,

            ticks_per_point: TICKS_PER_POINT,
            points_per_level: POINTS_PER_LEVEL,
            speed_increment: SPEED_INCREMENT,
            spawn_interval_scale: SPAWN_INTERVAL_SCALE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("run_size.width", self.run_size.0),
            ("run_size.height", self.run_size.1),
            ("jump_size.width", self.jump_size.0),
            ("jump_size.height", self.jump_size.1),
            ("gravity", self.gravity),
            ("start_speed", self.start_speed),
            ("start_min_spawn_interval", self.start_min_spawn_interval),
            ("min_spawn_interval_floor", self.min_spawn_interval_floor),
            ("spawn_interval_scale", self.spawn_interval_scale),
        ];
        if let Some((name, _)) = positive.into_iter().find(|(_, v)| *v <= 0.0) {
            return Err(TuningError::NonPositive(name));
        }
        if self.ticks_per_point == 0 {
            return Err(TuningError::NonPositive("ticks_per_point"));
        }
        if self.points_per_level == 0 {
            return Err(TuningError::NonPositive("points_per_level"));
        }

        // Jumps go up, speed never drops, the window never grows
        if self.jump_impulse >= 0.0 {
            return Err(TuningError::OutOfRange {
                name: "jump_impulse",
                value: self.jump_impulse,
                expected: "< 0",
            });
        }
        if self.speed_increment < 0.0 {
            return Err(TuningError::OutOfRange {
                name: "speed_increment",
                value: self.speed_increment,
                expected: ">= 0",
            });
        }
        if self.spawn_interval_scale > 1.0 {
            return Err(TuningError::OutOfRange {
                name: "spawn_interval_scale",
                value: self.spawn_interval_scale,
                expected: "in (0, 1]",
            });
        }
        for (name, value, floor) in [
            (
                "start_min_spawn_interval",
                self.start_min_spawn_interval,
                self.min_spawn_interval_floor,
            ),
            (
                "start_max_spawn_interval",
                self.start_max_spawn_interval,
                self.max_spawn_interval_floor,
            ),
        ] {
            if value < floor {
                return Err(TuningError::BelowFloor { name, value, floor });
            }
        }

        for (min, max) in [
            (self.start_min_spawn_interval, self.start_max_spawn_interval),
            (self.min_spawn_interval_floor, self.max_spawn_interval_floor),
        ] {
            if !(SpawnWindow { min, max }).has_whole_tick() {
                return Err(TuningError::InvertedWindow { min, max });
            }
        }

        // Walk the window through every level-up until it settles
        let mut window = self.start_window();
        for levels in 1..=MAX_CHECKED_LEVELS {
            let next = window.scaled(
                self.spawn_interval_scale,
                self.min_spawn_interval_floor,
                self.max_spawn_interval_floor,
            );
            if next == window {
                break;
            }
            if !next.has_whole_tick() {
                return Err(TuningError::WindowCollapses {
                    min: next.min,
                    max: next.max,
                    levels,
                });
            }
            window = next;
        }
        Ok(())
    }

    /// Spawn window a session starts with
    pub fn start_window(&self) -> SpawnWindow {
        SpawnWindow {
            min: self.start_min_spawn_interval,
            max: self.start_max_spawn_interval,
        }
    }

    /// The line obstacle bases sit on
    pub fn ground_line(&self) -> f32 {
        self.field_height - self.ground_margin
    }

    /// Top edge of the player when standing on the ground
    pub fn player_ground_y(&self) -> f32 {
        self.ground_line() - self.run_size.1
    }
}
