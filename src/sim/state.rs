//! Game state and core simulation types
//!
//! Everything a session needs lives in `GameState`; the leaf systems
//! only ever see the pieces they mutate.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended on a collision
    Over,
}

/// Which sprite/box profile the player is using
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    Running,
    Jumping,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    pub airborne: bool,
}

impl Player {
    /// A grounded player at rest
    pub fn grounded(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.player_ground_y()),
            vel_y: 0.0,
            airborne: false,
        }
    }

    pub fn pose(&self) -> Pose {
        if self.airborne {
            Pose::Jumping
        } else {
            Pose::Running
        }
    }

    /// Box dimensions for the current pose
    pub fn size(&self, tuning: &Tuning) -> Vec2 {
        let (w, h) = match self.pose() {
            Pose::Running => tuning.run_size,
            Pose::Jumping => tuning.jump_size,
        };
        Vec2::new(w, h)
    }

    pub fn bounds(&self, tuning: &Tuning) -> Aabb {
        Aabb::new(self.pos, self.size(tuning))
    }
}

/// Obstacle variants, each with a fixed sprite box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Box,
    Bike,
    Spike,
    Cactus,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Box,
        ObstacleKind::Bike,
        ObstacleKind::Spike,
        ObstacleKind::Cactus,
    ];

    pub const fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Box => Vec2::new(68.0, 70.0),
            ObstacleKind::Bike => Vec2::new(97.0, 61.0),
            ObstacleKind::Spike => Vec2::new(114.0, 33.0),
            ObstacleKind::Cactus => Vec2::new(60.0, 69.0),
        }
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Spawn order within the session
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner; y is fixed so the base sits on the ground line
    pub pos: Vec2,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, x: f32, ground_line: f32) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::new(x, ground_line - kind.size().y),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.kind.size())
    }

    /// Entirely past the left edge of the field
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.kind.size().x < 0.0
    }
}

/// Spawn countdown bounds, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnWindow {
    pub min: f32,
    pub max: f32,
}

impl SpawnWindow {
    /// Whether at least one whole tick lies inside the window
    pub fn has_whole_tick(&self) -> bool {
        self.min.ceil() <= self.max.floor()
    }

    /// Whole-tick range the next countdown is drawn from.
    ///
    /// Never above `max`; validated tunings keep `lo <= hi` for every
    /// window a session can reach.
    pub fn tick_range(&self) -> (i32, i32) {
        let hi = self.max.floor() as i32;
        let lo = (self.min.ceil() as i32).min(hi);
        (lo, hi)
    }

    /// Shrink both bounds by `scale`, each held at its own floor
    pub fn scaled(self, scale: f32, min_floor: f32, max_floor: f32) -> Self {
        Self {
            min: (self.min * scale).max(min_floor),
            max: (self.max * scale).max(max_floor),
        }
    }
}

/// Obstacle spawner and the live obstacle set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleStream {
    /// Ticks until the next spawn
    pub countdown: i32,
    pub window: SpawnWindow,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl ObstacleStream {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            countdown: tuning.start_max_spawn_interval as i32,
            window: tuning.start_window(),
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate the next obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Score, speed and the tick counter that drives them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    /// Ticks simulated while running
    pub time_ticks: u64,
    pub score: u32,
    /// Horizontal scroll speed shared by every obstacle
    pub speed: f32,
}

impl Progress {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            time_ticks: 0,
            score: 0,
            speed: tuning.start_speed,
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    ScoreChanged { score: u32 },
    SpeedUp { speed: f32, window: SpawnWindow },
    Collision { score: u32 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed of the current session
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub stream: ObstacleStream,
    pub progress: Progress,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// A fresh, not-yet-started session
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::grounded(&tuning),
            stream: ObstacleStream::new(&tuning),
            progress: Progress::new(&tuning),
            tuning,
            phase: GamePhase::NotStarted,
            events: Vec::new(),
        }
    }

    /// Reinitialize every mutable field for a new run; tuning is kept
    pub fn reset(&mut self, seed: u64) {
        let tuning = self.tuning.clone();
        *self = Self::new(seed, tuning);
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.stream.obstacles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_range_never_exceeds_max() {
        let window = SpawnWindow { min: 40.47, max: 71.15 };
        assert!(window.has_whole_tick());
        assert_eq!(window.tick_range(), (41, 71));

        // No whole tick inside: collapse onto floor(max) rather than overshoot
        let narrow = SpawnWindow { min: 83.01, max: 83.94 };
        assert!(!narrow.has_whole_tick());
        assert_eq!(narrow.tick_range(), (83, 83));
    }

    #[test]
    fn test_scaled_holds_floors() {
        let window = SpawnWindow { min: 41.0, max: 150.0 }.scaled(0.5, 40.0, 70.0);
        assert_eq!(window, SpawnWindow { min: 40.0, max: 75.0 });
    }
}
