//! Score and difficulty progression

use super::state::{Progress, SpawnWindow};
use crate::tuning::Tuning;

/// What changed during one difficulty step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Step {
    pub scored: bool,
    pub leveled_up: bool,
}

/// Count one running tick; award a point every `ticks_per_point` ticks and
/// raise the difficulty whenever the score lands on a multiple of
/// `points_per_level`.
pub fn advance(progress: &mut Progress, window: &mut SpawnWindow, tuning: &Tuning) -> Step {
    progress.time_ticks += 1;
    if progress.time_ticks % tuning.ticks_per_point != 0 {
        return Step::default();
    }

    progress.score += 1;
    let leveled_up = progress.score % tuning.points_per_level == 0;
    if leveled_up {
        progress.speed += tuning.speed_increment;
        *window = window.scaled(
            tuning.spawn_interval_scale,
            tuning.min_spawn_interval_floor,
            tuning.max_spawn_interval_floor,
        );
    }

    Step {
        scored: true,
        leveled_up,
    }
}
