//! Obstacle spawning, scrolling and culling

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Obstacle, ObstacleKind, ObstacleStream};
use crate::tuning::Tuning;

/// Advance the stream by one tick.
///
/// Counts down, spawns at most one obstacle at the right edge, scrolls
/// everything left by `speed` and drops what has left the field.
/// Returns the obstacle spawned this tick, if any.
pub fn advance(
    stream: &mut ObstacleStream,
    rng: &mut Pcg32,
    speed: f32,
    tuning: &Tuning,
) -> Option<(u32, ObstacleKind)> {
    stream.countdown -= 1;
    let spawned = if stream.countdown <= 0 {
        let spawned = spawn(stream, rng, tuning);
        let (lo, hi) = stream.window.tick_range();
        stream.countdown = rng.random_range(lo..=hi);
        Some(spawned)
    } else {
        None
    };

    for obstacle in &mut stream.obstacles {
        obstacle.pos.x -= speed;
    }
    // retain keeps spawn order for the survivors
    stream.obstacles.retain(|o| !o.is_offscreen());

    spawned
}

/// Place one obstacle of a random kind at the right edge of the field
pub fn spawn(stream: &mut ObstacleStream, rng: &mut Pcg32, tuning: &Tuning) -> (u32, ObstacleKind) {
    let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
    let id = stream.next_obstacle_id();
    stream
        .obstacles
        .push(Obstacle::new(id, kind, tuning.field_width, tuning.ground_line()));
    (id, kind)
}
