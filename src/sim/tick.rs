//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::state::{GameEvent, GamePhase, GameState};
use super::{collision, difficulty, kinematics, obstacles};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space while running)
    pub jump: bool,
}

/// Reset the session and enter `Running`
pub fn start(state: &mut GameState, seed: u64) {
    state.reset(seed);
    state.phase = GamePhase::Running;
    log::info!("Run started with seed: {}", seed);
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Nothing moves before the first start or after a crash
    if state.phase != GamePhase::Running {
        return;
    }

    if input.jump && kinematics::jump(&mut state.player, state.phase, &state.tuning) {
        state.events.push(GameEvent::Jumped);
    }

    // 1. Obstacles
    if let Some((id, kind)) = obstacles::advance(
        &mut state.stream,
        &mut state.rng,
        state.progress.speed,
        &state.tuning,
    ) {
        state.events.push(GameEvent::ObstacleSpawned { id, kind });
    }

    // 2. Player
    if kinematics::update(&mut state.player, &state.tuning) {
        state.events.push(GameEvent::Landed);
    }

    // 3. Collisions
    if !state.stream.obstacles.is_empty()
        && collision::detect(&state.player.bounds(&state.tuning), &state.stream.obstacles)
    {
        state.phase = GamePhase::Over;
        state.events.push(GameEvent::Collision {
            score: state.progress.score,
        });
        log::info!("Game over! Final score: {}", state.progress.score);
        return;
    }

    // 4. Score and difficulty
    let step = difficulty::advance(&mut state.progress, &mut state.stream.window, &state.tuning);
    if step.scored {
        state.events.push(GameEvent::ScoreChanged {
            score: state.progress.score,
        });
    }
    if step.leveled_up {
        log::info!("Speed increased to: {}", state.progress.speed);
        state.events.push(GameEvent::SpeedUp {
            speed: state.progress.speed,
            window: state.stream.window,
        });
    }
}
