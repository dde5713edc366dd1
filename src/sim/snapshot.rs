//! Renderable view of a session

use serde::Serialize;

use super::collision::Aabb;
use super::state::{GamePhase, GameState, ObstacleKind, Pose};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub bounds: Aabb,
    pub pose: Pose,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub bounds: Aabb,
}

/// Everything the presentation layer needs to paint one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: PlayerView,
    /// In spawn order
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub phase: GamePhase,
    pub ground_line: f32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: PlayerView {
                bounds: state.player.bounds(&state.tuning),
                pose: state.player.pose(),
            },
            obstacles: state
                .obstacles()
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    bounds: o.bounds(),
                })
                .collect(),
            score: state.score(),
            phase: state.phase,
            ground_line: state.tuning.ground_line(),
        }
    }
}
