//! Loop driver
//!
//! Owns the session and decides whether another frame should be scheduled.
//! The host only forwards key presses, asset notifications and animation
//! frames; it never touches `GameState` directly.

use std::borrow::Cow;

use crate::renderer::sprites::SpriteId;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, start, tick};
use crate::tuning::Tuning;

/// Text shown over the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// Sprites still decoding
    Loading,
    /// Ready and waiting for the first start
    Instructions,
    /// Nothing shown while running
    Hidden,
    /// Run ended
    GameOver { score: u32 },
}

impl StatusMessage {
    /// Display text; only the game-over line allocates
    pub fn text(&self) -> Cow<'static, str> {
        match self {
            StatusMessage::Loading => Cow::Borrowed("Loading Sprites..."),
            StatusMessage::Instructions => Cow::Borrowed("Press SPACE to Start / Jump"),
            StatusMessage::Hidden => Cow::Borrowed(""),
            StatusMessage::GameOver { score } => {
                Cow::Owned(format!("Game Over! Score: {score}. Press SPACE to Restart"))
            }
        }
    }
}

/// Result of a start/restart request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// New session running; the host must (re)schedule frames
    Started,
    /// Assets not ready yet; the caller has to ask again later
    Deferred,
    /// A session is already running
    Ignored,
}

/// Counts decoded sprites until all of them are in
#[derive(Debug, Clone, Copy)]
pub struct AssetGate {
    loaded: usize,
    total: usize,
}

impl AssetGate {
    pub fn new(total: usize) -> Self {
        Self { loaded: 0, total }
    }

    /// Record one loaded asset. Returns true on the call that completes the set.
    pub fn mark_loaded(&mut self) -> bool {
        if self.is_ready() {
            return false;
        }
        self.loaded += 1;
        log::info!("Loaded image {}/{}", self.loaded, self.total);
        self.is_ready()
    }

    pub fn is_ready(&self) -> bool {
        self.loaded >= self.total
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.loaded, self.total)
    }
}

/// Drives one session at a time, one tick per frame
pub struct LoopDriver {
    state: GameState,
    assets: AssetGate,
    /// Whether the host should keep requesting frames
    active: bool,
    /// One-shot input for the next tick
    input: TickInput,
    status: StatusMessage,
}

impl LoopDriver {
    /// Driver gated on every sprite in the manifest
    pub fn new(tuning: Tuning) -> Self {
        Self::with_asset_count(tuning, SpriteId::ALL.len())
    }

    pub fn with_asset_count(tuning: Tuning, total_assets: usize) -> Self {
        let assets = AssetGate::new(total_assets);
        let status = if assets.is_ready() {
            StatusMessage::Instructions
        } else {
            StatusMessage::Loading
        };
        Self {
            state: GameState::new(0, tuning),
            assets,
            active: false,
            input: TickInput::default(),
            status,
        }
    }

    /// Record a decoded asset. Returns true when the last one arrives.
    pub fn asset_loaded(&mut self) -> bool {
        let became_ready = self.assets.mark_loaded();
        if became_ready {
            log::info!("All sprites loaded!");
            if self.state.phase == GamePhase::NotStarted {
                self.status = StatusMessage::Instructions;
            }
        }
        became_ready
    }

    pub fn is_ready(&self) -> bool {
        self.assets.is_ready()
    }

    /// Start a new session, or restart after a crash
    pub fn try_start(&mut self, seed: u64) -> StartOutcome {
        if !self.assets.is_ready() {
            let (loaded, total) = self.assets.progress();
            log::info!("Waiting for images... ({}/{})", loaded, total);
            self.status = StatusMessage::Loading;
            return StartOutcome::Deferred;
        }
        if self.state.phase == GamePhase::Running {
            return StartOutcome::Ignored;
        }

        start(&mut self.state, seed);
        self.input = TickInput::default();
        self.active = true;
        self.status = StatusMessage::Hidden;
        StartOutcome::Started
    }

    /// Queue a jump for the next tick (only while running)
    pub fn jump(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.input.jump = true;
        }
    }

    /// The single action key: start/restart when idle, jump while running.
    /// Returns `Some` when a start was attempted.
    pub fn press(&mut self, seed: u64) -> Option<StartOutcome> {
        if self.state.phase == GamePhase::Running {
            self.jump();
            None
        } else {
            Some(self.try_start(seed))
        }
    }

    /// Run one tick if the loop is active. Returns whether another frame is wanted.
    pub fn frame(&mut self) -> bool {
        if !self.active {
            return false;
        }

        tick(&mut self.state, &self.input);
        // Clear one-shot inputs after processing
        self.input = TickInput::default();

        for event in &self.state.events {
            match event {
                GameEvent::ObstacleSpawned { id, kind } => {
                    log::debug!("Spawned obstacle {} ({:?})", id, kind)
                }
                GameEvent::SpeedUp { speed, window } => log::debug!(
                    "Difficulty up: speed {} spawn window {:.1}..{:.1}",
                    speed,
                    window.min,
                    window.max
                ),
                _ => {}
            }
        }

        if self.state.phase == GamePhase::Over {
            self.active = false;
            self.status = StatusMessage::GameOver {
                score: self.state.score(),
            };
        }
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn status(&self) -> StatusMessage {
        self.status
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_driver() -> LoopDriver {
        let mut driver = LoopDriver::new(Tuning::default());
        while !driver.asset_loaded() {}
        driver
    }

    /// Tick until the run ends (no jumping, so the first obstacle wins)
    fn run_to_crash(driver: &mut LoopDriver) -> u32 {
        let mut frames = 0;
        while driver.frame() {
            frames += 1;
            assert!(frames < 10_000, "run never ended");
        }
        frames
    }

    #[test]
    fn test_start_deferred_until_ready() {
        let mut driver = LoopDriver::new(Tuning::default());
        assert_eq!(driver.status(), StatusMessage::Loading);

        for _ in 0..SpriteId::ALL.len() - 1 {
            assert!(!driver.asset_loaded());
            assert_eq!(driver.try_start(1), StartOutcome::Deferred);
            assert!(!driver.is_active());
            assert!(!driver.frame());
        }

        assert!(driver.asset_loaded());
        assert!(driver.is_ready());
        assert_eq!(driver.status(), StatusMessage::Instructions);
        // Extra notifications don't flip readiness again
        assert!(!driver.asset_loaded());

        assert_eq!(driver.try_start(1), StartOutcome::Started);
        assert_eq!(driver.phase(), GamePhase::Running);
        assert_eq!(driver.status(), StatusMessage::Hidden);
    }

    #[test]
    fn test_inactive_frame_is_noop() {
        let mut driver = ready_driver();
        assert!(!driver.frame());
        assert_eq!(driver.state().progress.time_ticks, 0);
        assert_eq!(driver.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_press_starts_then_jumps() {
        let mut driver = ready_driver();
        assert_eq!(driver.press(7), Some(StartOutcome::Started));
        assert_eq!(driver.press(8), None);
        assert!(driver.frame());
        assert!(driver.events().contains(&GameEvent::Jumped));
        assert!(driver.state().player.airborne);
        // Second start while running is ignored
        assert_eq!(driver.try_start(9), StartOutcome::Ignored);
        assert_eq!(driver.state().seed, 7);
    }

    #[test]
    fn test_loop_deactivates_on_game_over() {
        let mut driver = ready_driver();
        driver.try_start(3);
        run_to_crash(&mut driver);

        assert_eq!(driver.phase(), GamePhase::Over);
        assert!(!driver.is_active());
        let score = driver.state().score();
        assert_eq!(driver.status(), StatusMessage::GameOver { score });

        // No more ticks, jumps are dropped
        let ticks = driver.state().progress.time_ticks;
        driver.jump();
        assert!(!driver.frame());
        assert_eq!(driver.state().progress.time_ticks, ticks);
        assert!(!driver.state().player.airborne);
    }

    #[test]
    fn test_restart_matches_first_start() {
        let mut first = ready_driver();
        first.try_start(42);
        let fresh = serde_json::to_string(first.state()).unwrap();

        let mut second = ready_driver();
        second.try_start(1);
        run_to_crash(&mut second);
        assert_eq!(second.press(42), Some(StartOutcome::Started));
        assert!(second.is_active());
        assert_eq!(serde_json::to_string(second.state()).unwrap(), fresh);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = ready_driver();
        let mut b = ready_driver();
        a.try_start(1234);
        b.try_start(1234);
        assert_eq!(run_to_crash(&mut a), run_to_crash(&mut b));
        assert_eq!(a.state().score(), b.state().score());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(StatusMessage::Loading.text(), "Loading Sprites...");
        assert_eq!(
            StatusMessage::Instructions.text(),
            "Press SPACE to Start / Jump"
        );
        assert!(StatusMessage::Hidden.text().is_empty());
        assert!(StatusMessage::GameOver { score: 12 }.text().contains("12"));
    }

    #[test]
    fn test_fixed_status_text_is_borrowed() {
        for status in [
            StatusMessage::Loading,
            StatusMessage::Instructions,
            StatusMessage::Hidden,
        ] {
            assert!(matches!(status.text(), Cow::Borrowed(_)));
        }
        assert_eq!(
            StatusMessage::GameOver { score: 7 }.text(),
            "Game Over! Score: 7. Press SPACE to Restart"
        );
    }
}
