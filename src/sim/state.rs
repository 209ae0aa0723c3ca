//! Scene and gameplay state machines
//!
//! Two independent machines: [`SceneState`] tracks asset readiness, and
//! [`GameplayState`] tracks match flow. Gameplay only moves while the scene
//! is running; the scene enforces that guard.

use serde::{Deserialize, Serialize};

/// Top-level scene readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneState {
    /// Waiting for the one-time preparation step
    Loading,
    /// Prepared; input and simulation are live
    Running,
    /// Preparation failed. Terminal.
    Error,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every obstacle destroyed
    Win,
    /// Ship hit an obstacle
    Lose,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameplayState {
    /// Prepared but waiting for the first touch
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Frozen by the pause control
    Paused,
    /// Round over; the next touch restarts
    Ended(Outcome),
}

impl GameplayState {
    /// Controls and simulation take effect
    pub fn is_active(self) -> bool {
        self == GameplayState::Playing
    }

    /// A touch in this state restarts the round instead of pressing controls
    pub fn awaits_restart(self) -> bool {
        matches!(self, GameplayState::NotStarted | GameplayState::Ended(_))
    }

    /// Pause control: playing and paused swap, anything else stays put
    pub fn toggle_pause(self) -> Self {
        match self {
            GameplayState::Playing => GameplayState::Paused,
            GameplayState::Paused => GameplayState::Playing,
            other => other,
        }
    }

    /// End the round; only an active round can end
    pub fn finish(self, outcome: Outcome) -> Self {
        match self {
            GameplayState::Playing => GameplayState::Ended(outcome),
            other => other,
        }
    }
}
