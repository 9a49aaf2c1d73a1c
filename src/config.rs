use serde::{Deserialize, Serialize};

use crate::error::AiError;

// ---------------------------------------------------------------------------
// Per-difficulty tuning
// ---------------------------------------------------------------------------

/// Easy: probabilistic chase mixed with a random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasyTuning {
    /// Manhattan distance at or below which the chase is certain.
    pub chase_threshold: u32,
    /// Percentage points of chase chance lost per tile beyond the threshold.
    pub slope: u32,
    /// Generator seed. `None` draws one from entropy at construction.
    pub seed: Option<u32>,
}

impl Default for EasyTuning {
    fn default() -> Self {
        Self {
            chase_threshold: 7,
            slope: 5,
            seed: None,
        }
    }
}

/// Medium: greedy chase with BFS recovery when it starts to oscillate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediumTuning {
    /// Consecutive repeated proposals that count as being stuck.
    pub stuck_threshold: u32,
    /// BFS turns that follow the turn recovery is armed on.
    pub recovery_turns: u32,
}

impl MediumTuning {
    pub fn validate(&self) -> Result<(), AiError> {
        if self.stuck_threshold == 0 {
            return Err(AiError::InvalidConfig(
                "medium.stuck_threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MediumTuning {
    fn default() -> Self {
        Self {
            stuck_threshold: 2,
            recovery_turns: 2,
        }
    }
}

/// Hard: the Hunt / Search / Intercept / Patrol state machine.
///
/// Phase lengths are consecutive and counted in turns without a sighting:
/// Hunt gives up after `hunt_turns`, Search after a further `search_turns`,
/// Intercept after a further `intercept_turns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardTuning {
    pub search_radius: u32,
    pub hunt_turns: u32,
    pub search_turns: u32,
    pub intercept_turns: u32,
    /// Patrol heads for the exit for the first half of each period and for
    /// the map center for the second half.
    pub patrol_period: u32,
    /// An adversary parked on its intercept point walks back toward the exit
    /// when it is further than this many steps away.
    pub exit_guard_distance: u32,
}

impl HardTuning {
    pub fn search_after(&self) -> u32 {
        self.hunt_turns
    }

    pub fn intercept_after(&self) -> u32 {
        self.hunt_turns + self.search_turns
    }

    pub fn patrol_after(&self) -> u32 {
        self.hunt_turns + self.search_turns + self.intercept_turns
    }

    pub fn validate(&self) -> Result<(), AiError> {
        let checks = [
            (self.hunt_turns, "hard.hunt_turns"),
            (self.search_turns, "hard.search_turns"),
            (self.intercept_turns, "hard.intercept_turns"),
        ];
        if let Some((_, name)) = checks.iter().find(|(value, _)| *value == 0) {
            return Err(AiError::InvalidConfig(format!("{} must be positive", name)));
        }
        if self.patrol_period < 2 {
            return Err(AiError::InvalidConfig(
                "hard.patrol_period must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HardTuning {
    fn default() -> Self {
        Self {
            search_radius: 3,
            hunt_turns: 2,
            search_turns: 8,
            intercept_turns: 7,
            patrol_period: 10,
            exit_guard_distance: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Full config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub easy: EasyTuning,
    pub medium: MediumTuning,
    pub hard: HardTuning,
}

impl AiConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, AiError> {
        let config: AiConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AiError> {
        self.medium.validate()?;
        self.hard.validate()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
