//! Session configuration and elimination thresholds.
//!
//! The thresholds are fixed rules of the format, not negotiated at runtime.
//! Only the starting life total and the feedback decay window are tunable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Starting life total for a commander game.
pub const DEFAULT_STARTING_LIFE: i64 = 40;

/// Poison counters at which a player is eliminated.
pub const POISON_LIMIT: i64 = 10;

/// Commander damage from a single opponent at which a player is eliminated.
pub const COMMANDER_DAMAGE_LIMIT: i64 = 21;

/// How long a "+N" life-change indicator stays visible.
pub const DEFAULT_FEEDBACK_WINDOW_MS: u64 = 500;

/// Life-counter session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Life every player starts with (default: 40).
    pub starting_life: i64,

    /// Decay window for transient life-change feedback, in milliseconds
    /// (default: 500).
    pub feedback_window_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_life: DEFAULT_STARTING_LIFE,
            feedback_window_ms: DEFAULT_FEEDBACK_WINDOW_MS,
        }
    }
}

impl SessionConfig {
    /// Use a custom starting life total.
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Use a custom feedback decay window.
    pub fn with_feedback_window_ms(mut self, ms: u64) -> Self {
        self.feedback_window_ms = ms;
        self
    }

    #[must_use]
    pub fn feedback_window(&self) -> Duration {
        Duration::from_millis(self.feedback_window_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.starting_life, 40);
        assert_eq!(config.feedback_window(), Duration::from_millis(500));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_starting_life(20)
            .with_feedback_window_ms(1_000);

        assert_eq!(config.starting_life, 20);
        assert_eq!(config.feedback_window_ms, 1_000);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_starting_life(30);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
