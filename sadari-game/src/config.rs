//! Game configuration and session rules for the ladder lottery.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_LEVELS, MAX_PARTICIPANTS, MIN_PARTICIPANTS, STARTING_PARTICIPANTS, STARTING_WIN_COUNT,
};

const DEFAULT_RULES_DATA: &str = include_str!("../assets/rules.json");

/// Contract violations raised while building a [`GameConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("participant count must be at least {min} (got {got})")]
    TooFewParticipants { min: usize, got: usize },
    #[error("win count {wins} plus lose count {loses} must equal participant count {participants}")]
    InconsistentSplit {
        participants: usize,
        wins: usize,
        loses: usize,
    },
    #[error("level count must be at least 1")]
    NoLevels,
}

/// Validated engine configuration for one ladder structure.
///
/// Construction is the only validation point; every accessor afterwards is
/// infallible. The UI bounds (participants 2..=10) live in [`LadderRules`]
/// and are enforced by the session layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    participants: usize,
    win_count: usize,
    levels: usize,
}

impl GameConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer than two participants are requested, when
    /// the win/lose split does not sum to the participant count, or when the
    /// level count is zero.
    pub fn new(
        participants: usize,
        win_count: usize,
        lose_count: usize,
        levels: usize,
    ) -> Result<Self, ConfigError> {
        if participants < MIN_PARTICIPANTS {
            return Err(ConfigError::TooFewParticipants {
                min: MIN_PARTICIPANTS,
                got: participants,
            });
        }
        if win_count + lose_count != participants {
            return Err(ConfigError::InconsistentSplit {
                participants,
                wins: win_count,
                loses: lose_count,
            });
        }
        if levels == 0 {
            return Err(ConfigError::NoLevels);
        }
        Ok(Self {
            participants,
            win_count,
            levels,
        })
    }

    /// Build a configuration with the default level count.
    ///
    /// # Errors
    ///
    /// Same contract as [`GameConfig::new`].
    pub fn with_default_levels(
        participants: usize,
        win_count: usize,
        lose_count: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(participants, win_count, lose_count, DEFAULT_LEVELS)
    }

    #[must_use]
    pub const fn participants(&self) -> usize {
        self.participants
    }

    #[must_use]
    pub const fn win_count(&self) -> usize {
        self.win_count
    }

    #[must_use]
    pub const fn lose_count(&self) -> usize {
        self.participants - self.win_count
    }

    #[must_use]
    pub const fn levels(&self) -> usize {
        self.levels
    }

    /// Number of rung slots per level (one between each pair of adjacent lines).
    #[must_use]
    pub const fn rung_slots(&self) -> usize {
        self.participants - 1
    }
}

/// Session-level rules the original web view kept as control-bound literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderRules {
    pub levels: usize,
    pub min_participants: usize,
    pub max_participants: usize,
    pub starting_participants: usize,
    pub starting_win_count: usize,
}

impl Default for LadderRules {
    fn default() -> Self {
        serde_json::from_str(DEFAULT_RULES_DATA).unwrap_or(LadderRules {
            levels: DEFAULT_LEVELS,
            min_participants: MIN_PARTICIPANTS,
            max_participants: MAX_PARTICIPANTS,
            starting_participants: STARTING_PARTICIPANTS,
            starting_win_count: STARTING_WIN_COUNT,
        })
    }
}

impl LadderRules {
    #[must_use]
    pub fn load_from_static() -> Self {
        LadderRules::default()
    }

    /// Starting configuration described by these rules.
    ///
    /// # Errors
    ///
    /// Returns an error when the rules describe an invalid starting split.
    pub fn starting_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(
            self.starting_participants,
            self.starting_win_count,
            self.starting_participants
                .saturating_sub(self.starting_win_count),
            self.levels,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_exposes_derived_counts() {
        let cfg = GameConfig::new(4, 1, 3, 8).unwrap();
        assert_eq!(cfg.participants(), 4);
        assert_eq!(cfg.win_count(), 1);
        assert_eq!(cfg.lose_count(), 3);
        assert_eq!(cfg.levels(), 8);
        assert_eq!(cfg.rung_slots(), 3);
    }

    #[test]
    fn rejects_too_few_participants() {
        let err = GameConfig::new(1, 0, 1, 8).unwrap_err();
        assert_eq!(err, ConfigError::TooFewParticipants { min: 2, got: 1 });
    }

    #[test]
    fn rejects_inconsistent_split() {
        let err = GameConfig::new(4, 2, 3, 8).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InconsistentSplit {
                participants: 4,
                wins: 2,
                loses: 3,
            }
        );
    }

    #[test]
    fn rejects_zero_levels() {
        assert_eq!(GameConfig::new(4, 1, 3, 0).unwrap_err(), ConfigError::NoLevels);
    }

    #[test]
    fn all_win_split_is_valid() {
        let cfg = GameConfig::new(3, 3, 0, 1).unwrap();
        assert_eq!(cfg.lose_count(), 0);
    }

    #[test]
    fn default_rules_match_embedded_asset() {
        let rules = LadderRules::load_from_static();
        assert_eq!(rules.levels, 8);
        assert_eq!(rules.min_participants, 2);
        assert_eq!(rules.max_participants, 10);
        assert_eq!(rules.starting_participants, 4);
        assert_eq!(rules.starting_win_count, 1);
    }

    #[test]
    fn starting_config_round_trips_rules() {
        let cfg = LadderRules::default().starting_config().unwrap();
        assert_eq!(cfg.participants(), 4);
        assert_eq!(cfg.win_count(), 1);
        assert_eq!(cfg.levels(), 8);
    }
}
