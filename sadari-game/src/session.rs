//! Caller-owned game session: configuration, roster, and the cached ladder
//! structure every participant races against.
//!
//! This is the explicit replacement for the original view component's
//! mutable state. The engine functions in [`crate::ladder`] and
//! [`crate::trace`] stay pure; the session owns caching identity, the
//! "has played" set, and the UI-range rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, GameConfig, LadderRules};
use crate::constants::{
    LOG_LINE_LOSE, LOG_LINE_WIN, LOG_PLAYED_PREFIX, LOG_ROSTER_RESIZED, LOG_SESSION_RESEEDED,
    LOG_SESSION_RESET, LOG_SPLIT_CHANGED, LOG_STRUCTURE_BUILT,
};
use crate::ladder::{LadderStructure, Outcome, generate_structure};
use crate::seed::structure_rng;
use crate::trace::{PathTrace, TraceError, trace_path};

/// One roster entry. `result` doubles as the played flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: usize,
    pub name: String,
    pub result: Option<Outcome>,
}

impl Participant {
    fn with_default_name(id: usize) -> Self {
        Self {
            id,
            name: default_name(id),
            result: None,
        }
    }

    #[must_use]
    pub const fn has_played(&self) -> bool {
        self.result.is_some()
    }
}

fn default_name(id: usize) -> String {
    format!("참가자{id}")
}

/// Session-level contract violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("participant count must be between {min} and {max} (got {got})")]
    ParticipantCountOutOfRange { min: usize, max: usize, got: usize },
    #[error("win count must be below the participant count {participants} (got {got})")]
    WinCountOutOfRange { participants: usize, got: usize },
    #[error("no participant at index {index} (roster holds {len})")]
    UnknownParticipant { index: usize, len: usize },
    #[error("participant {index} already played this round")]
    AlreadyPlayed { index: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// High-level session binding a validated configuration and seed to a roster
/// and a lazily built, cached [`LadderStructure`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    rules: LadderRules,
    config: GameConfig,
    seed: u64,
    round: u32,
    structure: Option<LadderStructure>,
    participants: Vec<Participant>,
    logs: Vec<String>,
}

impl GameSession {
    /// Construct a session from a validated configuration and user seed,
    /// under the statically embedded rules.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rules(LadderRules::load_from_static(), config, seed)
    }

    /// Construct a session with explicit rules.
    #[must_use]
    pub fn with_rules(rules: LadderRules, config: GameConfig, seed: u64) -> Self {
        let participants = (1..=config.participants())
            .map(Participant::with_default_name)
            .collect();
        Self {
            rules,
            config,
            seed,
            round: 0,
            structure: None,
            participants,
            logs: Vec::new(),
        }
    }

    /// Construct a session at the rules' starting configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the rules describe an invalid starting split.
    pub fn from_rules(rules: LadderRules, seed: u64) -> Result<Self, SessionError> {
        let config = rules.starting_config()?;
        Ok(Self::with_rules(rules, config, seed))
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn rules(&self) -> &LadderRules {
        &self.rules
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Round counter, bumped on every reset so a fresh ladder is drawn.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Structured log keys recorded by session operations.
    #[must_use]
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    #[must_use]
    pub fn all_played(&self) -> bool {
        self.participants.iter().all(Participant::has_played)
    }

    /// The cached structure, if one has been built for the current round.
    #[must_use]
    pub fn cached_structure(&self) -> Option<&LadderStructure> {
        self.structure.as_ref()
    }

    /// The shared structure for this round, built on first demand and reused
    /// by every subsequent trace.
    pub fn structure(&mut self) -> &LadderStructure {
        if self.structure.is_none() {
            self.logs.push(LOG_STRUCTURE_BUILT.to_string());
        }
        let config = self.config;
        let seed = self.seed;
        let round = self.round;
        self.structure.get_or_insert_with(|| {
            let mut rng = structure_rng(seed, round);
            generate_structure(&config, &mut rng)
        })
    }

    /// Resize the roster, clamping the win count the way the original
    /// controls did and discarding results and the cached structure.
    ///
    /// # Errors
    ///
    /// Returns an error when `count` falls outside the rules' bounds.
    pub fn set_participant_count(&mut self, count: usize) -> Result<(), SessionError> {
        if count < self.rules.min_participants || count > self.rules.max_participants {
            return Err(SessionError::ParticipantCountOutOfRange {
                min: self.rules.min_participants,
                max: self.rules.max_participants,
                got: count,
            });
        }
        let wins = self.config.win_count().min(count - 1);
        self.config = GameConfig::new(count, wins, count - wins, self.config.levels())?;

        let mut roster = Vec::with_capacity(count);
        for id in 1..=count {
            match self.participants.get(id - 1) {
                Some(existing) => roster.push(Participant {
                    id,
                    name: existing.name.clone(),
                    result: None,
                }),
                None => roster.push(Participant::with_default_name(id)),
            }
        }
        self.participants = roster;
        self.structure = None;
        self.logs.push(LOG_ROSTER_RESIZED.to_string());
        Ok(())
    }

    /// Change the win/lose split, discarding results and the cached
    /// structure.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 <= wins < participants`, the range the
    /// original controls allowed.
    pub fn set_win_count(&mut self, wins: usize) -> Result<(), SessionError> {
        let participants = self.config.participants();
        if wins >= participants {
            return Err(SessionError::WinCountOutOfRange { participants, got: wins });
        }
        self.config = GameConfig::new(
            participants,
            wins,
            participants - wins,
            self.config.levels(),
        )?;
        self.clear_results();
        self.structure = None;
        self.logs.push(LOG_SPLIT_CHANGED.to_string());
        Ok(())
    }

    /// Rename a participant; a blank name falls back to the default label.
    ///
    /// # Errors
    ///
    /// Returns an error when `index` names no roster entry.
    pub fn set_participant_name(&mut self, index: usize, name: &str) -> Result<(), SessionError> {
        let len = self.participants.len();
        let participant = self
            .participants
            .get_mut(index)
            .ok_or(SessionError::UnknownParticipant { index, len })?;
        let trimmed = name.trim();
        participant.name = if trimmed.is_empty() {
            default_name(participant.id)
        } else {
            trimmed.to_string()
        };
        Ok(())
    }

    /// Trace one not-yet-played participant down the shared structure,
    /// recording the result on the roster.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown index or a participant who already
    /// played this round.
    pub fn play(&mut self, index: usize) -> Result<PathTrace, SessionError> {
        let len = self.participants.len();
        let participant = self
            .participants
            .get(index)
            .ok_or(SessionError::UnknownParticipant { index, len })?;
        if participant.has_played() {
            return Err(SessionError::AlreadyPlayed { index });
        }

        let trace = trace_path(self.structure(), index)?;
        let outcome = trace.outcome();
        self.participants[index].result = Some(outcome);
        self.logs.push(format!("{LOG_PLAYED_PREFIX}{index}"));
        self.logs.push(
            if outcome.is_win() {
                LOG_LINE_WIN
            } else {
                LOG_LINE_LOSE
            }
            .to_string(),
        );
        Ok(trace)
    }

    /// Clear all results and discard the structure; the next demand draws a
    /// fresh ladder under the next round number.
    pub fn reset(&mut self) {
        self.clear_results();
        self.structure = None;
        self.round = self.round.saturating_add(1);
        self.logs.push(LOG_SESSION_RESET.to_string());
    }

    /// Deterministically reseed the session, restarting at round zero.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.round = 0;
        self.clear_results();
        self.structure = None;
        self.logs.push(LOG_SESSION_RESEEDED.to_string());
    }

    fn clear_results(&mut self) {
        for participant in &mut self.participants {
            participant.result = None;
        }
    }
}
