//! Centralized tuning constants for the sadari game logic.
//!
//! These values define the deterministic shape of the ladder lottery.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_STRUCTURE_BUILT: &str = "log.ladder.structure-built";
pub(crate) const LOG_PLAYED_PREFIX: &str = "log.ladder.played.";
pub(crate) const LOG_LINE_WIN: &str = "log.ladder.line-win";
pub(crate) const LOG_LINE_LOSE: &str = "log.ladder.line-lose";
pub(crate) const LOG_ROSTER_RESIZED: &str = "log.session.roster-resized";
pub(crate) const LOG_SPLIT_CHANGED: &str = "log.session.split-changed";
pub(crate) const LOG_SESSION_RESET: &str = "log.session.reset";
pub(crate) const LOG_SESSION_RESEEDED: &str = "log.session.reseeded";

// Ladder tuning ------------------------------------------------------------
pub(crate) const DEFAULT_LEVELS: usize = 8;
pub(crate) const MIN_PARTICIPANTS: usize = 2;
pub(crate) const MAX_PARTICIPANTS: usize = 10;
pub(crate) const STARTING_PARTICIPANTS: usize = 4;
pub(crate) const STARTING_WIN_COUNT: usize = 1;
