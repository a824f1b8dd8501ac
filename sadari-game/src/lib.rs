//! Sadari Game Engine
//!
//! Platform-agnostic core logic for the sadari (ladder lottery) game.
//! This crate provides structure generation, deterministic path tracing, and
//! session bookkeeping without UI or platform-specific dependencies; a view
//! layer renders the rung grid and replays traced waypoints at whatever
//! cadence it likes.

pub mod config;
pub mod constants;
pub mod ladder;
pub mod seed;
pub mod session;
pub mod trace;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig, LadderRules};
pub use ladder::{LadderStructure, Outcome, StructureError, generate_structure};
pub use seed::{derive_stream_seed, seed_from_entropy, structure_rng};
pub use session::{GameSession, Participant, SessionError};
pub use trace::{PathTrace, TraceError, Waypoint, WaypointSeq, trace_path};
