//! Deterministic descent tracing over an immutable ladder structure.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::ladder::{LadderStructure, Outcome};

/// Inline waypoint capacity covering the default eight-level ladder
/// (one start, one drop per level, at most one hop per level).
pub type WaypointSeq = SmallVec<[Waypoint; 17]>;

/// One `(level, position)` point on a traced descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub level: usize,
    pub position: usize,
}

impl Waypoint {
    #[must_use]
    pub const fn new(level: usize, position: usize) -> Self {
        Self { level, position }
    }
}

/// Full descent of one starting line: the ordered waypoints from
/// `(0, start)` to `(levels, final)` plus the outcome reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTrace {
    waypoints: WaypointSeq,
    final_position: usize,
    outcome: Outcome,
}

impl PathTrace {
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[must_use]
    pub fn start_position(&self) -> usize {
        self.waypoints
            .first()
            .map_or(self.final_position, |w| w.position)
    }

    #[must_use]
    pub const fn final_position(&self) -> usize {
        self.final_position
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("start position {start} is out of range for {lines} lines")]
    StartOutOfRange { start: usize, lines: usize },
}

/// Replay the deterministic descent of `start` through `structure`.
///
/// At each level the line first checks the rung to its right, then the rung
/// to its left; a matching rung produces a horizontal-hop waypoint before
/// the vertical drop to the next level. All randomness lives in structure
/// generation, so a fixed `(structure, start)` pair always yields the same
/// trace, and tracing never mutates the structure.
///
/// # Errors
///
/// Returns [`TraceError::StartOutOfRange`] when `start` does not name one of
/// the structure's vertical lines. Rung content itself can never fail a
/// trace; a level without rungs is just a straight drop.
pub fn trace_path(structure: &LadderStructure, start: usize) -> Result<PathTrace, TraceError> {
    let lines = structure.participants();
    if start >= lines {
        return Err(TraceError::StartOutOfRange { start, lines });
    }

    let mut position = start;
    let mut waypoints = WaypointSeq::new();
    waypoints.push(Waypoint::new(0, position));

    for level in 0..structure.levels() {
        let target = if position + 1 < lines && structure.has_rung(level, position) {
            position + 1
        } else if position > 0 && structure.has_rung(level, position - 1) {
            position - 1
        } else {
            position
        };
        if target != position {
            waypoints.push(Waypoint::new(level, target));
        }
        waypoints.push(Waypoint::new(level + 1, target));
        position = target;
    }

    let outcome = structure.outcomes()[position];
    Ok(PathTrace {
        waypoints,
        final_position: position,
        outcome,
    })
}
