//! Ladder structure generation: randomized rung layout plus shuffled outcomes.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GameConfig;

/// Terminal result assigned to one vertical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }

    /// Display label used by the original web view.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "당첨",
            Self::Lose => "꽝",
        }
    }
}

/// Shape violations raised when assembling a structure from raw parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("structure must have at least one level")]
    NoLevels,
    #[error("structure needs at least 2 lines (got {got})")]
    TooFewLines { got: usize },
    #[error("level {level} has {got} rung slots (expected {expected})")]
    BadLevelWidth {
        level: usize,
        expected: usize,
        got: usize,
    },
    #[error("level {level} has touching rungs at slot {slot} and its right neighbor")]
    AdjacentRungs { level: usize, slot: usize },
}

/// Immutable rung layout plus shuffled outcome assignment for one game
/// configuration. Shared by every descent traced against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderStructure {
    rungs: Vec<Vec<bool>>,
    outcomes: Vec<Outcome>,
}

impl LadderStructure {
    /// Assemble a structure from an explicit rung layout and outcome list,
    /// checking the shape and the no-adjacent-rungs invariant.
    ///
    /// # Errors
    ///
    /// Returns an error when the layout is empty, a level's slot count does
    /// not match the outcome count, or two rungs touch within one level.
    pub fn from_parts(
        rungs: Vec<Vec<bool>>,
        outcomes: Vec<Outcome>,
    ) -> Result<Self, StructureError> {
        if rungs.is_empty() {
            return Err(StructureError::NoLevels);
        }
        if outcomes.len() < 2 {
            return Err(StructureError::TooFewLines {
                got: outcomes.len(),
            });
        }
        let expected = outcomes.len() - 1;
        for (level, row) in rungs.iter().enumerate() {
            if row.len() != expected {
                return Err(StructureError::BadLevelWidth {
                    level,
                    expected,
                    got: row.len(),
                });
            }
            for slot in 0..row.len().saturating_sub(1) {
                if row[slot] && row[slot + 1] {
                    return Err(StructureError::AdjacentRungs { level, slot });
                }
            }
        }
        Ok(Self { rungs, outcomes })
    }

    /// Number of vertical lines (participants).
    #[must_use]
    pub fn participants(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn levels(&self) -> usize {
        self.rungs.len()
    }

    /// Whether a rung connects lines `slot` and `slot + 1` at `level`.
    /// Out-of-range coordinates read as "no rung".
    #[must_use]
    pub fn has_rung(&self, level: usize, slot: usize) -> bool {
        self.rungs
            .get(level)
            .and_then(|row| row.get(slot))
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn rungs(&self) -> &[Vec<bool>] {
        &self.rungs
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn outcome(&self, line: usize) -> Option<Outcome> {
        self.outcomes.get(line).copied()
    }
}

/// Build a randomized structure for `cfg`, drawing every random choice from
/// the single `rng` instance.
///
/// Each level holds at most one rung, chosen uniformly from the slots the
/// previous level leaves open: a slot is excluded when the level above has a
/// rung at the same index or at the index one to its left, so a line never
/// chains through two rungs across adjacent levels. A level whose slots are
/// all blocked stays empty.
///
/// Outcomes are laid out as `win_count` wins followed by the loses, then
/// Fisher-Yates shuffled in place.
pub fn generate_structure(cfg: &GameConfig, rng: &mut impl Rng) -> LadderStructure {
    let slots = cfg.rung_slots();
    let mut rungs: Vec<Vec<bool>> = Vec::with_capacity(cfg.levels());
    for _ in 0..cfg.levels() {
        let mut row = vec![false; slots];
        let open: Vec<usize> = (0..slots)
            .filter(|&slot| !blocked_by_previous(rungs.last(), slot))
            .collect();
        if let Some(&slot) = open.as_slice().choose(rng) {
            row[slot] = true;
        }
        rungs.push(row);
    }

    let mut outcomes = Vec::with_capacity(cfg.participants());
    outcomes.extend(std::iter::repeat(Outcome::Win).take(cfg.win_count()));
    outcomes.extend(std::iter::repeat(Outcome::Lose).take(cfg.lose_count()));
    outcomes.shuffle(rng);

    LadderStructure { rungs, outcomes }
}

fn blocked_by_previous(previous: Option<&Vec<bool>>, slot: usize) -> bool {
    previous.is_some_and(|row| row[slot] || (slot > 0 && row[slot - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn config(participants: usize, wins: usize, levels: usize) -> GameConfig {
        GameConfig::new(participants, wins, participants - wins, levels).unwrap()
    }

    #[test]
    fn outcome_labels_match_original_view() {
        assert_eq!(Outcome::Win.label(), "당첨");
        assert_eq!(Outcome::Lose.label(), "꽝");
        assert!(Outcome::Win.is_win());
        assert!(!Outcome::Lose.is_win());
    }

    #[test]
    fn generated_structure_matches_config_shape() {
        let cfg = config(6, 2, 8);
        let mut rng = SmallRng::seed_from_u64(11);
        let structure = generate_structure(&cfg, &mut rng);
        assert_eq!(structure.participants(), 6);
        assert_eq!(structure.levels(), 8);
        assert!(structure.rungs().iter().all(|row| row.len() == 5));
    }

    #[test]
    fn each_level_holds_at_most_one_rung() {
        let cfg = config(8, 3, 12);
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let structure = generate_structure(&cfg, &mut rng);
            for row in structure.rungs() {
                assert!(row.iter().filter(|&&set| set).count() <= 1);
            }
        }
    }

    #[test]
    fn previous_level_blocks_same_and_left_adjacent_slots() {
        let cfg = config(5, 1, 10);
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let structure = generate_structure(&cfg, &mut rng);
            for level in 1..structure.levels() {
                for slot in 0..cfg.rung_slots() {
                    if structure.has_rung(level, slot) {
                        assert!(
                            !structure.has_rung(level - 1, slot),
                            "seed {seed}: slot {slot} reused at level {level}"
                        );
                        if slot > 0 {
                            assert!(
                                !structure.has_rung(level - 1, slot - 1),
                                "seed {seed}: left-adjacent reuse at level {level}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn outcome_multiset_survives_shuffle() {
        let cfg = config(7, 3, 8);
        for seed in 0..30 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let structure = generate_structure(&cfg, &mut rng);
            let wins = structure.outcomes().iter().filter(|o| o.is_win()).count();
            assert_eq!(wins, 3);
            assert_eq!(structure.outcomes().len(), 7);
        }
    }

    #[test]
    fn from_parts_accepts_valid_layout() {
        let structure = LadderStructure::from_parts(
            vec![vec![false, true, false]],
            vec![Outcome::Lose, Outcome::Lose, Outcome::Win, Outcome::Lose],
        )
        .unwrap();
        assert!(structure.has_rung(0, 1));
        assert!(!structure.has_rung(0, 0));
        assert!(!structure.has_rung(5, 0));
        assert_eq!(structure.outcome(2), Some(Outcome::Win));
        assert_eq!(structure.outcome(9), None);
    }

    #[test]
    fn from_parts_rejects_adjacent_rungs() {
        let err = LadderStructure::from_parts(
            vec![vec![true, true, false]],
            vec![Outcome::Win, Outcome::Lose, Outcome::Lose, Outcome::Lose],
        )
        .unwrap_err();
        assert_eq!(err, StructureError::AdjacentRungs { level: 0, slot: 0 });
    }

    #[test]
    fn from_parts_rejects_bad_shapes() {
        assert_eq!(
            LadderStructure::from_parts(vec![], vec![Outcome::Win, Outcome::Lose]).unwrap_err(),
            StructureError::NoLevels
        );
        assert_eq!(
            LadderStructure::from_parts(vec![vec![]], vec![Outcome::Win]).unwrap_err(),
            StructureError::TooFewLines { got: 1 }
        );
        assert_eq!(
            LadderStructure::from_parts(
                vec![vec![false]],
                vec![Outcome::Win, Outcome::Lose, Outcome::Lose]
            )
            .unwrap_err(),
            StructureError::BadLevelWidth {
                level: 0,
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn generation_is_seed_stable() {
        let cfg = config(5, 2, 8);
        let mut one = SmallRng::seed_from_u64(99);
        let mut two = SmallRng::seed_from_u64(99);
        assert_eq!(
            generate_structure(&cfg, &mut one),
            generate_structure(&cfg, &mut two)
        );
    }
}
