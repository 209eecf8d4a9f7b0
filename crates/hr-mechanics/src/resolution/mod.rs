//! Success evaluation for count-successes pools.
//!
//! - **Hits**: dice whose face is strictly above the spec's threshold.
//! - **Glitch**: at least half the dice show a 1 (`2 * ones >= dice`).
//!   An empty roll never glitches.
//! - **Critical glitch**: a glitch with zero hits.

use serde::{Deserialize, Serialize};

use crate::dice::RollResult;

/// The face that counts toward a glitch.
const GLITCH_FACE: u32 = 1;

/// Summary of a single roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one hit and no glitch.
    Success {
        /// Number of hits.
        hits: u32,
    },
    /// No hits and no glitch.
    Failure,
    /// At least one hit, but half the dice or more came up 1.
    Glitch {
        /// Number of hits.
        hits: u32,
    },
    /// No hits and half the dice or more came up 1.
    CriticalGlitch,
}

impl Outcome {
    /// Hits scored, zero for failures.
    pub fn hits(self) -> u32 {
        match self {
            Self::Success { hits } | Self::Glitch { hits } => hits,
            Self::Failure | Self::CriticalGlitch => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { hits } => write!(f, "Success ({hits} hits)"),
            Self::Failure => write!(f, "Failure"),
            Self::Glitch { hits } => write!(f, "Glitch ({hits} hits)"),
            Self::CriticalGlitch => write!(f, "Critical Glitch"),
        }
    }
}

/// Count the dice that beat the roll's success threshold.
pub fn hits(roll: &RollResult) -> u32 {
    let threshold = roll.spec().success_threshold();
    roll.dice().iter().filter(|d| d.value > threshold).count() as u32
}

/// Returns true if at least half of the dice show a 1.
pub fn glitch(roll: &RollResult) -> bool {
    let total = roll.count();
    total > 0 && roll.count_of(GLITCH_FACE) * 2 >= total
}

/// Returns true for a glitch with no hits.
pub fn critical_glitch(roll: &RollResult) -> bool {
    glitch(roll) && hits(roll) == 0
}

/// Hits of the first roll minus hits of the second.
///
/// Zero or below means the second roll prevails.
pub fn net_hits(attacker: &RollResult, defender: &RollResult) -> i32 {
    hits(attacker) as i32 - hits(defender) as i32
}

/// Classify a roll.
pub fn evaluate(roll: &RollResult) -> Outcome {
    let hits = hits(roll);
    match (glitch(roll), hits) {
        (true, 0) => Outcome::CriticalGlitch,
        (true, hits) => Outcome::Glitch { hits },
        (false, 0) => Outcome::Failure,
        (false, hits) => Outcome::Success { hits },
    }
}
