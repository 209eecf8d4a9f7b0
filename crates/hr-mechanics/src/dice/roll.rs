//! Dice roll results.

use serde::{Deserialize, Serialize};

use super::RollSpec;
use crate::error::{HrResult, RollError};
use crate::resolution::{self, Outcome};

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The face that came up (1 to the die's side count).
    pub value: u32,
    /// True if this die was added by an explosion rather than drawn for the pool.
    pub exploded: bool,
}

impl DieResult {
    /// A die drawn as part of the original pool.
    pub fn pooled(value: u32) -> Self {
        Self {
            value,
            exploded: false,
        }
    }

    /// A die added by an explosion.
    pub fn exploded(value: u32) -> Self {
        Self {
            value,
            exploded: true,
        }
    }
}

/// The outcome of executing a [`RollSpec`].
///
/// Dice are kept in insertion order: the original pool first, then every
/// explosion die in the order it was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    spec: RollSpec,
    dice: Vec<DieResult>,
}

impl RollResult {
    pub(crate) fn new(spec: RollSpec, dice: Vec<DieResult>) -> Self {
        Self { spec, dice }
    }

    /// Rebuild a result from recorded face values.
    ///
    /// The first `spec.pool_size()` values are the pool and the rest are
    /// explosion dice. Every face must fit the die, and there must be exactly
    /// one explosion die per exploding face seen before it.
    pub fn from_values(spec: RollSpec, values: &[u32]) -> HrResult<Self> {
        let impossible = || RollError::ImpossibleRoll {
            spec: spec.to_string(),
            values: values.to_vec(),
        };
        let pool = spec.pool_size() as usize;
        let max_face = spec.die().max_face();
        if values.len() < pool || values.iter().any(|v| !(1..=max_face).contains(v)) {
            return Err(impossible());
        }

        let mut owed = 0usize;
        let mut dice = Vec::with_capacity(values.len());
        for (i, &value) in values.iter().enumerate() {
            if i < pool {
                dice.push(DieResult::pooled(value));
            } else {
                owed = owed.checked_sub(1).ok_or_else(impossible)?;
                dice.push(DieResult::exploded(value));
            }
            if spec.explode_threshold() == Some(value) {
                owed += 1;
            }
        }
        if owed != 0 {
            return Err(impossible());
        }
        Ok(Self { spec, dice })
    }

    /// The spec this roll was produced from.
    pub fn spec(&self) -> &RollSpec {
        &self.spec
    }

    /// Individual die results.
    pub fn dice(&self) -> &[DieResult] {
        &self.dice
    }

    /// Raw face values in roll order.
    pub fn die_values(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.value).collect()
    }

    /// Number of dice rolled, explosions included.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Number of dice added by explosions.
    pub fn exploded_count(&self) -> usize {
        self.dice.iter().filter(|d| d.exploded).count()
    }

    /// Number of dice showing the given face.
    pub fn count_of(&self, face: u32) -> usize {
        self.dice.iter().filter(|d| d.value == face).count()
    }

    /// Dice whose face beats the spec's success threshold.
    pub fn hits(&self) -> u32 {
        resolution::hits(self)
    }

    /// At least half of the dice show a 1.
    pub fn glitch(&self) -> bool {
        resolution::glitch(self)
    }

    /// A glitch with no hits at all.
    pub fn critical_glitch(&self) -> bool {
        resolution::critical_glitch(self)
    }

    /// Summary outcome of this roll.
    pub fn outcome(&self) -> Outcome {
        resolution::evaluate(self)
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {} hits", values.join(", "), self.hits())
    }
}
