//! Opposed tests: a character's roll against a raw opposition pool.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CheckResult, TestComposer, add_modifiers};
use crate::dice::RollResult;
use crate::error::{HrResult, RollError};
use crate::resolution;
use crate::rules::CharacterStore;

/// Both sides of an opposed test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpposedResult {
    /// The initiating character's roll.
    pub attacker: CheckResult,
    /// The opposition's roll (plain pattern, no edge).
    pub defender: RollResult,
}

impl OpposedResult {
    /// Pair two finished rolls.
    pub fn new(attacker: CheckResult, defender: RollResult) -> Self {
        Self { attacker, defender }
    }

    /// Attacker hits minus defender hits.
    pub fn net_hits(&self) -> i32 {
        resolution::net_hits(&self.attacker.roll, &self.defender)
    }

    /// Ties go to the defender.
    pub fn attacker_prevails(&self) -> bool {
        self.net_hits() > 0
    }
}

impl<S: CharacterStore> TestComposer<S> {
    /// Roll the subject's test against `opposition_pool` plain dice.
    ///
    /// Edge only ever applies to the subject's roll.
    pub fn run_opposed_test<A: AsRef<str>, R: Rng>(
        &self,
        subject_id: &str,
        attribute_names: &[A],
        modifier: i32,
        opposition_pool: i32,
        edge: bool,
        rng: &mut R,
    ) -> HrResult<OpposedResult> {
        if opposition_pool < 0 {
            return Err(RollError::InvalidPool(opposition_pool));
        }
        let attacker = self.run_simple_test(subject_id, attribute_names, modifier, edge, rng)?;
        let defender = self.config().spec(opposition_pool, false)?.roll(rng);
        debug!(
            subject = subject_id,
            attacker_hits = attacker.hits(),
            defender_hits = defender.hits(),
            "opposed test"
        );
        Ok(OpposedResult::new(attacker, defender))
    }

    /// Opposed test for a `character.recipe` target.
    pub fn run_opposed_target<R: Rng>(
        &self,
        target: &str,
        modifier: i32,
        opposition_pool: i32,
        edge: bool,
        rng: &mut R,
    ) -> HrResult<OpposedResult> {
        let (target, recipe) = self.resolve_target(target)?;
        self.run_opposed_test(
            &target.subject,
            recipe.attrs.as_slice(),
            add_modifiers(modifier, recipe.mods)?,
            opposition_pool,
            edge,
            rng,
        )
    }
}
