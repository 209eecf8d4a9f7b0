//! Test composition: turning characters and recipes into rolls.
//!
//! A [`TestComposer`] owns the roll patterns and a [`CharacterStore`]. It
//! builds a fresh [`TestContext`] for every roll and runs one of three
//! protocols:
//!
//! - **Simple**: one roll of attributes + modifiers (+ edge).
//! - **Opposed**: a simple roll against a raw opposition pool.
//! - **Extended**: a resumable sequence of rounds with a shrinking pool,
//!   see [`ExtendedTest`].

pub mod extended;
pub mod opposed;

pub use extended::{ExtendedPhase, ExtendedTest, RoundInput, RoundOutcome};
pub use opposed::OpposedResult;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::RollResult;
use crate::error::{HrResult, RollError};
use crate::resolution::Outcome;
use crate::rules::{CharacterStore, Recipe, RecipeKind, RollConfig, TestTarget};
use crate::sheet::{CharacterSheet, EDGE_ATTRIBUTE};

/// Everything that went into one roll's pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestContext {
    /// The character being tested.
    pub subject_id: String,
    /// Attribute values summed into the pool, edge included when active.
    pub attribute_contributions: Vec<(String, i32)>,
    /// Sum of all modifiers.
    pub modifier_total: i32,
    /// Whether this roll uses edge (adds the edge rating and explodes sixes).
    pub edge_active: bool,
}

impl TestContext {
    /// Attributes plus modifiers. May be zero or negative. Saturates at the
    /// `i32` bounds; see [`checked_pool`](Self::checked_pool).
    pub fn pool(&self) -> i32 {
        self.attribute_contributions
            .iter()
            .fold(self.modifier_total, |acc, (_, v)| acc.saturating_add(*v))
    }

    /// Attributes plus modifiers, or [`RollError::PoolOverflow`] if the sum
    /// does not fit in an `i32`.
    pub fn checked_pool(&self) -> HrResult<i32> {
        self.attribute_contributions
            .iter()
            .try_fold(self.modifier_total, |acc, (_, v)| acc.checked_add(*v))
            .ok_or(RollError::PoolOverflow)
    }

    /// Roll this context with the given patterns.
    pub fn roll<R: Rng>(self, config: &RollConfig, rng: &mut R) -> HrResult<CheckResult> {
        let spec = config.spec(self.checked_pool()?, self.edge_active)?;
        let roll = spec.roll(rng);
        Ok(CheckResult {
            context: self,
            roll,
        })
    }

    fn with_edge(mut self, edge_rating: i32) -> Self {
        self.attribute_contributions
            .push((EDGE_ATTRIBUTE.to_string(), edge_rating));
        self.edge_active = true;
        self
    }
}

/// A roll together with the context it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Subject, attributes, and modifiers behind the roll.
    pub context: TestContext,
    /// The raw dice.
    pub roll: RollResult,
}

impl CheckResult {
    /// Number of hits.
    pub fn hits(&self) -> u32 {
        self.roll.hits()
    }

    /// Half or more of the dice show a 1.
    pub fn glitch(&self) -> bool {
        self.roll.glitch()
    }

    /// Glitch with no hits.
    pub fn critical_glitch(&self) -> bool {
        self.roll.critical_glitch()
    }

    /// Raw face values.
    pub fn die_values(&self) -> Vec<u32> {
        self.roll.die_values()
    }

    /// Number of dice rolled, explosions included.
    pub fn die_count(&self) -> usize {
        self.roll.count()
    }

    /// Pool size before explosions.
    pub fn pool_size(&self) -> u32 {
        self.roll.spec().pool_size()
    }

    /// Summary outcome.
    pub fn outcome(&self) -> Outcome {
        self.roll.outcome()
    }
}

/// What [`TestComposer::run_test`] produced.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// A single completed roll.
    Simple(CheckResult),
    /// An extended test waiting for its first round.
    Extended(ExtendedTest),
}

/// Builds and runs tests against a character store.
#[derive(Debug, Clone)]
pub struct TestComposer<S> {
    config: RollConfig,
    store: S,
}

impl<S: CharacterStore> TestComposer<S> {
    /// Create a composer with explicit roll patterns.
    pub fn new(config: RollConfig, store: S) -> Self {
        Self { config, store }
    }

    /// The roll patterns in use.
    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    /// The character store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build the context for one roll without rolling it.
    pub fn build_context<A: AsRef<str>>(
        &self,
        subject_id: &str,
        attribute_names: &[A],
        modifier: i32,
        edge: bool,
    ) -> HrResult<TestContext> {
        let sheet = self.character(subject_id)?;
        let context = base_context(subject_id, sheet, attribute_names, modifier)?;
        Ok(if edge {
            context.with_edge(sheet.edge())
        } else {
            context
        })
    }

    /// Roll attributes + modifier once. Edge adds the edge rating and explodes sixes.
    pub fn run_simple_test<A: AsRef<str>, R: Rng>(
        &self,
        subject_id: &str,
        attribute_names: &[A],
        modifier: i32,
        edge: bool,
        rng: &mut R,
    ) -> HrResult<CheckResult> {
        let context = self.build_context(subject_id, attribute_names, modifier, edge)?;
        debug!(subject = subject_id, pool = context.pool(), edge, "simple test");
        context.roll(&self.config, rng)
    }

    /// Resolve a `character.recipe` target to its subject and recipe.
    pub fn resolve_target(&self, target: &str) -> HrResult<(TestTarget, Recipe)> {
        let target = TestTarget::parse(target, self.store.default_character())?;
        let recipe = self.store.lookup_recipe(&target.recipe);
        Ok((target, recipe))
    }

    /// Run the recipe named by `target`.
    ///
    /// The recipe's own modifier is added to `modifier`. Extended recipes, or
    /// any recipe when `extended` is set, return a fresh [`ExtendedTest`];
    /// `edge` then has to be supplied per round instead.
    pub fn run_test<R: Rng>(
        &self,
        target: &str,
        modifier: i32,
        edge: bool,
        extended: bool,
        rng: &mut R,
    ) -> HrResult<CheckOutcome> {
        let (target, recipe) = self.resolve_target(target)?;
        let modifier = add_modifiers(modifier, recipe.mods)?;

        if extended || recipe.kind == RecipeKind::Extended {
            let test = self.start_extended_test(&target.subject, recipe.attrs.as_slice(), modifier)?;
            return Ok(CheckOutcome::Extended(test));
        }

        self.run_simple_test(&target.subject, recipe.attrs.as_slice(), modifier, edge, rng)
            .map(CheckOutcome::Simple)
    }

    fn character(&self, subject_id: &str) -> HrResult<&CharacterSheet> {
        self.store
            .lookup_character(subject_id)
            .ok_or_else(|| RollError::SubjectNotFound(subject_id.to_string()))
    }
}

/// Sum two modifiers without wrapping.
fn add_modifiers(a: i32, b: i32) -> HrResult<i32> {
    a.checked_add(b).ok_or(RollError::PoolOverflow)
}

/// Context for the named attributes and modifier, without edge.
fn base_context<A: AsRef<str>>(
    subject_id: &str,
    sheet: &CharacterSheet,
    attribute_names: &[A],
    modifier: i32,
) -> HrResult<TestContext> {
    let attribute_contributions = attribute_names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            sheet
                .attribute(name)
                .map(|value| (name.to_string(), value))
                .ok_or_else(|| RollError::UnknownAttribute {
                    subject: subject_id.to_string(),
                    attribute: name.to_string(),
                })
        })
        .collect::<HrResult<Vec<_>>>()?;

    Ok(TestContext {
        subject_id: subject_id.to_string(),
        attribute_contributions,
        modifier_total: modifier,
        edge_active: false,
    })
}
