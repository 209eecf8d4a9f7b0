//! Test configuration: roll patterns, recipes, and test targets.
//!
//! A [`RollConfig`] carries the notation patterns every test is rolled with.
//! A [`Recipe`] names the attributes and fixed modifier behind a test, and a
//! [`Roster`] stores characters and recipes behind the [`CharacterStore`] seam.

pub mod roster;

pub use roster::{CharacterStore, Roster};

use serde::{Deserialize, Serialize};

use crate::dice::RollSpec;
use crate::error::{HrResult, RollError};

/// Pattern for ordinary tests: hits on 5 or 6.
pub const DEFAULT_ROLL: &str = "d6>=5";

/// Pattern for edge tests: hits on 5 or 6, sixes explode.
pub const DEFAULT_EDGE_ROLL: &str = "d6!>=5";

/// Notation patterns used when composing tests.
///
/// Patterns omit the pool size; the composer prefixes the computed pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollConfig {
    /// Pattern for tests without edge.
    #[serde(default = "default_roll")]
    pub roll: String,
    /// Pattern for tests with edge.
    #[serde(default = "default_edge_roll")]
    pub edge_roll: String,
}

fn default_roll() -> String {
    DEFAULT_ROLL.to_string()
}

fn default_edge_roll() -> String {
    DEFAULT_EDGE_ROLL.to_string()
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            roll: default_roll(),
            edge_roll: default_edge_roll(),
        }
    }
}

impl RollConfig {
    /// The pattern for a test with or without edge.
    pub fn pattern(&self, edge: bool) -> &str {
        if edge { &self.edge_roll } else { &self.roll }
    }

    /// Build the spec for a computed pool.
    pub fn spec(&self, pool: i32, edge: bool) -> HrResult<RollSpec> {
        RollSpec::with_pool(self.pattern(edge), pool)
    }

    /// Check that both patterns parse.
    pub fn validate(&self) -> HrResult<()> {
        self.spec(0, false)?;
        self.spec(0, true)?;
        Ok(())
    }
}

/// Whether a recipe is rolled once or as a sequence of rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeKind {
    /// A single roll.
    #[default]
    Simple,
    /// A multi-round test with a shrinking pool.
    Extended,
}

/// A named test: which attributes feed the pool and a fixed modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Simple or extended.
    #[serde(rename = "type", default)]
    pub kind: RecipeKind,
    /// Attributes summed into the pool, in order.
    #[serde(default)]
    pub attrs: Vec<String>,
    /// Fixed modifier added to every roll of this recipe.
    #[serde(default)]
    pub mods: i32,
}

impl Recipe {
    /// A simple test of a single attribute.
    pub fn single(attribute: &str) -> Self {
        Self {
            kind: RecipeKind::Simple,
            attrs: vec![attribute.to_string()],
            mods: 0,
        }
    }
}

/// A parsed `character.recipe` target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTarget {
    /// Character id.
    pub subject: String,
    /// Recipe or attribute name.
    pub recipe: String,
}

impl TestTarget {
    /// Parse `character.recipe`, or a bare `recipe` when a default character is set.
    ///
    /// Both halves are trimmed and lowercased.
    pub fn parse(input: &str, default_subject: Option<&str>) -> HrResult<Self> {
        let malformed = || RollError::MalformedTarget(input.to_string());
        let normalized = input.trim().to_lowercase();

        let (subject, recipe) = match normalized.split_once('.') {
            Some((subject, recipe)) => (subject.trim().to_string(), recipe.trim().to_string()),
            None => {
                let subject = default_subject.ok_or_else(malformed)?;
                (subject.trim().to_lowercase(), normalized.clone())
            }
        };

        if subject.is_empty() || recipe.is_empty() || recipe.contains('.') {
            return Err(malformed());
        }
        Ok(Self { subject, recipe })
    }
}
