//! Dice-pool test engine for count-successes tabletop systems.
//!
//! Parses compact roll notation (`7d6!>=5`), rolls pools of six-sided dice
//! with optional exploding sixes, counts hits and detects glitches, and
//! composes single rolls into simple, opposed, and extended tests.

pub mod check;
pub mod dice;
pub mod error;
pub mod resolution;
pub mod rules;
pub mod sheet;

pub use check::{
    CheckOutcome, CheckResult, ExtendedPhase, ExtendedTest, OpposedResult, RoundInput,
    RoundOutcome, TestComposer, TestContext,
};
pub use dice::{Die, DieResult, RollResult, RollSpec};
pub use error::{HrResult, RollError};
pub use resolution::Outcome;
pub use rules::{CharacterStore, Recipe, RecipeKind, RollConfig, Roster, TestTarget};
pub use sheet::CharacterSheet;
