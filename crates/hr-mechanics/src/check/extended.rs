//! Extended tests: a resumable sequence of rolls with a shrinking pool.
//!
//! The test is an explicit state value. Each call to [`ExtendedTest::advance`]
//! takes that round's [`RoundInput`], rolls once, and hands back the result
//! together with the next state. Round *k* (1-indexed) rolls
//! `base_pool + extra_modifier - (k - 1)` dice, plus the edge rating when
//! edge is used for that round. The test terminates right after a round that
//! rolled exactly one die. Callers stop early simply by not advancing again.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CheckResult, TestComposer, TestContext, base_context};
use crate::error::{HrResult, RollError};
use crate::rules::{CharacterStore, RollConfig};

/// Where an extended test stands between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtendedPhase {
    /// Ready for the next round's input.
    AwaitingRoundInput,
    /// The pool shrank to a single die; no more rounds.
    Terminated,
}

/// Per-round adjustment supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInput {
    /// Extra modifier for this round only. May be negative.
    pub extra_modifier: i32,
    /// Use edge for this round only.
    pub edge: bool,
}

impl RoundInput {
    /// Create a round adjustment.
    pub fn new(extra_modifier: i32, edge: bool) -> Self {
        Self {
            extra_modifier,
            edge,
        }
    }
}

/// State of an extended test between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedTest {
    base: TestContext,
    edge_rating: i32,
    base_pool: i32,
    round: u32,
    cumulative_hits: u32,
    last_pool_size: Option<u32>,
    phase: ExtendedPhase,
}

/// One finished round of an extended test.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// The round's roll.
    pub result: CheckResult,
    /// State to advance next.
    pub state: ExtendedTest,
    /// True if no further rounds are offered.
    pub terminated: bool,
}

impl ExtendedTest {
    /// Start a test from a context without edge.
    pub fn start(base: TestContext, edge_rating: i32) -> Self {
        let base_pool = base.pool();
        Self {
            base,
            edge_rating,
            base_pool,
            round: 1,
            cumulative_hits: 0,
            last_pool_size: None,
            phase: ExtendedPhase::AwaitingRoundInput,
        }
    }

    /// Pool computed once at the start of the test.
    pub fn base_pool(&self) -> i32 {
        self.base_pool
    }

    /// The round the next call to [`advance`](Self::advance) will roll.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current phase.
    pub fn phase(&self) -> ExtendedPhase {
        self.phase
    }

    /// Returns true once a round has rolled a single die.
    pub fn is_terminated(&self) -> bool {
        self.phase == ExtendedPhase::Terminated
    }

    /// Sum of hits over all rounds so far.
    pub fn cumulative_hits(&self) -> u32 {
        self.cumulative_hits
    }

    /// Pool size of the most recent round, if any.
    pub fn last_pool_size(&self) -> Option<u32> {
        self.last_pool_size
    }

    /// The subject being tested.
    pub fn subject_id(&self) -> &str {
        &self.base.subject_id
    }

    /// Penalty for the next round: one die per round already rolled.
    pub fn penalty(&self) -> i32 {
        i32::try_from(self.round.saturating_sub(1)).unwrap_or(i32::MAX)
    }

    /// The context the next round would roll with this input.
    pub fn round_context(&self, input: RoundInput) -> HrResult<TestContext> {
        let mut context = self.base.clone();
        context.modifier_total = context
            .modifier_total
            .checked_add(input.extra_modifier)
            .and_then(|total| total.checked_sub(self.penalty()))
            .ok_or(RollError::PoolOverflow)?;
        Ok(if input.edge {
            context.with_edge(self.edge_rating)
        } else {
            context
        })
    }

    /// Roll the next round.
    pub fn advance<R: Rng>(
        mut self,
        input: RoundInput,
        config: &RollConfig,
        rng: &mut R,
    ) -> HrResult<RoundOutcome> {
        if self.is_terminated() {
            return Err(RollError::ExtendedTestFinished);
        }

        let context = self.round_context(input)?;
        debug!(
            subject = %self.base.subject_id,
            round = self.round,
            pool = context.pool(),
            edge = input.edge,
            "extended test round"
        );
        let result = context.roll(config, rng)?;

        self.cumulative_hits += result.hits();
        self.last_pool_size = Some(result.pool_size());
        self.round += 1;
        let terminated = result.die_count() == 1;
        if terminated {
            self.phase = ExtendedPhase::Terminated;
        }

        Ok(RoundOutcome {
            result,
            state: self,
            terminated,
        })
    }
}

impl<S: CharacterStore> TestComposer<S> {
    /// Start an extended test. No dice are rolled until the first advance.
    pub fn start_extended_test<A: AsRef<str>>(
        &self,
        subject_id: &str,
        attribute_names: &[A],
        modifier: i32,
    ) -> HrResult<ExtendedTest> {
        let sheet = self.character(subject_id)?;
        let base = base_context(subject_id, sheet, attribute_names, modifier)?;
        base.checked_pool()?;
        debug!(subject = subject_id, pool = base.pool(), "extended test started");
        Ok(ExtendedTest::start(base, sheet.edge()))
    }

    /// Roll the next round of `state` with this composer's patterns.
    pub fn advance_extended_test<R: Rng>(
        &self,
        state: ExtendedTest,
        extra_modifier: i32,
        edge: bool,
        rng: &mut R,
    ) -> HrResult<RoundOutcome> {
        state.advance(RoundInput::new(extra_modifier, edge), self.config(), rng)
    }
}
