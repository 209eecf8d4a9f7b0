//! Roll notation parsing.
//!
//! Grammar: `<pool>d<sides>[!]<cmp><threshold>`, e.g. `4d6>=5` or `7d6!>4`.
//!
//! - `pool` is a non-negative decimal count of dice.
//! - `!` makes the roll explode: every die showing the maximum face adds
//!   another die, recursively.
//! - `>` counts faces strictly above the typed threshold as hits.
//! - `>=` counts faces at or above the typed threshold as hits.
//!
//! Both comparators are normalised to an exclusive lower bound, so the
//! success evaluator only ever asks `face > bound`. A bound that no face can
//! beat (`>6`, `>=7`) is rejected.

use serde::{Deserialize, Serialize};

use super::Die;
use crate::error::{HrResult, RollError};

/// A fully parsed, executable dice roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSpec {
    pool_size: u32,
    die: Die,
    success_threshold: u32,
    explode_threshold: Option<u32>,
}

impl RollSpec {
    /// Build a spec directly.
    ///
    /// `success_threshold` is the exclusive lower bound for a hit and must
    /// be below the die's maximum face, so at least one face can hit.
    pub fn new(pool_size: u32, die: Die, success_threshold: u32, exploding: bool) -> HrResult<Self> {
        if success_threshold >= die.max_face() {
            return Err(RollError::MalformedSpec(format!(
                "{pool_size}{die}>{success_threshold}"
            )));
        }
        Ok(Self {
            pool_size,
            die,
            success_threshold,
            explode_threshold: exploding.then_some(die.max_face()),
        })
    }

    /// Parse a complete notation string such as `7d6!>=5`.
    pub fn parse(input: &str) -> HrResult<Self> {
        let malformed = || RollError::MalformedSpec(input.to_string());
        let trimmed = input.trim();
        let die_at = trimmed.find(['d', 'D']).ok_or_else(malformed)?;
        let (pool, pattern) = trimmed.split_at(die_at);
        let pool_size = parse_number(pool).ok_or_else(malformed)?;
        let (die, success_threshold, exploding) = parse_pattern(pattern).ok_or_else(malformed)?;
        Self::new(pool_size, die, success_threshold, exploding).map_err(|_| malformed())
    }

    /// Build a spec from a pool-less pattern (`d6>=5`) and a computed pool.
    ///
    /// Computed pools can legitimately drop to zero or below; those roll no
    /// dice rather than failing.
    pub fn with_pool(pattern: &str, pool: i32) -> HrResult<Self> {
        Self::parse(&format!("{}{}", pool.max(0), pattern.trim()))
    }

    /// Number of dice drawn before any explosion.
    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// The die rolled for every member of the pool.
    pub fn die(&self) -> Die {
        self.die
    }

    /// Faces strictly above this value are hits.
    pub fn success_threshold(&self) -> u32 {
        self.success_threshold
    }

    /// The face that triggers a reroll-and-add, if the roll explodes.
    pub fn explode_threshold(&self) -> Option<u32> {
        self.explode_threshold
    }

    /// Returns true if dice showing the maximum face explode.
    pub fn is_exploding(&self) -> bool {
        self.explode_threshold.is_some()
    }
}

impl std::fmt::Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bang = if self.is_exploding() { "!" } else { "" };
        write!(
            f,
            "{}{}{bang}>{}",
            self.pool_size, self.die, self.success_threshold
        )
    }
}

impl std::str::FromStr for RollSpec {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse `d<sides>[!]<cmp><threshold>` into die, exclusive bound, and explosion flag.
fn parse_pattern(pattern: &str) -> Option<(Die, u32, bool)> {
    let rest = pattern.strip_prefix(['d', 'D'])?;
    let sides_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (sides, rest) = rest.split_at(sides_len);
    let die = Die::from_sides(parse_number(sides)?)?;

    let (exploding, rest) = match rest.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    let bound = if let Some(digits) = rest.strip_prefix(">=") {
        parse_number(digits)?.checked_sub(1)?
    } else if let Some(digits) = rest.strip_prefix('>') {
        parse_number(digits)?
    } else {
        return None;
    };

    Some((die, bound, exploding))
}

/// Parse a plain run of ASCII digits. Signs and whitespace are rejected.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
