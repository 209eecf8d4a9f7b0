//! Dice types, roll notation, and rolling.
//!
//! Pools are always rolled with a single die type. The notation grammar only
//! admits six-sided dice today, but the die size travels with every
//! [`RollSpec`] so other sizes can be enabled without touching the roller.

pub mod notation;
pub mod pool;
pub mod roll;

pub use notation::RollSpec;
pub use roll::{DieResult, RollResult};

use serde::{Deserialize, Serialize};

/// A die with a fixed number of faces, numbered `1..=sides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// The six-sided die used by every pool in this system.
    pub const D6: Self = Self { sides: 6 };

    /// Die sizes the notation parser accepts.
    pub const SUPPORTED: &[Die] = &[Self::D6];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        self.sides
    }

    /// The face that triggers a reroll-and-add on exploding rolls.
    pub fn max_face(self) -> u32 {
        self.sides
    }

    /// Look up a supported die by its side count.
    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::SUPPORTED.iter().copied().find(|d| d.sides == sides)
    }

    /// Parse a die from a string like "d6".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let sides = s.strip_prefix('d')?.parse::<u32>().ok()?;
        Self::from_sides(sides)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::D6
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides)
    }
}
