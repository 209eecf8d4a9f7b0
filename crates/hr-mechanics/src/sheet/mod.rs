//! Character sheets: named integer attributes.
//!
//! Attribute names are matched case-insensitively, so `Hacking` on the
//! sheet satisfies a recipe asking for `hacking`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The attribute that fuels edge rolls.
pub const EDGE_ATTRIBUTE: &str = "edge";

/// A character's attribute scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterSheet {
    /// Attribute scores (e.g., strength: 4, hacking: 5).
    pub attributes: BTreeMap<String, i32>,
}

impl CharacterSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: &str, value: i32) -> Self {
        self.attributes.insert(name.to_lowercase(), value);
        self
    }

    /// Look up an attribute by name, ignoring case.
    pub fn attribute(&self, name: &str) -> Option<i32> {
        if let Some(&value) = self.attributes.get(name) {
            return Some(value);
        }
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, &value)| value)
    }

    /// The character's edge rating, zero if the sheet has none.
    pub fn edge(&self) -> i32 {
        self.attribute(EDGE_ATTRIBUTE).unwrap_or(0)
    }
}
