//! In-memory character and recipe store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Recipe;
use crate::sheet::CharacterSheet;

/// Source of characters and recipes for the test composer.
pub trait CharacterStore {
    /// Find a character by id.
    fn lookup_character(&self, id: &str) -> Option<&CharacterSheet>;

    /// Find a recipe by name.
    ///
    /// Unknown names fall back to a simple test of the attribute with that name.
    fn lookup_recipe(&self, name: &str) -> Recipe;

    /// Character used when a target names no subject.
    fn default_character(&self) -> Option<&str> {
        None
    }
}

/// Characters and recipes, usually loaded from a config file.
///
/// Ids and recipe names are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Characters by id.
    #[serde(default)]
    pub chars: BTreeMap<String, CharacterSheet>,
    /// Recipes by name.
    #[serde(default)]
    pub recipes: BTreeMap<String, Recipe>,
    /// Character used for bare recipe targets.
    #[serde(default)]
    pub default_char: Option<String>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character.
    pub fn with_character(mut self, id: &str, sheet: CharacterSheet) -> Self {
        self.chars.insert(id.to_lowercase(), sheet);
        self
    }

    /// Add a recipe.
    pub fn with_recipe(mut self, name: &str, recipe: Recipe) -> Self {
        self.recipes.insert(name.to_lowercase(), recipe);
        self
    }

    /// Set the default character.
    pub fn with_default_char(mut self, id: &str) -> Self {
        self.default_char = Some(id.to_string());
        self
    }
}

/// Exact match first, then a case-insensitive scan.
fn find_ignore_case<'a, V>(map: &'a BTreeMap<String, V>, key: &str) -> Option<&'a V> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

impl CharacterStore for Roster {
    fn lookup_character(&self, id: &str) -> Option<&CharacterSheet> {
        find_ignore_case(&self.chars, id)
    }

    fn lookup_recipe(&self, name: &str) -> Recipe {
        find_ignore_case(&self.recipes, name)
            .cloned()
            .unwrap_or_else(|| Recipe::single(name))
    }

    fn default_character(&self) -> Option<&str> {
        self.default_char.as_deref()
    }
}
