//! Loading `hitroll.yml`.
//!
//! The file holds the roll patterns plus the roster:
//!
//! ```yaml
//! roll: d6>=5
//! edge_roll: d6!>=5
//! default_char: cha1
//! chars:
//!   cha1: {strength: 4, hacking: 5, exploit: 5, edge: 3}
//! recipes:
//!   hack: {type: extended, attrs: [hacking, exploit], mods: 1}
//! ```

use std::path::Path;

use hr_mechanics::{RollConfig, Roster};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "hitroll.yml";

/// Everything a config file can set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitrollConfig {
    #[serde(flatten)]
    pub rolls: RollConfig,
    #[serde(flatten)]
    pub roster: Roster,
}

/// Load the config from `path`, or from `./hitroll.yml` when no path is given.
///
/// A missing default file yields an empty roster with default patterns; a
/// missing explicit file is an error.
pub fn load(path: Option<&Path>) -> Result<HitrollConfig, String> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                return Ok(HitrollConfig::default());
            }
            default
        }
    };

    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let config = parse(&raw).map_err(|e| format!("{}: {e}", path.display()))?;
    debug!(
        path = %path.display(),
        chars = config.roster.chars.len(),
        recipes = config.roster.recipes.len(),
        "loaded config"
    );
    Ok(config)
}

/// Parse and validate config text.
pub fn parse(raw: &str) -> Result<HitrollConfig, String> {
    if raw.trim().is_empty() {
        return Ok(HitrollConfig::default());
    }
    let config: HitrollConfig = serde_yaml::from_str(raw).map_err(|e| e.to_string())?;
    config.rolls.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
