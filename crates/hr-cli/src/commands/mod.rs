pub mod notation;
pub mod roll;

use std::path::Path;

use hr_mechanics::{Roster, TestComposer};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config;

/// Seeded RNG when a seed is given, otherwise seeded from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Load the config file and build a composer from it.
fn load_composer(config_path: Option<&Path>) -> Result<TestComposer<Roster>, String> {
    let config = config::load(config_path)?;
    Ok(TestComposer::new(config.rolls, config.roster))
}
