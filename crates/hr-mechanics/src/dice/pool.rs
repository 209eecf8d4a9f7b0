//! Rolling a [`RollSpec`] into a [`RollResult`].

use rand::Rng;
use tracing::{debug, trace};

use super::notation::RollSpec;
use super::roll::{DieResult, RollResult};

impl RollSpec {
    /// Roll the pool using the caller's random source.
    ///
    /// On exploding specs every die showing the explosion face draws one more
    /// die, and those extra dice may explode in turn.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> RollResult {
        let sides = self.die().sides();
        let mut dice: Vec<DieResult> = (0..self.pool_size())
            .map(|_| DieResult::pooled(rng.random_range(1..=sides)))
            .collect();

        if let Some(explode_on) = self.explode_threshold() {
            let mut pending = dice.iter().filter(|d| d.value == explode_on).count();
            while pending > 0 {
                pending -= 1;
                let value = rng.random_range(1..=sides);
                trace!(value, "explosion die");
                if value == explode_on {
                    pending += 1;
                }
                dice.push(DieResult::exploded(value));
            }
        }

        let result = RollResult::new(*self, dice);
        debug!(
            spec = %self,
            dice = result.count(),
            hits = result.hits(),
            "rolled pool"
        );
        result
    }
}
