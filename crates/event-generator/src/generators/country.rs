//! Country field generator.

use event_core::Country;
use rand::Rng;

/// Pick one of the fixed country codes uniformly.
pub fn generate_country<R: Rng>(rng: &mut R) -> Country {
    Country::ALL[rng.gen_range(0..Country::ALL.len())]
}
