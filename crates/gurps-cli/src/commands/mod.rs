pub mod generate;
pub mod roll;
pub mod show;

use gurps_mechanics::RandomSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A seeded `StdRng` when a seed is given, the thread RNG otherwise.
fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}
