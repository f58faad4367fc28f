//! CLI command implementations.

pub mod balance;
pub mod clean;
pub mod info;
pub mod io;
pub mod noise;
pub mod normalize;
pub mod year;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded generator when `seed` is set, entropy-seeded otherwise.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
