use std::collections::BTreeSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use sha2::{Digest, Sha256};

/// Derive a reproducible `StdRng` from an arbitrary string seed.
pub fn seeded_rng(seed: &str) -> StdRng {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    let result = hasher.finalize();
    let seed = result.into();
    StdRng::from_seed(seed)
}
/// `count` distinct keys drawn from `0..bound`, in draw order.
///
/// # Panics
/// Panics if `count > bound`, since the keys could never be distinct.
pub fn gen_unique_keys(rng: &mut StdRng, count: usize, bound: i64) -> Vec<i64> {
    assert!(count as u64 <= bound.max(0) as u64, "not enough keys below {bound}");
    let mut seen = BTreeSet::new();
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key = rng.gen_range(0..bound);
        if seen.insert(key) {
            keys.push(key);
        }
    }
    keys
}
