//! Seed derivation for generating many independent discs.
//!
//! A run owns its grid and active set, so discs can be sampled in parallel as long
//! as each one gets its own generator. [`seed_for_disc`] derives those seeds from a
//! single base seed so the whole batch stays reproducible.

/// Derive a stable seed for disc `index` from `base_seed`.
pub fn seed_for_disc(base_seed: u64, index: u64) -> u64 {
    let mixed = base_seed ^ index.wrapping_mul(0x9E3779B97F4A7C15);
    mix_u64(mixed)
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}
