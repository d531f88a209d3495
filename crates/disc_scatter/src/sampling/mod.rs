//! Poisson-disc sampling within a disc.
//!
//! [`poisson_disc`] holds the active-list sampler, [`grid`] the uniform grid it
//! uses for neighbor rejection, and [`validate`] the brute-force checks used to
//! verify a finished distribution.
use mint::Vector2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::Result;

pub mod grid;
pub mod poisson_disc;
pub mod validate;

pub use grid::{DiscGrid, MAX_GRID_DIMENSION};
pub use poisson_disc::{DiscSample, PoissonDiscSampling, SamplingStats, DEFAULT_MAX_ATTEMPTS};
pub use validate::{is_valid_position, verify_distribution};

/// Generate a Poisson-disc point set inside a disc of `max_radius` centered on the origin.
///
/// Uses the default attempt budget and the full radius as the placement bound. The
/// random stream is a [`StdRng`] seeded from `seed`, so equal inputs always produce
/// the same sequence.
///
/// Returns [`crate::error::Error::InvalidArgument`] when `spread` or `max_radius`
/// is not a positive finite number, or when their ratio needs a grid wider than
/// [`MAX_GRID_DIMENSION`] cells.
pub fn generate_points(spread: f32, max_radius: f32, seed: u64) -> Result<Vec<Vector2<f32>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    PoissonDiscSampling::new(spread, max_radius).generate(&mut rng)
}

/// Generate a random float in the range [0, 1).
///
/// Only the upper 24 bits are used so the result is exactly representable and
/// never rounds up to 1.0.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Generate a random float in the half-open range [lo, hi).
#[inline]
pub(crate) fn rand_range(rng: &mut dyn RngCore, lo: f32, hi: f32) -> f32 {
    debug_assert!(lo < hi);
    (lo + rand01(rng) * (hi - lo)).min(hi.next_down())
}

/// Pick an index in `0..len` (multiply-shift on a 32-bit draw).
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0);
    let index = ((rng.next_u32() as u64 * len as u64) >> 32) as usize;
    index.min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u32::MAX };
        let result = rand01(&mut rng);
        assert!(result < 1.0);
        assert!(result > 0.999_999);
    }

    #[test]
    fn rand01_half_range_is_one_half() {
        let mut rng = FixedRng { value: 1 << 31 };
        assert_eq!(rand01(&mut rng), 0.5);
    }

    #[test]
    fn rand_range_excludes_upper_bound() {
        let mut rng = FixedRng { value: u32::MAX };
        let hi = std::f32::consts::TAU;
        let v = rand_range(&mut rng, 0.0, hi);
        assert!(v < hi);

        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand_range(&mut rng, 2.0, 4.0), 2.0);
    }

    #[test]
    fn rand_index_covers_full_range() {
        let mut low = FixedRng { value: 0 };
        let mut high = FixedRng { value: u32::MAX };
        assert_eq!(rand_index(&mut low, 7), 0);
        assert_eq!(rand_index(&mut high, 7), 6);
        assert_eq!(rand_index(&mut high, 1), 0);
    }

    #[test]
    fn rand_range_stays_inside_narrow_ranges() {
        let mut rng = FixedRng { value: u32::MAX };
        let lo = 1.0_f32;
        let hi = lo.next_up();
        assert_eq!(rand_range(&mut rng, lo, hi), lo);
    }

    #[test]
    fn generate_points_is_deterministic_per_seed() {
        let a = generate_points(1.0, 5.0, 42).expect("valid arguments");
        let b = generate_points(1.0, 5.0, 42).expect("valid arguments");
        assert!(!a.is_empty());
        assert_eq!(a, b);

        let c = generate_points(1.0, 5.0, 43).expect("valid arguments");
        assert_ne!(a, c);
    }

    #[test]
    fn generate_points_rejects_oversized_grid() {
        assert!(matches!(
            generate_points(1e-6, 1e6, 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn generate_points_rejects_non_positive_arguments() {
        assert!(matches!(
            generate_points(0.0, 5.0, 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_points(1.0, 0.0, 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_points(-1.0, 5.0, 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_points(f32::NAN, 5.0, 1),
            Err(Error::InvalidArgument(_))
        ));
    }
}
