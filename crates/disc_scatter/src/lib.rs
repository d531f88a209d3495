#![forbid(unsafe_code)]
//! disc_scatter: Poisson-disc (blue-noise) point sampling within a disc.
//!
//! Modules:
//! - sampling: the active-list sampler, its spatial grid, and validation helpers
//! - seed: reproducible seed derivation for generating many independent discs
//!
//! Quick start: [`sampling::generate_points`] returns a point set for a spread,
//! a disc radius and a seed.
pub mod error;
pub mod sampling;
pub mod seed;

/// Convenient re-exports for common types. Import with `use disc_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::grid::{DiscGrid, MAX_GRID_DIMENSION};
    pub use crate::sampling::poisson_disc::{
        DiscSample, PoissonDiscSampling, SamplingStats, DEFAULT_MAX_ATTEMPTS,
    };
    pub use crate::sampling::validate::{is_valid_position, verify_distribution};
    pub use crate::sampling::generate_points;
    pub use crate::seed::seed_for_disc;
}
