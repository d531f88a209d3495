//! Poisson-disc sampling within a disc.
use std::f32::consts::TAU;

use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sampling::grid::{DiscGrid, MAX_GRID_DIMENSION};
use crate::sampling::{rand01, rand_index, rand_range};

/// Candidate placements tried around an active point per round.
pub const DEFAULT_MAX_ATTEMPTS: usize = 30;

/// Poisson-disc sampling configuration for a disc centered on the origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoissonDiscSampling {
    /// Minimum distance between two accepted points.
    pub spread: f32,
    /// Radius of the disc; the acceleration grid covers its bounding square.
    pub max_radius: f32,
    /// Radius candidates are tested against. `None` uses `max_radius`.
    pub effective_radius: Option<f32>,
    /// Candidate placements tried per round. Higher values pack more densely at higher cost.
    pub max_attempts: usize,
    /// Also accept the initial point into the output.
    pub include_seed: bool,
}

/// Counters collected during one sampling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingStats {
    /// Rounds run, one per active-point pick.
    pub rounds: usize,
    /// Candidates generated.
    pub attempts: usize,
    /// Candidates rejected for lying outside the effective radius.
    pub rejected_outside: usize,
    /// Candidates rejected for lying closer than `spread` to an accepted point.
    pub rejected_too_close: usize,
    /// Points accepted into the output.
    pub accepted: usize,
    /// Active points removed after a round without any accepted candidate.
    pub evicted: usize,
}

/// Output of [`PoissonDiscSampling::generate_with_stats`].
#[derive(Debug, Clone, Default)]
pub struct DiscSample {
    /// Accepted points in acceptance order.
    pub points: Vec<Vector2<f32>>,
    /// Counters for the run that produced `points`.
    pub stats: SamplingStats,
}

impl PoissonDiscSampling {
    /// Create a sampler with the default attempt budget and the full radius as bound.
    pub fn new(spread: f32, max_radius: f32) -> Self {
        Self {
            spread,
            max_radius,
            effective_radius: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            include_seed: false,
        }
    }

    /// Sets the attempt budget per round.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the radius bound candidates are tested against.
    pub fn with_effective_radius(mut self, effective_radius: f32) -> Self {
        self.effective_radius = Some(effective_radius);
        self
    }

    /// Sets whether the initial point is part of the output.
    pub fn with_include_seed(mut self, include_seed: bool) -> Self {
        self.include_seed = include_seed;
        self
    }

    /// Radius bound in effect for this configuration.
    pub fn bound(&self) -> f32 {
        self.effective_radius.unwrap_or(self.max_radius)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.spread.is_finite() || self.spread <= 0.0 {
            return Err(Error::invalid(format!(
                "spread must be a finite value > 0, got {}",
                self.spread
            )));
        }
        if !self.max_radius.is_finite() || self.max_radius <= 0.0 {
            return Err(Error::invalid(format!(
                "max_radius must be a finite value > 0, got {}",
                self.max_radius
            )));
        }
        if let Some(bound) = self.effective_radius {
            if !bound.is_finite() || bound <= 0.0 || bound > self.max_radius {
                return Err(Error::invalid(format!(
                    "effective_radius must be in (0, {}], got {}",
                    self.max_radius, bound
                )));
            }
        }
        if self.max_attempts == 0 {
            return Err(Error::invalid("max_attempts must be >= 1"));
        }
        if DiscGrid::dimension_for(self.max_radius, self.spread).is_none() {
            return Err(Error::invalid(format!(
                "max_radius {} is too large for spread {}: the grid would exceed {} cells per axis",
                self.max_radius, self.spread, MAX_GRID_DIMENSION
            )));
        }

        Ok(())
    }

    /// Generate the point set, drawing every random value from `rng`.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<Vector2<f32>>> {
        Ok(self.generate_with_stats(rng)?.points)
    }

    /// Generate the point set together with the run's counters.
    pub fn generate_with_stats(&self, rng: &mut dyn RngCore) -> Result<DiscSample> {
        self.validate()?;

        let bound = self.bound();
        if self.spread > bound * 2.0 {
            warn!(
                "spread {} exceeds the disc diameter {}; at most one point fits.",
                self.spread,
                bound * 2.0
            );
        }

        let mut sampler = PoissonDiscSampler::new(self)?;
        let points = sampler.run(rng);
        let stats = sampler.stats;

        debug!(
            points = points.len(),
            rounds = stats.rounds,
            attempts = stats.attempts,
            rejected_outside = stats.rejected_outside,
            rejected_too_close = stats.rejected_too_close,
            evicted = stats.evicted,
            "poisson disc sampling finished"
        );

        Ok(DiscSample {
            points: points.into_iter().map(Into::into).collect(),
            stats,
        })
    }
}

/// State owned by a single sampling run.
struct PoissonDiscSampler {
    spread: f32,
    bound_squared: f32,
    bound: f32,
    max_attempts: usize,
    include_seed: bool,
    grid: DiscGrid,
    active: Vec<Vec2>,
    points: Vec<Vec2>,
    stats: SamplingStats,
}

impl PoissonDiscSampler {
    fn new(config: &PoissonDiscSampling) -> Result<Self> {
        let bound = config.bound();
        Ok(Self {
            spread: config.spread,
            bound_squared: bound * bound,
            bound,
            max_attempts: config.max_attempts,
            include_seed: config.include_seed,
            grid: DiscGrid::try_new(config.max_radius, config.spread)?,
            active: Vec::new(),
            points: Vec::new(),
            stats: SamplingStats::default(),
        })
    }

    /// Uniform point in the disc of the effective radius.
    fn initial_point(&self, rng: &mut dyn RngCore) -> Vec2 {
        let angle = rand_range(rng, 0.0, TAU);
        let r = self.bound * rand01(rng).sqrt();
        Vec2::from_angle(angle) * r
    }

    fn accept(&mut self, cell: (usize, usize), point: Vec2) {
        self.grid.insert(cell, point);
        self.active.push(point);
        self.points.push(point);
        self.stats.accepted += 1;
    }

    /// Try one candidate around `centre`; returns whether it was accepted.
    fn attempt(&mut self, rng: &mut dyn RngCore, centre: Vec2) -> bool {
        self.stats.attempts += 1;

        let angle = rand_range(rng, 0.0, TAU);
        let distance = rand_range(rng, self.spread, self.spread * 2.0);
        let candidate = centre + Vec2::from_angle(angle) * distance;

        if candidate.length_squared() > self.bound_squared {
            self.stats.rejected_outside += 1;
            return false;
        }

        let cell = self.grid.cell_coordinate_of(candidate);
        if !self.grid.is_valid_candidate(cell, candidate, self.spread) {
            self.stats.rejected_too_close += 1;
            return false;
        }

        self.accept(cell, candidate);
        true
    }

    fn run(&mut self, rng: &mut dyn RngCore) -> Vec<Vec2> {
        let initial = self.initial_point(rng);
        if self.include_seed {
            let cell = self.grid.cell_coordinate_of(initial);
            self.accept(cell, initial);
        } else {
            self.active.push(initial);
        }

        while !self.active.is_empty() {
            self.stats.rounds += 1;
            let index = rand_index(rng, self.active.len());
            let centre = self.active[index];

            let mut success = false;
            for _ in 0..self.max_attempts {
                success |= self.attempt(rng, centre);
            }

            if !success {
                self.active.swap_remove(index);
                self.stats.evicted += 1;
            }
        }

        std::mem::take(&mut self.points)
    }
}
