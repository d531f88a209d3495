use disc_scatter::prelude::*;
use disc_scatter_demos::{init_tracing, write_points_csv};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let spread = 1.0;
    let max_radius = 30.0;

    // Same grid, candidates bounded by the full radius or by half of it.
    let variants = [
        ("bound-full.csv", PoissonDiscSampling::new(spread, max_radius)),
        (
            "bound-half.csv",
            PoissonDiscSampling::new(spread, max_radius).with_effective_radius(max_radius / 2.0),
        ),
    ];

    for (out, sampling) in variants {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sampling.generate_with_stats(&mut rng)?;
        verify_distribution(&sample.points, spread, sampling.bound())?;
        info!(
            "bound {}: {} points, {} attempts, {} outside, {} too close",
            sampling.bound(),
            sample.points.len(),
            sample.stats.attempts,
            sample.stats.rejected_outside,
            sample.stats.rejected_too_close
        );
        write_points_csv(&sample.points, out)?;
    }

    Ok(())
}
