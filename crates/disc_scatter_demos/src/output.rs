//! Shared helpers for the demo binaries: tracing setup and CSV output.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use disc_scatter::prelude::*;
use mint::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Write `points` as `x,y` rows with a header line.
pub fn write_points_csv(points: &[Vector2<f32>], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "x,y")?;
    for p in points {
        writeln!(out, "{},{}", p.x, p.y)?;
    }
    out.flush()?;

    info!("Wrote {} points to {}.", points.len(), path.display());
    Ok(())
}

/// Average number of points `sampling` produces over `seeds`.
pub fn mean_point_count(
    sampling: &PoissonDiscSampling,
    seeds: impl IntoIterator<Item = u64>,
) -> Result<f32> {
    let mut total = 0usize;
    let mut runs = 0usize;
    for seed in seeds {
        let mut rng = StdRng::seed_from_u64(seed);
        total += sampling.generate(&mut rng)?.len();
        runs += 1;
    }
    Ok(total as f32 / runs.max(1) as f32)
}
