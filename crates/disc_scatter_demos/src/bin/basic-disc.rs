use disc_scatter::prelude::*;
use disc_scatter_demos::{init_tracing, write_points_csv};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Unit spread across a disc of radius 50.
    let spread = 1.0;
    let max_radius = 50.0;
    let seed = 2025;

    let points = generate_points(spread, max_radius, seed)?;
    verify_distribution(&points, spread, max_radius)?;
    info!(
        "Generated {} points (spread {}, radius {}, seed {}).",
        points.len(),
        spread,
        max_radius,
        seed
    );

    write_points_csv(&points, "basic-disc.csv")?;

    Ok(())
}
