use disc_scatter::prelude::*;
use disc_scatter_demos::{init_tracing, mean_point_count};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Larger budgets pack the disc more densely at higher cost.
    let budgets = [1usize, 3, 10, DEFAULT_MAX_ATTEMPTS];
    let seeds = 0..32u64;

    for attempts in budgets {
        let sampling = PoissonDiscSampling::new(1.0, 20.0).with_max_attempts(attempts);
        let mean = mean_point_count(&sampling, seeds.clone())?;
        info!("max_attempts {:>2}: {:.1} points on average", attempts, mean);
    }

    Ok(())
}
