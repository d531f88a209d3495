use std::thread;

use disc_scatter::prelude::*;
use disc_scatter_demos::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let base_seed = 0xD15C;
    let disc_count = 8u64;
    let sampling = PoissonDiscSampling::new(0.5, 10.0);

    // Each thread owns its generator; discs never share a grid.
    let results: Vec<Result<usize>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..disc_count)
            .map(|index| {
                let sampling = &sampling;
                scope.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed_for_disc(base_seed, index));
                    sampling.generate(&mut rng).map(|points| points.len())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("disc thread panicked"))
            .collect()
    });

    for (index, result) in results.into_iter().enumerate() {
        info!("disc {}: {} points", index, result?);
    }

    Ok(())
}
