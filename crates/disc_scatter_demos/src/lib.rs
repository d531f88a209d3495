#![forbid(unsafe_code)]

mod output;

pub use output::{init_tracing, mean_point_count, write_points_csv};
