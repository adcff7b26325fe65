mod apportion_ops;
mod population_frame;

pub use apportion_ops::{apportion, scale_round};
pub use population_frame::{build_output_areas, dedup_by_code, JoinReport, JoinTables};
