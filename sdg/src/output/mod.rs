mod reshape_ops;
mod series;
mod write_ops;

pub use reshape_ops::{reshape_long, reshape_wide, stacked_rows, LongRow, WideRow, LONG_COLUMNS, WIDE_COLUMNS};
pub use series::Series;
pub use write_ops::{write_catchments, write_results, CATCHMENT_VERTICES};
