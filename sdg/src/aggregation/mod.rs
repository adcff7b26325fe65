mod aggregation_ops;
mod authority_result;

pub use aggregation_ops::{aggregate_authorities, aggregate_authority, AggregationSettings};
pub use authority_result::AuthorityResult;
