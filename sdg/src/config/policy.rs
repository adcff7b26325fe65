use serde::{Deserialize, Serialize};

/// what to do with a local authority whose matched population is zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAuthorityPolicy {
    /// log a warning and emit no rows for the authority
    #[default]
    Skip,
    /// emit rows with zero counts and blank percentages
    Report,
    /// stop the run with an error
    Fail,
}

/// shape of the results table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLayout {
    /// one row per metric
    #[default]
    Long,
    /// one row per category value with a column per metric
    Wide,
}
