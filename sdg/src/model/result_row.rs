use super::Category;

/// served/unserved tallies for one category value of one local authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub local_authority: String,
    pub category: Category,
    pub value: String,
    pub total: u64,
    pub served: u64,
    pub unserved: u64,
    /// formatted to two decimals, None when the total is zero
    pub pct_served: Option<String>,
    pub pct_unserved: Option<String>,
}

impl ResultRow {
    /// builds a row from the total and served counts. served may not exceed
    /// total since the served areas are a subset of the authority's areas.
    pub fn new(
        local_authority: &str,
        category: Category,
        value: String,
        total: u64,
        served: u64,
    ) -> ResultRow {
        let unserved = total.saturating_sub(served);
        ResultRow {
            local_authority: local_authority.to_string(),
            category,
            value,
            total,
            served,
            unserved,
            pct_served: percentage(served, total),
            pct_unserved: percentage(unserved, total),
        }
    }
}

/// share of `part` in `total` as a percentage with two decimals
pub fn percentage(part: u64, total: u64) -> Option<String> {
    if total == 0 {
        None
    } else {
        Some(format!("{:.2}", part as f64 / total as f64 * 100.0))
    }
}
