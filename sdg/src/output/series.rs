use crate::model::ResultRow;

/// the metrics reported for each category value, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    TotalPopulation,
    Served,
    Unserved,
    PercentageServed,
    PercentageUnserved,
}

impl Series {
    pub const ALL: [Series; 5] = [
        Series::TotalPopulation,
        Series::Served,
        Series::Unserved,
        Series::PercentageServed,
        Series::PercentageUnserved,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Series::TotalPopulation => "Total population",
            Series::Served => "Served",
            Series::Unserved => "Unserved",
            Series::PercentageServed => "Percentage served",
            Series::PercentageUnserved => "Percentage unserved",
        }
    }

    /// the metric as written to the output, None for a blank percentage
    pub fn value(&self, row: &ResultRow) -> Option<String> {
        match self {
            Series::TotalPopulation => Some(row.total.to_string()),
            Series::Served => Some(row.served.to_string()),
            Series::Unserved => Some(row.unserved.to_string()),
            Series::PercentageServed => row.pct_served.clone(),
            Series::PercentageUnserved => row.pct_unserved.clone(),
        }
    }
}
