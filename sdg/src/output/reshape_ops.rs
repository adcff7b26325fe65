use super::Series;
use crate::aggregation::AuthorityResult;
use crate::model::{Category, ResultRow};
use indexmap::IndexMap;
use serde::Serialize;

pub const LONG_COLUMNS: [&str; 8] = [
    "Year",
    "Local Authority",
    "Sex",
    "Age",
    "Disability Status",
    "Urban/Rural",
    "Series",
    "Value",
];

pub const WIDE_COLUMNS: [&str; 12] = [
    "Year",
    "Local Authority",
    "Category",
    "Sex",
    "Age",
    "Disability Status",
    "Urban/Rural",
    "Total population",
    "Served",
    "Unserved",
    "Percentage served",
    "Percentage unserved",
];

/// a row of the long output, one per metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRow {
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Local Authority")]
    pub local_authority: String,
    #[serde(rename = "Sex")]
    pub sex: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<String>,
    #[serde(rename = "Disability Status")]
    pub disability_status: Option<String>,
    #[serde(rename = "Urban/Rural")]
    pub urban_rural: Option<String>,
    #[serde(rename = "Series")]
    pub series: String,
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

/// a row of the wide output, one per category value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideRow {
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Local Authority")]
    pub local_authority: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sex")]
    pub sex: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<String>,
    #[serde(rename = "Disability Status")]
    pub disability_status: Option<String>,
    #[serde(rename = "Urban/Rural")]
    pub urban_rural: Option<String>,
    #[serde(rename = "Total population")]
    pub total_population: u64,
    #[serde(rename = "Served")]
    pub served: u64,
    #[serde(rename = "Unserved")]
    pub unserved: u64,
    #[serde(rename = "Percentage served")]
    pub percentage_served: Option<String>,
    #[serde(rename = "Percentage unserved")]
    pub percentage_unserved: Option<String>,
}

/// the four category columns; only the column of the row's own category is
/// filled and Total rows leave all of them blank
#[derive(Debug, Default)]
struct CategoryColumns {
    sex: Option<String>,
    age: Option<String>,
    disability_status: Option<String>,
    urban_rural: Option<String>,
}

impl CategoryColumns {
    fn of(row: &ResultRow) -> CategoryColumns {
        let value = Some(row.value.clone());
        match row.category {
            Category::Total => CategoryColumns::default(),
            Category::Sex => CategoryColumns { sex: value, ..Default::default() },
            Category::Age => CategoryColumns { age: value, ..Default::default() },
            Category::DisabilityStatus => CategoryColumns {
                disability_status: value,
                ..Default::default()
            },
            Category::UrbanRural => CategoryColumns {
                urban_rural: value,
                ..Default::default()
            },
        }
    }
}

/// result rows stacked category-major: every authority's Total block, then
/// every authority's Sex block, and so on
pub fn stacked_rows(results: &IndexMap<String, AuthorityResult>) -> Vec<&ResultRow> {
    Category::OUTPUT_ORDER
        .into_iter()
        .flat_map(move |category| {
            results
                .values()
                .filter_map(move |result| result.block(category))
                .flatten()
        })
        .collect()
}

pub fn reshape_long(results: &IndexMap<String, AuthorityResult>, year: &str) -> Vec<LongRow> {
    stacked_rows(results)
        .into_iter()
        .flat_map(|row| {
            Series::ALL.into_iter().map(move |series| {
                let columns = CategoryColumns::of(row);
                LongRow {
                    year: year.to_string(),
                    local_authority: row.local_authority.clone(),
                    sex: columns.sex,
                    age: columns.age,
                    disability_status: columns.disability_status,
                    urban_rural: columns.urban_rural,
                    series: series.name().to_string(),
                    value: series.value(row),
                }
            })
        })
        .collect()
}

pub fn reshape_wide(results: &IndexMap<String, AuthorityResult>, year: &str) -> Vec<WideRow> {
    stacked_rows(results)
        .into_iter()
        .map(|row| {
            let columns = CategoryColumns::of(row);
            WideRow {
                year: year.to_string(),
                local_authority: row.local_authority.clone(),
                category: row.category.column_name().to_string(),
                sex: columns.sex,
                age: columns.age,
                disability_status: columns.disability_status,
                urban_rural: columns.urban_rural,
                total_population: row.total,
                served: row.served,
                unserved: row.unserved,
                percentage_served: row.pct_served.clone(),
                percentage_unserved: row.pct_unserved.clone(),
            }
        })
        .collect()
}
