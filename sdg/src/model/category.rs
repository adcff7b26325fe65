use super::OutputArea;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the dimensions a local authority's population is broken down by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Total,
    Sex,
    UrbanRural,
    DisabilityStatus,
    Age,
}

impl Category {
    /// order in which category blocks are stacked in the output
    pub const OUTPUT_ORDER: [Category; 5] = [
        Category::Total,
        Category::Sex,
        Category::UrbanRural,
        Category::DisabilityStatus,
        Category::Age,
    ];

    /// column name of the category in the output table
    pub fn column_name(&self) -> &'static str {
        match self {
            Category::Total => "Total",
            Category::Sex => "Sex",
            Category::UrbanRural => "Urban/Rural",
            Category::DisabilityStatus => "Disability Status",
            Category::Age => "Age",
        }
    }

    /// category values, aligned with [`Category::counts`]
    pub fn labels(&self, age_bands: &AgeBands) -> Vec<String> {
        match self {
            Category::Total => vec![String::from("Total")],
            Category::Sex => vec![String::from("male"), String::from("female")],
            Category::UrbanRural => vec![UrbanRural::Urban.to_string(), UrbanRural::Rural.to_string()],
            Category::DisabilityStatus => {
                vec![String::from("disabled"), String::from("non-disabled")]
            }
            Category::Age => age_bands.labels(),
        }
    }

    /// the output area's population split across the category values, or
    /// None when the attribute table for this category was not loaded.
    pub fn counts(&self, output_area: &OutputArea) -> Option<Vec<u64>> {
        let population = &output_area.population;
        match self {
            Category::Total => Some(vec![population.all_people]),
            Category::Sex => Some(vec![population.males, population.females]),
            Category::UrbanRural => output_area.urban_rural.map(|ur| match ur {
                UrbanRural::Urban => vec![population.all_people, 0],
                UrbanRural::Rural => vec![0, population.all_people],
            }),
            Category::DisabilityStatus => output_area
                .disability
                .map(|d| vec![d.disabled, d.non_disabled]),
            Category::Age => output_area.age.clone(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// two-fold urban/rural classification of an output area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrbanRural {
    Urban,
    Rural,
}

impl TryFrom<&str> for UrbanRural {
    type Error = String;

    /// accepts the numeric 2-fold codes (1 = urban, 2 = rural) or the words
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "1" | "urban" => Ok(UrbanRural::Urban),
            "2" | "rural" => Ok(UrbanRural::Rural),
            other => Err(format!("unknown urban/rural class '{other}'")),
        }
    }
}

impl Display for UrbanRural {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrbanRural::Urban => write!(f, "urban"),
            UrbanRural::Rural => write!(f, "rural"),
        }
    }
}

/// contiguous age bands built from their lower bounds. the last band is
/// open ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBands {
    lower_bounds: Vec<u32>,
}

impl AgeBands {
    pub fn new(lower_bounds: &[u32]) -> Result<AgeBands, String> {
        match lower_bounds.first() {
            None => return Err(String::from("age band list is empty")),
            Some(0) => {}
            Some(first) => {
                return Err(format!(
                    "age bands must start at 0 so every age is covered, found {first}"
                ))
            }
        }
        if let Some(w) = lower_bounds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(format!(
                "age band bounds must be strictly increasing, found {} then {}",
                w[0], w[1]
            ));
        }
        Ok(AgeBands {
            lower_bounds: lower_bounds.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.lower_bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower_bounds.is_empty()
    }

    /// labels like "0-15" with a final "75+"
    pub fn labels(&self) -> Vec<String> {
        self.lower_bounds
            .iter()
            .enumerate()
            .map(|(idx, lower)| match self.lower_bounds.get(idx + 1) {
                Some(next) => format!("{}-{}", lower, next - 1),
                None => format!("{lower}+"),
            })
            .collect()
    }

    /// index of the band that contains this age
    pub fn band_of(&self, age: u32) -> usize {
        self.lower_bounds
            .iter()
            .rposition(|lower| *lower <= age)
            .unwrap_or(0)
    }
}
