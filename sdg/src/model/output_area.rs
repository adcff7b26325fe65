use super::UrbanRural;
use geo::Point;

/// usual resident counts of an output area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationCounts {
    pub all_people: u64,
    pub males: u64,
    pub females: u64,
}

/// population split by long-term activity limitation, scaled so that the
/// two counts add up to the output area's usual population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisabilityCounts {
    pub disabled: u64,
    pub non_disabled: u64,
}

/// an output area after all lookups and attribute tables are joined.
///
/// attributes that come from optional tables are `None` when the table was
/// not loaded. when a table is loaded, output areas missing from it are
/// dropped at join time, so every area reaching aggregation carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputArea {
    pub code: String,
    pub local_authority: String,
    pub centroid: Option<Point<f64>>,
    pub population: PopulationCounts,
    pub urban_rural: Option<UrbanRural>,
    pub disability: Option<DisabilityCounts>,
    /// counts per configured age band, in band order
    pub age: Option<Vec<u64>>,
}

impl OutputArea {
    pub fn new(
        code: String,
        local_authority: String,
        centroid: Option<Point<f64>>,
        population: PopulationCounts,
    ) -> OutputArea {
        OutputArea {
            code,
            local_authority,
            centroid,
            population,
            urban_rural: None,
            disability: None,
            age: None,
        }
    }
}
