use super::apportion_ops::{apportion, scale_round};
use crate::loader::DisabilityRecord;
use crate::model::{DisabilityCounts, OutputArea, PopulationCounts, UrbanRural};
use geo::Point;
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::HashMap;

/// the loaded tables keyed by output area code
#[derive(Debug, Default)]
pub struct JoinTables {
    pub population: IndexMap<String, PopulationCounts>,
    pub centroids: HashMap<String, Point<f64>>,
    pub oa_lookup: HashMap<String, String>,
    pub urban_rural: Option<HashMap<String, UrbanRural>>,
    pub disability: Option<HashMap<String, DisabilityRecord>>,
    /// counts per age band from the single year of age table
    pub age: Option<HashMap<String, Vec<u64>>>,
}

/// rows dropped or degraded while joining, reported as warnings
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JoinReport {
    pub without_authority: usize,
    pub without_centroid: usize,
    pub without_sex: usize,
    pub without_urban_rural: usize,
    pub without_disability: usize,
    pub without_age: usize,
}

impl JoinReport {
    fn log(&self) {
        if self.without_authority > 0 {
            log::warn!(
                "{} output areas have no local authority in the lookup and were dropped",
                self.without_authority
            );
        }
        if self.without_centroid > 0 {
            log::warn!(
                "{} output areas have no population weighted centroid, they count toward totals but are never served",
                self.without_centroid
            );
        }
        if self.without_sex > 0 {
            log::warn!(
                "{} output areas have people but no males or females counted and were dropped",
                self.without_sex
            );
        }
        for (count, table) in [
            (self.without_urban_rural, "urban/rural"),
            (self.without_disability, "disability"),
            (self.without_age, "age"),
        ] {
            if count > 0 {
                log::warn!("{count} output areas are missing from the {table} table and were dropped");
            }
        }
    }
}

/// joins centroids, authority assignment and the attribute tables onto the
/// population table. population rows are kept in file order.
///
/// output areas missing from the lookup or from a loaded attribute table are
/// dropped. an area without a centroid is kept so that it counts toward its
/// authority's population.
pub fn build_output_areas(tables: &JoinTables) -> (Vec<OutputArea>, JoinReport) {
    let mut report = JoinReport::default();
    let mut output_areas = Vec::with_capacity(tables.population.len());
    for (code, population) in tables.population.iter() {
        let Some(local_authority) = tables.oa_lookup.get(code) else {
            report.without_authority += 1;
            continue;
        };
        let Some(population) = sex_counts(code, population) else {
            report.without_sex += 1;
            continue;
        };
        let centroid = tables.centroids.get(code).copied();
        if centroid.is_none() {
            log::debug!("{code} has no centroid");
            report.without_centroid += 1;
        }
        let mut output_area = OutputArea::new(code.clone(), local_authority.clone(), centroid, population);

        if let Some(classes) = &tables.urban_rural {
            match classes.get(code) {
                Some(class) => output_area.urban_rural = Some(*class),
                None => {
                    report.without_urban_rural += 1;
                    continue;
                }
            }
        }
        if let Some(records) = &tables.disability {
            match records.get(code).and_then(|r| disability_counts(code, population.all_people, r)) {
                Some(counts) => output_area.disability = Some(counts),
                None => {
                    report.without_disability += 1;
                    continue;
                }
            }
        }
        if let Some(ages) = &tables.age {
            match ages.get(code).and_then(|a| age_counts(code, population.all_people, a)) {
                Some(counts) => output_area.age = Some(counts),
                None => {
                    report.without_age += 1;
                    continue;
                }
            }
        }
        output_areas.push(output_area);
    }
    report.log();
    log::info!("joined {} output areas", output_areas.len());
    (output_areas, report)
}

/// spreads all people over males and females in the proportions of the sex
/// columns, so the two always add up to the population
fn sex_counts(code: &str, population: &PopulationCounts) -> Option<PopulationCounts> {
    if population.males + population.females != population.all_people {
        log::debug!(
            "{code}: males ({}) and females ({}) do not add up to all people ({})",
            population.males,
            population.females,
            population.all_people
        );
    }
    match apportion(population.all_people, &[population.males, population.females])?.as_slice() {
        [males, females] => Some(PopulationCounts {
            all_people: population.all_people,
            males: *males,
            females: *females,
        }),
        _ => None,
    }
}

/// scales the disability table's limited share onto the usual population
fn disability_counts(code: &str, population: u64, record: &DisabilityRecord) -> Option<DisabilityCounts> {
    if record.total != population {
        log::debug!(
            "{code}: disability table total {} differs from population {population}",
            record.total
        );
    }
    let disabled = match scale_round(population, record.limited, record.total) {
        Some(d) => d.min(population),
        None if population == 0 => 0,
        None => return None,
    };
    Some(DisabilityCounts {
        disabled,
        non_disabled: population - disabled,
    })
}

/// spreads the usual population over the age bands in the proportions of
/// the age table
fn age_counts(code: &str, population: u64, bands: &[u64]) -> Option<Vec<u64>> {
    let age_total: u64 = bands.iter().sum();
    if age_total != population {
        log::debug!("{code}: age table total {age_total} differs from population {population}");
    }
    apportion(population, bands)
}

/// keeps the first occurrence of each output area code
pub fn dedup_by_code<'a>(rows: impl IntoIterator<Item = &'a OutputArea>) -> Vec<&'a OutputArea> {
    rows.into_iter().unique_by(|oa| oa.code.as_str()).collect()
}
