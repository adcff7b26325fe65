use super::AuthorityResult;
use crate::config::EmptyAuthorityPolicy;
use crate::geometry::{find_points_in_poly, CatchmentRadii, ServiceArea};
use crate::join::dedup_by_code;
use crate::model::{AgeBands, Category, LocalAuthority, OutputArea, ResultRow, SdgError, Stop};
use indexmap::IndexMap;
use kdam::{tqdm, Bar, BarExt};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// settings shared by every authority of a run
#[derive(Debug, Clone)]
pub struct AggregationSettings {
    pub radii: CatchmentRadii,
    pub age_bands: AgeBands,
    /// categories to produce, Total first
    pub categories: Vec<Category>,
    pub empty_authority_policy: EmptyAuthorityPolicy,
}

impl AggregationSettings {
    /// Total and Sex always come from the population table, the other
    /// categories only when their table was loaded
    pub fn new(
        radii: CatchmentRadii,
        age_bands: AgeBands,
        with_urban_rural: bool,
        with_disability: bool,
        with_age: bool,
        empty_authority_policy: EmptyAuthorityPolicy,
    ) -> AggregationSettings {
        let categories = Category::OUTPUT_ORDER
            .into_iter()
            .filter(|c| match c {
                Category::Total | Category::Sex => true,
                Category::UrbanRural => with_urban_rural,
                Category::DisabilityStatus => with_disability,
                Category::Age => with_age,
            })
            .collect();
        AggregationSettings {
            radii,
            age_bands,
            categories,
            empty_authority_policy,
        }
    }
}

/// groups output areas by the authority name the lookup assigned them
fn group_by_authority(output_areas: &[OutputArea]) -> HashMap<&str, Vec<&OutputArea>> {
    let mut groups: HashMap<&str, Vec<&OutputArea>> = HashMap::new();
    for oa in output_areas {
        groups.entry(oa.local_authority.as_str()).or_default().push(oa);
    }
    groups
}

/// computes the served and unserved population of one authority.
///
/// stops are the ones inside the authority boundary, population rows are the
/// ones the lookup assigns to the authority name. returns None when the
/// authority has no population and the policy is to skip it.
pub fn aggregate_authority(
    authority: &LocalAuthority,
    stops: &[Stop],
    output_areas: &[&OutputArea],
    settings: &AggregationSettings,
) -> Result<Option<AuthorityResult>, SdgError> {
    let name = authority.name.as_str();
    let authority_stops = find_points_in_poly(stops.iter(), authority);
    let catchments = authority_stops
        .iter()
        .map(|s| settings.radii.catchment(s))
        .collect::<Vec<_>>();
    let service_area = ServiceArea::new(&catchments);

    let population = dedup_by_code(output_areas.iter().copied());
    let served = dedup_by_code(find_points_in_poly(population.iter().copied(), &service_area));

    let full_pop: u64 = population.iter().map(|oa| oa.population.all_people).sum();
    if full_pop == 0 {
        match settings.empty_authority_policy {
            EmptyAuthorityPolicy::Skip => {
                log::warn!("{name} has no population, skipping");
                return Ok(None);
            }
            EmptyAuthorityPolicy::Fail => return Err(SdgError::EmptyAuthority(name.to_string())),
            EmptyAuthorityPolicy::Report => {
                log::warn!("{name} has no population, reporting blank percentages");
            }
        }
    }

    let mut blocks = IndexMap::new();
    for category in settings.categories.iter() {
        let rows = category_block(name, *category, &settings.age_bands, &population, &served)?;
        blocks.insert(*category, rows);
    }
    log::debug!(
        "{name}: {} stops, {} of {} output areas served",
        authority_stops.len(),
        served.len(),
        population.len()
    );
    Ok(Some(AuthorityResult {
        local_authority: name.to_string(),
        n_stops: authority_stops.len(),
        n_output_areas: population.len(),
        n_served_output_areas: served.len(),
        blocks,
    }))
}

/// sums population and served counts per category value
fn category_block(
    authority: &str,
    category: Category,
    age_bands: &AgeBands,
    population: &[&OutputArea],
    served: &[&OutputArea],
) -> Result<Vec<ResultRow>, SdgError> {
    let labels = category.labels(age_bands);
    let totals = sum_counts(category, labels.len(), population)?;
    let served_totals = sum_counts(category, labels.len(), served)?;
    let rows = labels
        .into_iter()
        .zip(totals.into_iter().zip(served_totals))
        .map(|(label, (total, served))| ResultRow::new(authority, category, label, total, served))
        .collect();
    Ok(rows)
}

fn sum_counts(category: Category, n_values: usize, rows: &[&OutputArea]) -> Result<Vec<u64>, SdgError> {
    let mut sums = vec![0u64; n_values];
    for oa in rows {
        let counts = category.counts(oa).ok_or_else(|| {
            SdgError::InternalError(format!("output area {} has no {} attribute", oa.code, category))
        })?;
        if counts.len() != n_values {
            return Err(SdgError::InternalError(format!(
                "output area {} has {} {} values, expected {}",
                oa.code,
                counts.len(),
                category,
                n_values
            )));
        }
        for (sum, count) in sums.iter_mut().zip(counts) {
            *sum += count;
        }
    }
    Ok(sums)
}

fn rows_of<'a>(groups: &'a HashMap<&'a str, Vec<&'a OutputArea>>, name: &str) -> &'a [&'a OutputArea] {
    groups.get(name).map(Vec::as_slice).unwrap_or(&[])
}

/// aggregates each authority independently, in the given order. with
/// `parallelize` the authorities are evaluated on the rayon pool; results
/// are still collected in authority order.
pub fn aggregate_authorities(
    authorities: &[LocalAuthority],
    stops: &[Stop],
    output_areas: &[OutputArea],
    settings: &AggregationSettings,
    parallelize: bool,
) -> Result<IndexMap<String, AuthorityResult>, SdgError> {
    let groups = group_by_authority(output_areas);

    let results: Vec<Option<AuthorityResult>> = if parallelize {
        let bar = Arc::new(Mutex::new(
            Bar::builder()
                .desc("local authorities")
                .total(authorities.len())
                .build()
                .map_err(SdgError::InternalError)?,
        ));
        authorities
            .par_iter()
            .map(|authority| {
                let result = aggregate_authority(authority, stops, rows_of(&groups, &authority.name), settings);
                if let Ok(mut b) = bar.clone().lock() {
                    let _ = b.update(1);
                }
                result
            })
            .collect::<Result<Vec<_>, SdgError>>()?
    } else {
        tqdm!(authorities.iter(), total = authorities.len(), desc = "local authorities")
            .map(|authority| aggregate_authority(authority, stops, rows_of(&groups, &authority.name), settings))
            .collect::<Result<Vec<_>, SdgError>>()?
    };
    eprintln!();

    let mut by_authority = IndexMap::new();
    for result in results.into_iter().flatten() {
        by_authority.insert(result.local_authority.clone(), result);
    }
    log::info!(
        "aggregated {} of {} local authorities",
        by_authority.len(),
        authorities.len()
    );
    Ok(by_authority)
}
