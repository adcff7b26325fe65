use crate::aggregation::{aggregate_authorities, AggregationSettings, AuthorityResult};
use crate::config::SdgConfig;
use crate::geometry::{dissolve_by_name, ensure_same_crs, CatchmentRadii};
use crate::join::{build_output_areas, JoinTables};
use crate::loader;
use crate::model::{filter_active, LocalAuthority, SdgError};
use crate::output::{write_catchments, write_results};
use clap::Parser;
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::HashMap;
use std::path::PathBuf;

/// command line tool that computes the share of each Scottish local
/// authority's population living within walking distance of a public
/// transport stop
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ScotlandApp {
    /// SDG configuration file (yaml, toml or json)
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,
}

impl ScotlandApp {
    pub fn run(&self) -> Result<(), SdgError> {
        log::info!("reading configuration from {}", self.config.to_string_lossy());
        let conf = SdgConfig::try_from(self.config.as_path())?;
        let results = run(&conf)?;
        log::info!(
            "finished {} local authorities, results in {}",
            results.len(),
            conf.output_path().to_string_lossy()
        );
        Ok(())
    }
}

/// loads every input, aggregates the selected authorities and writes the
/// results table
pub fn run(conf: &SdgConfig) -> Result<IndexMap<String, AuthorityResult>, SdgError> {
    let inputs = &conf.inputs;
    let age_bands = conf.age_bands()?;

    let stops_path = conf.input_path(&inputs.stops.file);
    let mut stops = filter_active(loader::read_stops(&stops_path, &inputs.stops)?);
    if let Some(rail_stations) = &inputs.rail_stations {
        stops.extend(loader::read_rail_stops(&conf.input_path(rail_stations))?);
    }

    let boundaries_path = conf.input_path(&inputs.boundaries.file);
    let (boundaries, boundaries_crs) =
        loader::read_boundaries(&boundaries_path, &inputs.boundaries, &conf.country_code_prefix)?;
    let centroids_path = conf.input_path(&inputs.centroids.file);
    let (centroids, centroids_crs) = loader::read_centroids(&centroids_path, &inputs.centroids)?;
    ensure_same_crs("stops", conf.default_crs, "boundaries", boundaries_crs)?;
    ensure_same_crs("stops", conf.default_crs, "centroids", centroids_crs)?;
    ensure_same_crs("boundaries", boundaries_crs, "centroids", centroids_crs)?;

    let authorities = select_authorities(
        dissolve_by_name(boundaries),
        conf.local_authorities.as_deref(),
    );

    let tables = JoinTables {
        population: loader::read_population(
            &conf.input_path(&inputs.population.file),
            &inputs.population,
        )?,
        centroids,
        oa_lookup: loader::read_oa_lookup(&conf.input_path(&inputs.oa_lookup.file), &inputs.oa_lookup)?,
        urban_rural: inputs
            .urban_rural
            .as_ref()
            .map(|input| loader::read_urban_rural(&conf.input_path(&input.file), input))
            .transpose()?,
        disability: inputs
            .disability
            .as_ref()
            .map(|input| loader::read_disability(&conf.input_path(&input.file), input))
            .transpose()?,
        age: inputs
            .age
            .as_ref()
            .map(|input| loader::read_age(&conf.input_path(&input.file), input, &age_bands))
            .transpose()?,
    };
    let (output_areas, _) = build_output_areas(&tables);

    let settings = AggregationSettings::new(
        CatchmentRadii::new(conf.buffer_radius, conf.high_capacity_buffer_radius),
        age_bands,
        tables.urban_rural.is_some(),
        tables.disability.is_some(),
        tables.age.is_some(),
        conf.empty_authority_policy,
    );
    let results = aggregate_authorities(&authorities, &stops, &output_areas, &settings, conf.parallelize)?;

    write_results(&conf.output_path(), &results, conf.output_layout, &conf.pop_year)?;
    if let Some(catchments_path) = conf.catchments_path() {
        write_catchments(&catchments_path, &authorities, &stops, &settings.radii)?;
    }
    Ok(results)
}

/// keeps the named authorities in the order they are listed, or all of them
/// when no list is configured
pub fn select_authorities(
    authorities: Vec<LocalAuthority>,
    names: Option<&[String]>,
) -> Vec<LocalAuthority> {
    let Some(names) = names else {
        return authorities;
    };
    let mut by_name: HashMap<String, LocalAuthority> = authorities
        .into_iter()
        .map(|a| (a.name.clone(), a))
        .collect();
    let unique_names = names.iter().unique().collect::<Vec<_>>();
    if unique_names.len() < names.len() {
        log::warn!(
            "{} repeated local authority names were ignored",
            names.len() - unique_names.len()
        );
    }
    let mut selected = Vec::with_capacity(unique_names.len());
    for name in unique_names {
        match by_name.remove(name) {
            Some(authority) => selected.push(authority),
            None => log::warn!("local authority '{name}' is not in the boundary file"),
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::MultiPolygon;

    fn authority(name: &str) -> LocalAuthority {
        LocalAuthority::new(name.to_string(), String::from("S12000001"), MultiPolygon::new(vec![]))
    }

    #[test]
    fn test_select_authorities() {
        let all = vec![authority("Falkirk"), authority("Stirling"), authority("Fife")];
        let names = vec![String::from("Fife"), String::from("Atlantis"), String::from("Falkirk")];
        let selected = select_authorities(all.clone(), Some(names.as_slice()));
        let selected = selected.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();
        assert_eq!(selected, vec!["Fife", "Falkirk"]);
        assert_eq!(select_authorities(all, None).len(), 3);
    }

    #[test]
    fn test_select_authorities_repeated_name_kept_once() {
        let all = vec![authority("Falkirk"), authority("Stirling")];
        let names = vec![String::from("Stirling"), String::from("Falkirk"), String::from("Stirling")];
        let selected = select_authorities(all, Some(names.as_slice()));
        let selected = selected.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();
        assert_eq!(selected, vec!["Stirling", "Falkirk"]);
    }
}
