use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// source files and column names. file paths are relative to `data_dir`
/// unless absolute. the defaults follow the layout of the published source
/// data (NaPTAN, Scotland's census 2011 bulk tables, ONS boundaries and
/// lookups).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub stops: StopsInput,
    pub population: PopulationInput,
    pub boundaries: BoundaryInput,
    pub centroids: CentroidInput,
    pub oa_lookup: LookupInput,
    /// tables for the optional breakdowns, a breakdown is only produced
    /// when its table is configured
    pub urban_rural: Option<UrbanRuralInput>,
    pub disability: Option<DisabilityInput>,
    pub age: Option<AgeInput>,
    /// highly serviced stations written by sdg_rail, added as high capacity stops
    pub rail_stations: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StopsInput {
    pub file: PathBuf,
    pub id_column: String,
    pub easting_column: String,
    pub northing_column: String,
    pub stop_type_column: String,
    pub status_column: String,
}

impl Default for StopsInput {
    fn default() -> Self {
        Self {
            file: PathBuf::from("stops").join("Stops.csv"),
            id_column: String::from("ATCOCode"),
            easting_column: String::from("Easting"),
            northing_column: String::from("Northing"),
            stop_type_column: String::from("StopType"),
            status_column: String::from("Status"),
        }
    }
}

/// usual resident population table. census bulk tables leave the header of
/// the area code column blank, hence the empty default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationInput {
    pub file: PathBuf,
    pub code_column: String,
    pub all_people_column: String,
    pub males_column: String,
    pub females_column: String,
}

impl Default for PopulationInput {
    fn default() -> Self {
        Self {
            file: PathBuf::from("KS101SC.csv"),
            code_column: String::new(),
            all_people_column: String::from("All people"),
            males_column: String::from("Males"),
            females_column: String::from("Females"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryInput {
    pub file: PathBuf,
    pub code_field: String,
    pub name_field: String,
}

impl Default for BoundaryInput {
    fn default() -> Self {
        Self {
            file: PathBuf::from("LA_shp")
                .join("2021")
                .join("LAD_MAY_2021_UK_BFC.shp"),
            code_field: String::from("LAD21CD"),
            name_field: String::from("LAD21NM"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CentroidInput {
    pub file: PathBuf,
    pub code_field: String,
}

impl Default for CentroidInput {
    fn default() -> Self {
        Self {
            file: PathBuf::from("pop_weighted_centroids")
                .join("scotland")
                .join("2011")
                .join("OutputArea2011_PWC.shp"),
            code_field: String::from("code"),
        }
    }
}

/// output area to local authority lookup, an ISO-8859-1 encoded CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupInput {
    pub file: PathBuf,
    pub code_column: String,
    pub authority_column: String,
}

impl Default for LookupInput {
    fn default() -> Self {
        Self {
            file: PathBuf::from("oa_la_mapping")
                .join("scotland")
                .join("2021")
                .join("PCD_OA_LSOA_MSOA_LAD_NOV21_UK_LU.csv"),
            code_column: String::from("oa11cd"),
            authority_column: String::from("ladnm"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrbanRuralInput {
    pub file: PathBuf,
    pub code_column: String,
    pub class_column: String,
}

impl Default for UrbanRuralInput {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urban_rural")
                .join("scotland")
                .join("oa2011_urban_rural_2016.csv"),
            code_column: String::from("OA2011"),
            class_column: String::from("UR2FOLD"),
        }
    }
}

/// long-term health problem or disability table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisabilityInput {
    pub file: PathBuf,
    pub code_column: String,
    pub total_column: String,
    pub limited_a_lot_column: String,
    pub limited_a_little_column: String,
}

impl Default for DisabilityInput {
    fn default() -> Self {
        Self {
            file: PathBuf::from("QS303SC.csv"),
            code_column: String::new(),
            total_column: String::from("All people"),
            limited_a_lot_column: String::from("Day-to-day activities limited a lot"),
            limited_a_little_column: String::from("Day-to-day activities limited a little"),
        }
    }
}

/// single year of age table, columns "Under 1", "1", .. "100 and over"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeInput {
    pub file: PathBuf,
    pub code_column: String,
}

impl Default for AgeInput {
    fn default() -> Self {
        Self {
            file: PathBuf::from("QS103SC.csv"),
            code_column: String::new(),
        }
    }
}

/// joins a configured path onto the data directory. absolute paths are kept.
pub fn resolve(data_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    }
}
