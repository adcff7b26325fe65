use super::{resolve, EmptyAuthorityPolicy, InputsConfig, OutputLayout};
use crate::model::{AgeBands, Crs, SdgError, BRITISH_NATIONAL_GRID};
use config::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// settings of the Scotland indicator run. the same file may also carry the
/// rail timetable keys, which this struct ignores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SdgConfig {
    /// crs of coordinates read from CSV files
    pub default_crs: Crs,
    pub data_dir: PathBuf,
    pub data_output: PathBuf,
    pub outfile_sc: String,
    /// written to the Year column of the results
    pub pop_year: String,
    /// walking catchment radius in metres
    pub buffer_radius: f64,
    /// catchment radius for rail, metro and tram stops. falls back to
    /// `buffer_radius` when unset.
    pub high_capacity_buffer_radius: Option<f64>,
    /// lower bounds of the age bands
    pub scot_age_lst: Vec<u32>,
    /// authorities whose code starts with this prefix are processed
    pub country_code_prefix: String,
    /// restricts the run to these authority names, in this order
    pub local_authorities: Option<Vec<String>>,
    pub empty_authority_policy: EmptyAuthorityPolicy,
    pub output_layout: OutputLayout,
    pub parallelize: bool,
    /// when set, stop catchments are also written as WKT polygons to this
    /// file in `data_output`
    pub catchments_output: Option<String>,
    pub inputs: InputsConfig,
}

impl Default for SdgConfig {
    fn default() -> Self {
        Self {
            default_crs: BRITISH_NATIONAL_GRID,
            data_dir: PathBuf::from("data"),
            data_output: PathBuf::from("data").join("output"),
            outfile_sc: String::from("Scotland_results.csv"),
            pop_year: String::from("2011"),
            buffer_radius: 500.0,
            high_capacity_buffer_radius: None,
            scot_age_lst: vec![0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90],
            country_code_prefix: String::from("S"),
            local_authorities: None,
            empty_authority_policy: EmptyAuthorityPolicy::default(),
            output_layout: OutputLayout::default(),
            parallelize: false,
            catchments_output: None,
            inputs: InputsConfig::default(),
        }
    }
}

impl SdgConfig {
    /// path of a configured input file
    pub fn input_path(&self, file: &Path) -> PathBuf {
        resolve(&self.data_dir, file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_output.join(&self.outfile_sc)
    }

    pub fn catchments_path(&self) -> Option<PathBuf> {
        self.catchments_output
            .as_ref()
            .map(|f| self.data_output.join(f))
    }

    pub fn age_bands(&self) -> Result<AgeBands, SdgError> {
        AgeBands::new(&self.scot_age_lst).map_err(SdgError::InvalidConfig)
    }

    /// checks the values serde cannot
    pub fn validate(&self) -> Result<(), SdgError> {
        let radii = [
            ("buffer_radius", Some(self.buffer_radius)),
            ("high_capacity_buffer_radius", self.high_capacity_buffer_radius),
        ];
        for (key, radius) in radii {
            if let Some(r) = radius {
                if !r.is_finite() || r < 0.0 {
                    return Err(SdgError::InvalidConfig(format!(
                        "{key} must be a non-negative number of metres, found {r}"
                    )));
                }
            }
        }
        if self.country_code_prefix.is_empty() {
            return Err(SdgError::InvalidConfig(String::from(
                "country_code_prefix must not be empty",
            )));
        }
        self.age_bands()?;
        Ok(())
    }
}

impl TryFrom<&Path> for SdgConfig {
    type Error = SdgError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let config = Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| SdgError::ConfigReadError {
                msg: format!("unable to read config file {}", path.to_string_lossy()),
                source: e,
            })?;
        let sdg_config: SdgConfig =
            config
                .try_deserialize()
                .map_err(|e| SdgError::ConfigReadError {
                    msg: String::from("unable to deserialize SDG configuration"),
                    source: e,
                })?;
        sdg_config.validate()?;
        Ok(sdg_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_yaml() {
        let path = std::env::temp_dir().join("sdg_config_test_read_yaml.yaml");
        let mut file = std::fs::File::create(&path).expect("create temp config");
        writeln!(
            file,
            r#"
default_crs: "EPSG:27700"
data_dir: /tmp/sdg
pop_year: "2011"
buffer_radius: 400
scot_age_lst: [0, 16, 65]
local_authorities: ["Falkirk", "Stirling"]
empty_authority_policy: report
output_layout: wide
early_train_hour: 7
late_train_hour: 10
inputs:
  population:
    file: pop.csv
  urban_rural:
    file: ur.csv
"#
        )
        .expect("write temp config");
        drop(file);

        let conf = SdgConfig::try_from(path.as_path()).expect("config should parse");
        assert_eq!(conf.default_crs, BRITISH_NATIONAL_GRID);
        assert_eq!(conf.buffer_radius, 400.0);
        assert_eq!(conf.scot_age_lst, vec![0, 16, 65]);
        assert_eq!(conf.empty_authority_policy, EmptyAuthorityPolicy::Report);
        assert_eq!(conf.output_layout, OutputLayout::Wide);
        assert_eq!(
            conf.local_authorities,
            Some(vec![String::from("Falkirk"), String::from("Stirling")])
        );
        assert_eq!(
            conf.input_path(&conf.inputs.population.file),
            PathBuf::from("/tmp/sdg/pop.csv")
        );
        assert_eq!(conf.inputs.population.all_people_column, "All people");
        let ur = conf.inputs.urban_rural.expect("urban rural configured");
        assert_eq!(ur.class_column, "UR2FOLD");
        assert!(conf.inputs.disability.is_none());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let conf = SdgConfig {
            buffer_radius: -1.0,
            ..Default::default()
        };
        assert!(matches!(conf.validate(), Err(SdgError::InvalidConfig(_))));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(SdgConfig::default().validate().is_ok());
    }
}
