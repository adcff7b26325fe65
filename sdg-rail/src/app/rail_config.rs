use crate::timetable::{HourRange, TimetableDay, TimetableError};
use chrono::NaiveDate;
use config::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// rail timetable settings read from the shared SDG configuration file.
/// keys that belong to other pipelines are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RailConfig {
    /// first hour (inclusive) of the highly serviced range
    pub early_train_hour: u32,
    /// last hour (exclusive) of the highly serviced range
    pub late_train_hour: u32,
    #[serde(default = "default_timetable_day")]
    pub timetable_day: TimetableDay,
    /// when set, only schedules valid on this date (yyyy-mm-dd) are counted
    #[serde(default)]
    pub timetable_date: Option<NaiveDate>,
    #[serde(default)]
    pub rail: RailFilesConfig,
}

/// input and output files of the rail pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RailFilesConfig {
    pub directory: PathBuf,
    pub msn_file: String,
    pub mca_file: String,
    pub station_locations: String,
    pub output_file: String,
}

impl Default for RailFilesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data").join("england_train_timetable"),
            msn_file: String::from("ttisf467.msn"),
            mca_file: String::from("ttisf467.mca"),
            station_locations: String::from("station_locations.csv"),
            output_file: String::from("highly_serviced_train_stations.csv"),
        }
    }
}

fn default_timetable_day() -> TimetableDay {
    TimetableDay::Wednesday
}

impl RailFilesConfig {
    pub fn msn_path(&self) -> PathBuf {
        self.directory.join(&self.msn_file)
    }

    pub fn mca_path(&self) -> PathBuf {
        self.directory.join(&self.mca_file)
    }

    pub fn station_locations_path(&self) -> PathBuf {
        self.directory.join(&self.station_locations)
    }

    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.output_file)
    }
}

impl RailConfig {
    pub fn hour_range(&self) -> Result<HourRange, TimetableError> {
        HourRange::new(self.early_train_hour, self.late_train_hour)
    }
}

impl TryFrom<&Path> for RailConfig {
    type Error = TimetableError;

    /// reads the configuration file, format chosen by extension (yaml, toml, json)
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let filepath = path.to_string_lossy().to_string();
        let config = Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|source| TimetableError::ConfigReadError {
                msg: format!("failed reading '{filepath}'"),
                source,
            })?;
        config
            .try_deserialize::<RailConfig>()
            .map_err(|source| TimetableError::ConfigReadError {
                msg: format!("failed decoding rail settings from '{filepath}'"),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_yaml() {
        let path = std::env::temp_dir().join("sdg_rail_config_test.yaml");
        std::fs::write(
            &path,
            "early_train_hour: 6\nlate_train_hour: 20\ntimetable_day: tuesday\ndefault_crs: EPSG:27700\nrail:\n  directory: rail\n  msn_file: a.msn\n  mca_file: a.mca\n  station_locations: loc.csv\n  output_file: out.csv\n",
        )
        .unwrap();
        let conf = RailConfig::try_from(path.as_path()).unwrap();
        assert_eq!(conf.timetable_day, TimetableDay::Tuesday);
        assert_eq!(conf.hour_range().unwrap().hours().count(), 14);
        assert_eq!(conf.rail.msn_path(), PathBuf::from("rail").join("a.msn"));
        assert_eq!(conf.timetable_date, None);
        let _ = std::fs::remove_file(&path);
    }
}
