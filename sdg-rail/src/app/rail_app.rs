use super::RailConfig;
use crate::timetable::{self, mca_ops, msn_ops, ServiceDayFilter, TimetableError};
use clap::Parser;
use std::path::PathBuf;

/// command line tool that finds highly serviced rail stations in a national
/// rail timetable
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RailApp {
    /// SDG configuration file (yaml, toml or json)
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,
}

impl RailApp {
    pub fn run(&self) -> Result<(), TimetableError> {
        log::info!("reading configuration from {}", self.config.to_string_lossy());
        let conf = RailConfig::try_from(self.config.as_path())?;
        run(&conf)
    }
}

/// reads the timetable, counts departures and writes the highly serviced
/// stations with their coordinates.
pub fn run(conf: &RailConfig) -> Result<(), TimetableError> {
    let hours = conf.hour_range()?;
    let service_day = ServiceDayFilter {
        day: conf.timetable_day,
        date: conf.timetable_date,
    };

    let stations = msn_ops::read_msn(&conf.rail.msn_path())?;
    let mca = mca_ops::read_mca(&conf.rail.mca_path())?;
    let frequencies = timetable::hourly_frequencies(&mca, &stations, &service_day, &hours);
    log::info!(
        "{} stations have passenger departures on {} between {:02}:00 and {:02}:00",
        frequencies.len(),
        service_day.day,
        conf.early_train_hour,
        conf.late_train_hour
    );
    let serviced = timetable::highly_serviced(frequencies);
    log::info!("{} stations are highly serviced", serviced.len());

    let locations = timetable::read_station_locations(&conf.rail.station_locations_path())?;
    let located = timetable::locate_stations(serviced, &locations);
    let output_path = conf.rail.output_path();
    timetable::write_highly_serviced(&output_path, &located, &hours)?;
    log::info!(
        "wrote {} highly serviced stations to {}",
        located.len(),
        output_path.to_string_lossy()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RailFilesConfig;
    use crate::timetable::mca_ops::tests::{bs, li, lo, lt, record};
    use crate::timetable::TimetableDay;

    fn station(name: &str, tiploc: &str, crs: &str) -> String {
        record("A", &[(5, name), (36, tiploc), (49, crs)], 82)
    }

    #[test]
    fn test_run_writes_highly_serviced_stations() {
        let directory = std::env::temp_dir().join("sdg_rail_app_test_run");
        std::fs::create_dir_all(&directory).expect("create temp dir");
        let msn = [
            String::from("/!! Start of file"),
            station("LONDON KINGS CROSS", "KNGX", "KGX"),
            station("PETERBOROUGH", "PBRO", "PBO"),
            station("YORK", "YORK", "YRK"),
        ];
        let mca = [
            String::from("HDTPS.UDFROC1.PD191206"),
            bs("BSN", "C10001", "200101", "999999", "1111111"),
            lo("KNGX", "0700", "TB"),
            li("PBRO", "0730", "T"),
            lt("YORK", "0800", "TF"),
            bs("BSN", "C10002", "200101", "999999", "1111111"),
            lo("KNGX", "0800", "TB"),
            li("PBRO", "0815", "T"),
            lt("YORK", "0900", "TF"),
        ];
        std::fs::write(directory.join("t.msn"), msn.join("\n")).expect("write msn");
        std::fs::write(directory.join("t.mca"), mca.join("\n")).expect("write mca");
        std::fs::write(
            directory.join("locations.csv"),
            "station_code,easting,northing\nPBO,519000,299000\nKGX,530400,183400\n",
        )
        .expect("write locations");

        let conf = RailConfig {
            early_train_hour: 7,
            late_train_hour: 9,
            timetable_day: TimetableDay::Wednesday,
            timetable_date: None,
            rail: RailFilesConfig {
                directory: directory.clone(),
                msn_file: String::from("t.msn"),
                mca_file: String::from("t.mca"),
                station_locations: String::from("locations.csv"),
                output_file: String::from("out.csv"),
            },
        };
        run(&conf).expect("rail run succeeds");

        let written = std::fs::read_to_string(directory.join("out.csv")).expect("read output");
        let lines = written.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "station_code,station_name,easting,northing,departures_07,departures_08",
                "PBO,PETERBOROUGH,519000,299000,1,1",
            ]
        );
        let _ = std::fs::remove_dir_all(&directory);
    }
}
