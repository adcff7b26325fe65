use super::{HourRange, McaTimetable, Schedule, Station, TimetableDay};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// departures counted at one station (crs code) per hour of the hour range.
/// every hour of the range has an entry, zero when nothing departs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationFrequency {
    pub crs_code: String,
    pub station_name: String,
    pub departures: BTreeMap<u32, usize>,
}

impl StationFrequency {
    fn empty(station: &Station, hours: &HourRange) -> StationFrequency {
        StationFrequency {
            crs_code: station.crs_code.clone(),
            station_name: station.station_name.clone(),
            departures: hours.hours().map(|h| (h, 0)).collect(),
        }
    }

    /// true when there is at least one departure in every hour of the range
    pub fn is_highly_serviced(&self) -> bool {
        self.departures.values().all(|n| *n > 0)
    }
}

/// which schedules count towards the frequency table
#[derive(Debug, Clone, Copy)]
pub struct ServiceDayFilter {
    pub day: TimetableDay,
    /// when set, schedules must also be valid on this date
    pub date: Option<NaiveDate>,
}

impl ServiceDayFilter {
    fn accepts(&self, schedule: &Schedule) -> bool {
        match &self.date {
            Some(date) => schedule.runs_on(self.day) && schedule.runs_on_date(date),
            None => schedule.runs_on(self.day),
        }
    }
}

/// counts passenger departures per station and hour. a calling point is
/// counted when
///   - its activity codes include the passenger take-up/set-down code,
///   - its departure hour falls within the hour range,
///   - its schedule runs on the service day, and
///   - its tiploc matches a station of the station master file.
///
/// stations are keyed (and ordered) by crs code.
pub fn hourly_frequencies(
    timetable: &McaTimetable,
    stations: &[Station],
    service_day: &ServiceDayFilter,
    hours: &HourRange,
) -> BTreeMap<String, StationFrequency> {
    let schedules: HashMap<&str, &Schedule> = timetable
        .schedules
        .iter()
        .map(|s| (s.schedule_id.as_str(), s))
        .collect();
    let stations_by_tiploc: HashMap<&str, &Station> = stations
        .iter()
        .map(|s| (s.tiploc_code.as_str(), s))
        .collect();

    let mut result: BTreeMap<String, StationFrequency> = BTreeMap::new();
    let mut n_unmatched_tiploc = 0;
    for stop in timetable.stops.iter() {
        if !stop.is_passenger_stop() {
            continue;
        }
        let hour = match stop.departure_hour() {
            Some(h) if hours.contains(h) => h,
            _ => continue,
        };
        let runs = schedules
            .get(stop.schedule_id.as_str())
            .map(|s| service_day.accepts(s))
            .unwrap_or(false);
        if !runs {
            continue;
        }
        let station = match stations_by_tiploc.get(stop.tiploc_code.as_str()) {
            Some(station) => station,
            None => {
                n_unmatched_tiploc += 1;
                continue;
            }
        };
        let entry = result
            .entry(station.crs_code.clone())
            .or_insert_with(|| StationFrequency::empty(station, hours));
        if let Some(count) = entry.departures.get_mut(&hour) {
            *count += 1;
        }
    }
    if n_unmatched_tiploc > 0 {
        log::warn!(
            "{n_unmatched_tiploc} departures at tiplocs missing from the station master file were not counted"
        );
    }
    result
}

/// the stations with at least one departure in every hour of the range
pub fn highly_serviced(frequencies: BTreeMap<String, StationFrequency>) -> Vec<StationFrequency> {
    frequencies
        .into_values()
        .filter(StationFrequency::is_highly_serviced)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::mca_ops::{self, tests as mca};

    fn stations() -> Vec<Station> {
        vec![
            Station {
                station_name: String::from("KINGS CROSS"),
                tiploc_code: String::from("KNGX"),
                crs_code: String::from("KGX"),
            },
            Station {
                station_name: String::from("PETERBOROUGH"),
                tiploc_code: String::from("PBRO"),
                crs_code: String::from("PBO"),
            },
            Station {
                station_name: String::from("YORK"),
                tiploc_code: String::from("YORK"),
                crs_code: String::from("YRK"),
            },
        ]
    }

    fn timetable(lines: &[String]) -> McaTimetable {
        let text = std::iter::once(String::from("HD"))
            .chain(lines.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n");
        mca_ops::parse_mca(text.as_bytes(), "test.mca").unwrap()
    }

    fn wednesday() -> ServiceDayFilter {
        ServiceDayFilter {
            day: TimetableDay::Wednesday,
            date: None,
        }
    }

    #[test]
    fn test_only_passenger_stops_are_counted() {
        let tt = timetable(&[
            mca::bs("BSN", "C00001", "191208", "200516", "1111100"),
            mca::lo("KNGX", "0800", "TB"),
            mca::li("PBRO", "0845", "U"),
            mca::lt("YORK", "0950", "TF"),
        ]);
        let hours = HourRange::new(6, 10).unwrap();
        let freqs = hourly_frequencies(&tt, &stations(), &wednesday(), &hours);
        // origin is `TB`, intermediate is not a passenger stop, terminus is `TF`
        assert!(freqs.is_empty());
    }

    #[test]
    fn test_counts_by_station_and_hour() {
        let tt = timetable(&[
            mca::bs("BSN", "C00001", "191208", "200516", "0010000"),
            mca::lo("KNGX", "0600", "TB"),
            mca::li("PBRO", "0645", "T"),
            mca::lt("YORK", "0750", "TF"),
            mca::bs("BSN", "C00002", "191208", "200516", "0010000"),
            mca::lo("KNGX", "0700", "TB"),
            mca::li("PBRO", "0745", "T"),
            mca::lt("YORK", "0850", "TF"),
            // runs on mondays only
            mca::bs("BSN", "C00003", "191208", "200516", "1000000"),
            mca::lo("KNGX", "0600", "TB"),
            mca::li("PBRO", "0615", "T"),
            mca::lt("YORK", "0750", "TF"),
        ]);
        let hours = HourRange::new(6, 8).unwrap();
        let freqs = hourly_frequencies(&tt, &stations(), &wednesday(), &hours);
        assert_eq!(freqs.len(), 1);
        let pbo = &freqs["PBO"];
        assert_eq!(pbo.departures.get(&6), Some(&1));
        assert_eq!(pbo.departures.get(&7), Some(&1));
        assert!(pbo.is_highly_serviced());
        assert_eq!(pbo.departures.values().sum::<usize>(), 2);
    }

    #[test]
    fn test_gap_hour_is_not_highly_serviced() {
        let tt = timetable(&[
            mca::bs("BSN", "C00001", "191208", "200516", "0010000"),
            mca::lo("KNGX", "0600", "TB"),
            mca::li("PBRO", "0645", "T"),
            mca::lt("YORK", "0750", "TF"),
            mca::bs("BSN", "C00002", "191208", "200516", "0010000"),
            mca::lo("KNGX", "0800", "TB"),
            mca::li("PBRO", "0845", "T"),
            mca::lt("YORK", "0950", "TF"),
        ]);
        let hours = HourRange::new(6, 9).unwrap();
        let freqs = hourly_frequencies(&tt, &stations(), &wednesday(), &hours);
        let pbo = &freqs["PBO"];
        assert_eq!(pbo.departures.get(&7), Some(&0));
        assert!(highly_serviced(freqs).is_empty());
    }

    #[test]
    fn test_date_filter_excludes_expired_schedules() {
        let tt = timetable(&[
            mca::bs("BSN", "C00001", "191208", "191214", "0010000"),
            mca::lo("KNGX", "0600", "TB"),
            mca::li("PBRO", "0645", "T"),
            mca::lt("YORK", "0750", "TF"),
        ]);
        let hours = HourRange::new(6, 7).unwrap();
        let in_range = ServiceDayFilter {
            day: TimetableDay::Wednesday,
            date: NaiveDate::from_ymd_opt(2019, 12, 11),
        };
        let expired = ServiceDayFilter {
            day: TimetableDay::Wednesday,
            date: NaiveDate::from_ymd_opt(2019, 12, 18),
        };
        assert_eq!(hourly_frequencies(&tt, &stations(), &in_range, &hours).len(), 1);
        assert!(hourly_frequencies(&tt, &stations(), &expired, &hours).is_empty());
    }
}
