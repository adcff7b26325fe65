pub mod field_spec;
mod frequency_ops;
mod hour_range;
pub mod mca_ops;
pub mod msn_ops;
mod record_type;
mod schedule;
mod station;
mod station_location;
mod timetable_day;
mod timetable_error;

pub use frequency_ops::{highly_serviced, hourly_frequencies, ServiceDayFilter, StationFrequency};
pub use hour_range::HourRange;
pub use mca_ops::McaTimetable;
pub use record_type::McaRecordType;
pub use schedule::{DaysRun, Schedule, TimetableStop};
pub use station::Station;
pub use station_location::{
    locate_stations, read_highly_serviced, read_station_locations, write_highly_serviced,
    HighlyServicedStation, HighlyServicedStationRow, StationLocation,
};
pub use timetable_day::TimetableDay;
pub use timetable_error::TimetableError;
