use super::{TimetableDay, TimetableError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const SCHEDULE_DATE_FORMAT: &str = "%y%m%d";

/// end date used by open-ended schedules
pub const OPEN_ENDED_DATE: &str = "999999";

/// days-run flags of a schedule, monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysRun(pub [bool; 7]);

impl DaysRun {
    /// parses the seven `0`/`1` flags of a basic schedule record
    pub fn parse(flags: &str, line_number: usize) -> Result<DaysRun, TimetableError> {
        let invalid = |message: String| TimetableError::InvalidField {
            line: line_number,
            field: super::field_spec::DAYS_RUN,
            message,
        };
        if flags.len() != 7 {
            return Err(invalid(format!("expected 7 day flags, found '{flags}'")));
        }
        let mut days = [false; 7];
        for (day, c) in days.iter_mut().zip(flags.chars()) {
            *day = match c {
                '1' => true,
                '0' => false,
                other => return Err(invalid(format!("unexpected day flag '{other}'"))),
            };
        }
        Ok(DaysRun(days))
    }

    pub fn runs_on(&self, day: TimetableDay) -> bool {
        self.0[day.index_from_monday()]
    }
}

/// a basic schedule (one train on one calendar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub schedule_id: String,
    pub start_date: NaiveDate,
    /// None for open-ended schedules
    pub end_date: Option<NaiveDate>,
    pub days_run: DaysRun,
}

impl Schedule {
    /// true if this schedule runs on the given timetable day
    pub fn runs_on(&self, day: TimetableDay) -> bool {
        self.days_run.runs_on(day)
    }

    /// true if the date falls within the schedule's date range and on one of its days
    pub fn runs_on_date(&self, date: &NaiveDate) -> bool {
        let in_range = self.start_date <= *date && self.end_date.map(|e| *date <= e).unwrap_or(true);
        let weekday = TimetableDay::from(date.weekday());
        in_range && self.runs_on(weekday)
    }
}

/// a calling point of a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableStop {
    pub schedule_id: String,
    /// `HHMM`, empty when the location has no departure time
    pub departure_time: String,
    pub tiploc_code: String,
    /// the raw activity field, a sequence of two-character activity codes
    pub activity_type: String,
}

impl TimetableStop {
    /// the activity code for "stops to take up and set down passengers"
    pub const PASSENGER_ACTIVITY: &'static str = "T";

    /// activity codes of this stop. the field is made of two-character codes,
    /// so `"T"` and `"TB"` are different activities.
    pub fn activity_codes(&self) -> impl Iterator<Item = &str> {
        let bytes = self.activity_type.as_bytes();
        (0..bytes.len())
            .step_by(2)
            .filter_map(move |i| self.activity_type.get(i..(i + 2).min(bytes.len())))
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    pub fn is_passenger_stop(&self) -> bool {
        self.activity_codes().any(|c| c == Self::PASSENGER_ACTIVITY)
    }

    /// departure hour, if the departure time starts with a valid `HH`
    pub fn departure_hour(&self) -> Option<u32> {
        let hh = self.departure_time.get(0..2)?;
        if !hh.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        hh.parse::<u32>().ok().filter(|h| *h < 24)
    }
}

pub fn parse_schedule_date(
    value: &str,
    field: &'static str,
    line_number: usize,
) -> Result<NaiveDate, TimetableError> {
    NaiveDate::parse_from_str(value, SCHEDULE_DATE_FORMAT).map_err(|e| {
        TimetableError::InvalidField {
            line: line_number,
            field,
            message: format!("'{value}' is not a yymmdd date: {e}"),
        }
    })
}
