use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the day of the week whose services are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimetableDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl TimetableDay {
    pub fn index_from_monday(&self) -> usize {
        match self {
            TimetableDay::Monday => 0,
            TimetableDay::Tuesday => 1,
            TimetableDay::Wednesday => 2,
            TimetableDay::Thursday => 3,
            TimetableDay::Friday => 4,
            TimetableDay::Saturday => 5,
            TimetableDay::Sunday => 6,
        }
    }
}

impl From<Weekday> for TimetableDay {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Mon => TimetableDay::Monday,
            Weekday::Tue => TimetableDay::Tuesday,
            Weekday::Wed => TimetableDay::Wednesday,
            Weekday::Thu => TimetableDay::Thursday,
            Weekday::Fri => TimetableDay::Friday,
            Weekday::Sat => TimetableDay::Saturday,
            Weekday::Sun => TimetableDay::Sunday,
        }
    }
}

impl Display for TimetableDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimetableDay::Monday => "monday",
            TimetableDay::Tuesday => "tuesday",
            TimetableDay::Wednesday => "wednesday",
            TimetableDay::Thursday => "thursday",
            TimetableDay::Friday => "friday",
            TimetableDay::Saturday => "saturday",
            TimetableDay::Sunday => "sunday",
        };
        write!(f, "{s}")
    }
}
