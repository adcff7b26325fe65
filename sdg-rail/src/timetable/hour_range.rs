use super::TimetableError;
use serde::{Deserialize, Serialize};

/// the half-open range of departure hours `[early, late)` in which a station
/// must be served every hour to count as highly serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    early: u32,
    late: u32,
}

impl HourRange {
    pub fn new(early: u32, late: u32) -> Result<HourRange, TimetableError> {
        if early >= late || late > 24 {
            Err(TimetableError::InvalidHourRange { early, late })
        } else {
            Ok(HourRange { early, late })
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.early <= hour && hour < self.late
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.early..self.late
    }
}
