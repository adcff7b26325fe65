/// record types of the schedule (.mca) file that carry information used here.
/// everything else (`BX` extra details, `CR` changes en route, association
/// and tiploc records) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McaRecordType {
    /// `BSN`, a new basic schedule
    ScheduleNew,
    /// `BSR`, a revised basic schedule
    ScheduleRevise,
    /// `BSD`, a deleted basic schedule
    ScheduleDelete,
    /// `LO`, origin location
    Origin,
    /// `LI`, intermediate location
    Intermediate,
    /// `LT`, terminating location
    Terminating,
    Other,
}

impl McaRecordType {
    pub fn of_line(line: &str) -> McaRecordType {
        if line.starts_with("BSN") {
            McaRecordType::ScheduleNew
        } else if line.starts_with("BSR") {
            McaRecordType::ScheduleRevise
        } else if line.starts_with("BSD") {
            McaRecordType::ScheduleDelete
        } else if line.starts_with("LO") {
            McaRecordType::Origin
        } else if line.starts_with("LI") {
            McaRecordType::Intermediate
        } else if line.starts_with("LT") {
            McaRecordType::Terminating
        } else {
            McaRecordType::Other
        }
    }

    /// true for schedule records that open a block of location records
    pub fn opens_schedule(&self) -> bool {
        matches!(
            self,
            McaRecordType::ScheduleNew | McaRecordType::ScheduleRevise
        )
    }
}

/// true for `A` station detail records of the station master (.msn) file.
/// `L` alias records and the header are skipped.
pub fn is_station_record(line: &str) -> bool {
    line.starts_with('A')
}
