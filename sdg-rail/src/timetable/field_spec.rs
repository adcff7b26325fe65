use super::TimetableError;

pub const STATION_NAME: &str = "station_name";
pub const TIPLOC_CODE: &str = "tiploc_code";
pub const CRS_CODE: &str = "crs_code";
pub const SCHEDULE_ID: &str = "schedule_id";
pub const TRAIN_UID: &str = "train_uid";
pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";
pub const DAYS_RUN: &str = "days_run";
pub const DEPARTURE_TIME: &str = "departure_time";
pub const ACTIVITY_TYPE: &str = "activity_type";

/// a named, half-open byte range `[start, end)` within a fixed-width record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

impl FieldSpec {
    pub const fn new(name: &'static str, start: usize, end: usize) -> FieldSpec {
        FieldSpec { name, start, end }
    }

    /// slices this field out of a line without trimming. lines that stop short
    /// of the field end (trailing padding stripped by an editor, for example)
    /// are read up to their length, and a field starting past the end of the
    /// line is empty.
    pub fn extract_raw<'a>(&self, line: &'a str, line_number: usize) -> Result<&'a str, TimetableError> {
        let end = self.end.min(line.len());
        if self.start >= end {
            return Ok("");
        }
        line.get(self.start..end)
            .ok_or_else(|| TimetableError::InvalidField {
                line: line_number,
                field: self.name,
                message: format!(
                    "byte range [{}, {}) does not fall on character boundaries",
                    self.start, end
                ),
            })
    }

    /// slices this field out of a line and strips the space padding.
    pub fn extract<'a>(&self, line: &'a str, line_number: usize) -> Result<&'a str, TimetableError> {
        self.extract_raw(line, line_number).map(str::trim)
    }
}

/// the field table for one fixed-width record type.
#[derive(Debug, Clone, Copy)]
pub struct RecordLayout {
    pub record: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordLayout {
    pub fn spec(&self, name: &'static str, line_number: usize) -> Result<&FieldSpec, TimetableError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or(TimetableError::UnknownField {
                line: line_number,
                record: self.record,
                field: name,
            })
    }

    /// trimmed value of the named field
    pub fn field<'a>(
        &self,
        line: &'a str,
        name: &'static str,
        line_number: usize,
    ) -> Result<&'a str, TimetableError> {
        self.spec(name, line_number)?.extract(line, line_number)
    }

    /// untrimmed value of the named field
    pub fn raw_field<'a>(
        &self,
        line: &'a str,
        name: &'static str,
        line_number: usize,
    ) -> Result<&'a str, TimetableError> {
        self.spec(name, line_number)?.extract_raw(line, line_number)
    }
}

/// `A` station detail record of the station master (.msn) file
pub const STATION_LAYOUT: RecordLayout = RecordLayout {
    record: "A",
    fields: &[
        FieldSpec::new(STATION_NAME, 5, 31),
        FieldSpec::new(TIPLOC_CODE, 36, 43),
        FieldSpec::new(CRS_CODE, 49, 52),
    ],
};

/// `BS` basic schedule record. the schedule id spans the train uid, the
/// date range and the days-run flags since the uid alone repeats across
/// calendars.
pub const SCHEDULE_LAYOUT: RecordLayout = RecordLayout {
    record: "BS",
    fields: &[
        FieldSpec::new(SCHEDULE_ID, 3, 28),
        FieldSpec::new(TRAIN_UID, 3, 9),
        FieldSpec::new(START_DATE, 9, 15),
        FieldSpec::new(END_DATE, 15, 21),
        FieldSpec::new(DAYS_RUN, 21, 28),
    ],
};

/// `LO` origin location record
pub const ORIGIN_LAYOUT: RecordLayout = RecordLayout {
    record: "LO",
    fields: &[
        FieldSpec::new(TIPLOC_CODE, 2, 10),
        FieldSpec::new(DEPARTURE_TIME, 10, 14),
        FieldSpec::new(ACTIVITY_TYPE, 29, 41),
    ],
};

/// `LI` intermediate location record
pub const INTERMEDIATE_LAYOUT: RecordLayout = RecordLayout {
    record: "LI",
    fields: &[
        FieldSpec::new(TIPLOC_CODE, 2, 10),
        FieldSpec::new(DEPARTURE_TIME, 15, 19),
        FieldSpec::new(ACTIVITY_TYPE, 42, 54),
    ],
};

/// `LT` terminating location record
pub const TERMINATING_LAYOUT: RecordLayout = RecordLayout {
    record: "LT",
    fields: &[
        FieldSpec::new(TIPLOC_CODE, 2, 10),
        FieldSpec::new(DEPARTURE_TIME, 15, 19),
        FieldSpec::new(ACTIVITY_TYPE, 25, 37),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_trims_padding() {
        let spec = FieldSpec::new("f", 2, 8);
        assert_eq!(spec.extract("LOab    cd", 1).unwrap(), "ab");
        assert_eq!(spec.extract_raw("LOab    cd", 1).unwrap(), "ab    ");
    }

    #[test]
    fn test_extract_short_line() {
        let spec = FieldSpec::new("f", 5, 10);
        assert_eq!(spec.extract("A   xyz", 1).unwrap(), "yz");
        assert_eq!(spec.extract("A", 1).unwrap(), "");
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let result = STATION_LAYOUT.field("A", DEPARTURE_TIME, 3);
        match result {
            Err(TimetableError::UnknownField { line, record, field }) => {
                assert_eq!(line, 3);
                assert_eq!(record, "A");
                assert_eq!(field, DEPARTURE_TIME);
            }
            other => panic!("expected UnknownField, found {other:?}"),
        }
    }

    #[test]
    fn test_layouts_have_ordered_ranges() {
        for layout in [
            STATION_LAYOUT,
            SCHEDULE_LAYOUT,
            ORIGIN_LAYOUT,
            INTERMEDIATE_LAYOUT,
            TERMINATING_LAYOUT,
        ] {
            for f in layout.fields {
                assert!(f.start < f.end, "{}.{} has an empty range", layout.record, f.name);
            }
        }
    }
}
