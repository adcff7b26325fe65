use super::field_spec::{
    self, RecordLayout, INTERMEDIATE_LAYOUT, ORIGIN_LAYOUT, SCHEDULE_LAYOUT, TERMINATING_LAYOUT,
};
use super::record_type::McaRecordType;
use super::schedule::{self, DaysRun, Schedule, TimetableStop};
use super::TimetableError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// schedules and their calling points read from a schedule (.mca) file
#[derive(Debug, Default)]
pub struct McaTimetable {
    pub schedules: Vec<Schedule>,
    pub stops: Vec<TimetableStop>,
}

/// the schedule block that location records are currently assigned to
enum Block {
    Closed,
    /// location records belong to this schedule
    Open(String),
    /// a repeat of a schedule id already read; its location records are skipped
    Repeated,
}

pub fn read_mca(path: &Path) -> Result<McaTimetable, TimetableError> {
    let file = File::open(path).map_err(|source| TimetableError::ReadError {
        filepath: path.to_string_lossy().to_string(),
        source,
    })?;
    let timetable = parse_mca(BufReader::new(file), &path.to_string_lossy())?;
    log::info!(
        "read {} schedules with {} calling points from {}",
        timetable.schedules.len(),
        timetable.stops.len(),
        path.to_string_lossy()
    );
    Ok(timetable)
}

/// parses a schedule file line by line. a `BSN` or `BSR` record opens a
/// schedule block, the `LO`, `LI` and `LT` records that follow are tagged
/// with its schedule id and `LT` closes the block. deleted schedules (`BSD`)
/// never open a block. the first line is the file header.
///
/// schedule ids repeated later in the file are dropped along with their
/// calling points, keeping the first occurrence.
pub fn parse_mca<R: BufRead>(reader: R, source_name: &str) -> Result<McaTimetable, TimetableError> {
    let mut result = McaTimetable::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut block = Block::Closed;
    let mut n_repeated = 0;

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line_number = idx + 1;
        let line = line.map_err(|source| TimetableError::ReadError {
            filepath: source_name.to_string(),
            source,
        })?;
        let line = line.trim_end_matches('\r');
        let record_type = McaRecordType::of_line(line);

        if record_type.opens_schedule() {
            let schedule = parse_schedule(line, line_number)?;
            if seen.insert(schedule.schedule_id.clone()) {
                block = Block::Open(schedule.schedule_id.clone());
                result.schedules.push(schedule);
            } else {
                n_repeated += 1;
                block = Block::Repeated;
            }
            continue;
        }

        let layout: &RecordLayout = match record_type {
            McaRecordType::ScheduleDelete => {
                block = Block::Closed;
                continue;
            }
            McaRecordType::Origin => &ORIGIN_LAYOUT,
            McaRecordType::Intermediate => &INTERMEDIATE_LAYOUT,
            McaRecordType::Terminating => &TERMINATING_LAYOUT,
            _ => continue,
        };

        if let Block::Open(schedule_id) = &block {
            let stop = TimetableStop {
                schedule_id: schedule_id.clone(),
                departure_time: layout
                    .field(line, field_spec::DEPARTURE_TIME, line_number)?
                    .to_string(),
                tiploc_code: layout
                    .field(line, field_spec::TIPLOC_CODE, line_number)?
                    .to_string(),
                activity_type: layout
                    .raw_field(line, field_spec::ACTIVITY_TYPE, line_number)?
                    .trim_end()
                    .to_string(),
            };
            result.stops.push(stop);
        }

        if record_type == McaRecordType::Terminating {
            block = Block::Closed;
        }
    }

    if n_repeated > 0 {
        log::debug!("skipped {n_repeated} repeated schedule records in {source_name}");
    }
    Ok(result)
}

fn parse_schedule(line: &str, line_number: usize) -> Result<Schedule, TimetableError> {
    let schedule_id = SCHEDULE_LAYOUT.raw_field(line, field_spec::SCHEDULE_ID, line_number)?;
    let start = SCHEDULE_LAYOUT.field(line, field_spec::START_DATE, line_number)?;
    let end = SCHEDULE_LAYOUT.field(line, field_spec::END_DATE, line_number)?;
    let days = SCHEDULE_LAYOUT.field(line, field_spec::DAYS_RUN, line_number)?;

    let start_date = schedule::parse_schedule_date(start, field_spec::START_DATE, line_number)?;
    let end_date = if end == schedule::OPEN_ENDED_DATE {
        None
    } else {
        Some(schedule::parse_schedule_date(
            end,
            field_spec::END_DATE,
            line_number,
        )?)
    };
    let days_run = DaysRun::parse(days, line_number)?;
    Ok(Schedule {
        schedule_id: schedule_id.to_string(),
        start_date,
        end_date,
        days_run,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// places values at fixed offsets of an otherwise blank record
    pub fn record(prefix: &str, fields: &[(usize, &str)], width: usize) -> String {
        let mut chars: Vec<char> = " ".repeat(width).chars().collect();
        for (i, c) in prefix.chars().enumerate() {
            chars[i] = c;
        }
        for (start, value) in fields {
            for (i, c) in value.chars().enumerate() {
                chars[start + i] = c;
            }
        }
        chars.into_iter().collect::<String>().trim_end().to_string()
    }

    pub fn bs(kind: &str, uid: &str, start: &str, end: &str, days: &str) -> String {
        record(kind, &[(3, uid), (9, start), (15, end), (21, days)], 80)
    }

    pub fn lo(tiploc: &str, departure: &str, activity: &str) -> String {
        record("LO", &[(2, tiploc), (10, departure), (29, activity)], 80)
    }

    pub fn li(tiploc: &str, departure: &str, activity: &str) -> String {
        record("LI", &[(2, tiploc), (15, departure), (42, activity)], 80)
    }

    pub fn lt(tiploc: &str, arrival: &str, activity: &str) -> String {
        record("LT", &[(2, tiploc), (15, arrival), (25, activity)], 80)
    }

    fn parse(lines: &[String]) -> McaTimetable {
        let text = std::iter::once(String::from("HDTPS.UDFROC1.PD191206"))
            .chain(lines.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n");
        parse_mca(text.as_bytes(), "test.mca").unwrap()
    }

    #[test]
    fn test_schedule_block_is_tagged_and_terminated() {
        let timetable = parse(&[
            bs("BSN", "C10001", "191208", "200516", "1111100"),
            String::from("BX         SRY"),
            lo("KNGX", "0800", "TB"),
            li("PBRO", "0845", "T"),
            String::from("CRPBRO    XX1A2345"),
            lt("YORK", "0950", "TF"),
            // outside of any block
            li("DRLNGTN", "1010", "T"),
        ]);
        assert_eq!(timetable.schedules.len(), 1);
        let schedule = &timetable.schedules[0];
        assert_eq!(schedule.schedule_id, "C100011912082005161111100");
        assert_eq!(
            schedule.end_date,
            chrono::NaiveDate::from_ymd_opt(2020, 5, 16)
        );
        assert_eq!(timetable.stops.len(), 3);
        assert!(timetable
            .stops
            .iter()
            .all(|s| s.schedule_id == schedule.schedule_id));
        assert_eq!(timetable.stops[0].departure_time, "0800");
        assert_eq!(timetable.stops[1].tiploc_code, "PBRO");
        assert_eq!(timetable.stops[2].tiploc_code, "YORK");
        assert_eq!(timetable.stops[2].activity_type, "TF");
    }

    #[test]
    fn test_deleted_schedules_open_no_block() {
        let timetable = parse(&[
            bs("BSD", "C10002", "191208", "200516", "1111100"),
            lo("KNGX", "0800", "TB"),
            lt("YORK", "0950", "TF"),
        ]);
        assert!(timetable.schedules.is_empty());
        assert!(timetable.stops.is_empty());
    }

    #[test]
    fn test_revised_schedule_opens_block() {
        let timetable = parse(&[
            bs("BSR", "C10003", "191208", "999999", "0010000"),
            lo("KNGX", "0800", "TB"),
            lt("YORK", "0950", "TF"),
        ]);
        assert_eq!(timetable.schedules.len(), 1);
        assert_eq!(timetable.schedules[0].end_date, None);
        assert_eq!(timetable.stops.len(), 2);
    }

    #[test]
    fn test_repeated_schedule_ids_are_dropped() {
        let timetable = parse(&[
            bs("BSN", "C10004", "191208", "200516", "1111100"),
            lo("KNGX", "0800", "TB"),
            lt("YORK", "0950", "TF"),
            bs("BSN", "C10004", "191208", "200516", "1111100"),
            lo("KNGX", "0800", "TB"),
            lt("YORK", "0950", "TF"),
        ]);
        assert_eq!(timetable.schedules.len(), 1);
        assert_eq!(timetable.stops.len(), 2);
    }

    #[test]
    fn test_invalid_date_reports_line() {
        let text = [
            String::from("header"),
            bs("BSN", "C10005", "19XX08", "200516", "1111100"),
        ]
        .join("\n");
        match parse_mca(text.as_bytes(), "test.mca") {
            Err(TimetableError::InvalidField { line, field, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(field, field_spec::START_DATE);
            }
            other => panic!("expected InvalidField, found {other:?}"),
        }
    }
}
