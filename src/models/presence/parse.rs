use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use csv::{ReaderBuilder, StringRecord};

use super::types::{DayPresence, PresenceLog, PresenceRecord};
use crate::errors::AppError;

/// Why a row was dropped. Row-level problems never abort the load; they are
/// logged at debug level and the row is skipped whole.
#[derive(Debug)]
enum MalformedRecord {
    UserId(std::num::ParseIntError),
    Date(chrono::ParseError),
    Time(chrono::ParseError),
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedRecord::UserId(e) => write!(f, "bad user id: {e}"),
            MalformedRecord::Date(e) => write!(f, "bad date: {e}"),
            MalformedRecord::Time(e) => write!(f, "bad time: {e}"),
        }
    }
}

fn parse_row(record: &StringRecord) -> Result<PresenceRecord, MalformedRecord> {
    let user_id = record[0]
        .trim()
        .parse::<i64>()
        .map_err(MalformedRecord::UserId)?;
    let date =
        NaiveDate::parse_from_str(&record[1], "%Y-%m-%d").map_err(MalformedRecord::Date)?;
    let entry =
        NaiveTime::parse_from_str(&record[2], "%H:%M:%S").map_err(MalformedRecord::Time)?;
    let leave =
        NaiveTime::parse_from_str(&record[3], "%H:%M:%S").map_err(MalformedRecord::Time)?;
    Ok(PresenceRecord { user_id, date, entry, leave })
}

/// Builds a presence log from CSV input, grouped by user id and date.
///
/// Rows must be `user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS`. Rows with any other
/// field count are ignored without logging (the upstream export wraps the
/// data in header and footer lines). Rows that fail to parse are logged and
/// skipped. A later row for the same user and date overwrites the earlier
/// one.
pub fn read_log<R: Read>(input: R) -> PresenceLog {
    let mut data = PresenceLog::new();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::debug!("unreadable line {}: {}", line + 1, err);
                continue;
            }
        };
        if record.len() != 4 {
            continue;
        }
        match parse_row(&record) {
            Ok(rec) => {
                data.entry(rec.user_id)
                    .or_default()
                    .insert(rec.date, DayPresence { entry: rec.entry, leave: rec.leave });
            }
            Err(err) => {
                log::debug!("problem with line {}: {}", line + 1, err);
            }
        }
    }

    data
}

/// Loads the presence log from a CSV file. Fails only when the file cannot
/// be opened; an empty or fully malformed file yields an empty log.
pub fn load(path: &Path) -> Result<PresenceLog, AppError> {
    let file = File::open(path)?;
    Ok(read_log(file))
}
