use crate::{LedgerError, Result};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Textual format used for statement bounds and operation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub type Timestamp = DateTime<Local>;

/// Reads the system clock. Operations are stamped with this and nothing else.
pub fn now() -> Timestamp {
    Local::now()
}

/// Parses a local wall-clock time in [`DATE_FORMAT`].
///
/// When a time is ambiguous (clocks going back) the earliest instant is used; a time skipped by
/// a clock change does not exist and is rejected.
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
    let invalid = || LedgerError::InvalidTimestamp(input.to_string());

    let naive = NaiveDateTime::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| invalid())?;

    Local.from_local_datetime(&naive).earliest().ok_or_else(invalid)
}

pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format() {
        let timestamp = parse_timestamp("2021-04-02 16:20:29").unwrap();

        assert_eq!(format_timestamp(&timestamp), "2021-04-02 16:20:29");
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(parse_timestamp(" 2020-01-01 00:00:00 ").is_ok());
    }

    #[test]
    fn parse_rejects_other_formats() {
        for input in ["2021-04-02", "02/04/2021 16:20:29", "2021-13-01 00:00:00", "yesterday"] {
            assert_eq!(
                parse_timestamp(input),
                Err(LedgerError::InvalidTimestamp(input.to_string()))
            );
        }
    }
}
