//! Calendar date to UNIX timestamp conversion

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Zone a naive date-time is interpreted in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Zone {
    #[default]
    Utc,
    Local,
}

/// Convert a calendar date-time to seconds since the UNIX epoch
pub fn datetime_to_timestamp(date_time: NaiveDateTime, zone: Zone) -> Result<i64, CoreError> {
    match zone {
        Zone::Utc => Ok(date_time.and_utc().timestamp()),
        Zone::Local => resolve_local(Local.from_local_datetime(&date_time), date_time),
    }
}

fn resolve_local<Tz: TimeZone>(
    mapped: LocalResult<DateTime<Tz>>,
    date_time: NaiveDateTime,
) -> Result<i64, CoreError> {
    match mapped {
        LocalResult::Single(dt) => Ok(dt.timestamp()),
        // DST fold: take the earlier instant
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp()),
        LocalResult::None => Err(CoreError::InvalidInput(format!(
            "{} does not exist in the local time zone",
            date_time
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{DEFAULT_RANGE_END, DEFAULT_RANGE_START};
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_utc_epoch() {
        assert_eq!(datetime_to_timestamp(midnight(1970, 1, 1), Zone::Utc).unwrap(), 0);
    }

    #[test]
    fn test_default_range_dates() {
        assert_eq!(
            datetime_to_timestamp(midnight(1898, 6, 28), Zone::Utc).unwrap(),
            DEFAULT_RANGE_START
        );
        assert_eq!(
            datetime_to_timestamp(midnight(2016, 2, 3), Zone::Utc).unwrap(),
            DEFAULT_RANGE_END
        );
    }

    #[test]
    fn test_local_matches_chrono() {
        let noon = midnight(2016, 2, 3) + chrono::Duration::hours(12);
        let expected = Local.from_local_datetime(&noon).earliest().unwrap().timestamp();
        assert_eq!(datetime_to_timestamp(noon, Zone::Local).unwrap(), expected);
    }

    #[test]
    fn test_ambiguous_local_takes_earlier() {
        let date_time = midnight(2016, 11, 6) + chrono::Duration::hours(1);
        let early = FixedOffset::west_opt(4 * 3600).unwrap().from_local_datetime(&date_time).unwrap();
        let late = FixedOffset::west_opt(5 * 3600).unwrap().from_local_datetime(&date_time).unwrap();
        let timestamp = resolve_local(LocalResult::Ambiguous(early, late), date_time).unwrap();
        assert_eq!(timestamp, early.timestamp());
        assert!(timestamp < late.timestamp());
    }

    #[test]
    fn test_nonexistent_local_time() {
        let date_time = midnight(2016, 3, 13) + chrono::Duration::hours(2);
        let missing: LocalResult<DateTime<Utc>> = LocalResult::None;
        let err = resolve_local(missing, date_time).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref msg) if msg.contains("2016-03-13 02:00:00")));
    }
}
