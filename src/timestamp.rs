use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Datelike, Utc};

const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const LATEST_ISO8601: &str = "9999-12-31T23:59:59Z";
const EARLIEST_ISO8601: &str = "0000-01-01T00:00:00Z";

/// What to store in an embed's `timestamp` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Timestamp {
    /// The system time at the moment the timestamp is resolved.
    #[default]
    Now,
    At(DateTime<Utc>),
    /// Stored verbatim. Empty text behaves like [`Timestamp::Now`].
    Text(String),
}

impl Timestamp {
    pub fn resolve(self) -> String {
        match self {
            Self::At(time) => format_iso8601(&time),
            Self::Text(text) if !text.is_empty() => text,
            Self::Text(_) | Self::Now => format_iso8601(&Utc::now()),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(time: DateTime<Utc>) -> Self {
        Self::At(time)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::At(system_time_to_utc(time))
    }
}

/// Converts without panicking; times chrono cannot represent saturate to
/// `MIN_UTC` or `MAX_UTC`.
fn system_time_to_utc(time: SystemTime) -> DateTime<Utc> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs())
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, after.subsec_nanos()))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
        Err(err) => {
            let before = err.duration();
            let nanos = before.subsec_nanos();
            i64::try_from(before.as_secs())
                .ok()
                .and_then(|secs| {
                    // Nanoseconds must stay positive, so borrow a second.
                    if nanos == 0 {
                        DateTime::from_timestamp(-secs, 0)
                    } else {
                        let secs = secs.checked_add(1)?;
                        DateTime::from_timestamp(-secs, 1_000_000_000 - nanos)
                    }
                })
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        }
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Timestamp>> From<Option<T>> for Timestamp {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Now, Into::into)
    }
}

/// Formats `time` as `YYYY-MM-DDTHH:MM:SSZ`, dropping sub-second precision.
///
/// The output is always 20 characters: times after year 9999 clamp to
/// `9999-12-31T23:59:59Z` and times before year 0 to `0000-01-01T00:00:00Z`.
pub fn format_iso8601(time: &DateTime<Utc>) -> String {
    match time.year() {
        year if year > 9999 => LATEST_ISO8601.to_owned(),
        year if year < 0 => EARLIEST_ISO8601.to_owned(),
        _ => time.format(ISO8601_FORMAT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};
    use std::time::{Duration, UNIX_EPOCH};

    fn parse_iso8601(s: &str) -> DateTime<Utc> {
        let naive = NaiveDateTime::parse_from_str(s, ISO8601_FORMAT).unwrap();
        Utc.from_utc_datetime(&naive)
    }

    #[test]
    fn test_format_is_zero_padded() {
        let time = Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_iso8601(&time), "2021-01-02T03:04:05Z");
    }

    #[test]
    fn test_system_time_input() {
        // 2021-01-01T00:00:00Z
        let time = UNIX_EPOCH + Duration::from_secs(1_609_459_200);
        assert_eq!(Timestamp::from(time).resolve(), "2021-01-01T00:00:00Z");
    }

    #[test]
    fn test_system_time_before_epoch() {
        let time = UNIX_EPOCH - Duration::from_millis(1_500);
        assert_eq!(Timestamp::from(time).resolve(), "1969-12-31T23:59:58Z");

        let time = UNIX_EPOCH - Duration::from_secs(86_400);
        assert_eq!(Timestamp::from(time).resolve(), "1969-12-31T00:00:00Z");
    }

    #[test]
    fn test_extreme_system_time_saturates() {
        let far_future = UNIX_EPOCH + Duration::from_secs(1u64 << 50);
        assert_eq!(
            Timestamp::from(far_future),
            Timestamp::At(DateTime::<Utc>::MAX_UTC)
        );
        assert_eq!(Timestamp::from(far_future).resolve(), "9999-12-31T23:59:59Z");

        let far_past = UNIX_EPOCH.checked_sub(Duration::from_secs(1u64 << 50)).unwrap();
        assert_eq!(
            Timestamp::from(far_past),
            Timestamp::At(DateTime::<Utc>::MIN_UTC)
        );
        assert_eq!(Timestamp::from(far_past).resolve(), "0000-01-01T00:00:00Z");
    }

    #[test]
    fn test_format_stays_fixed_width() {
        // 10000-01-01T00:00:00Z
        let time = UNIX_EPOCH + Duration::from_secs(253_402_300_800);
        assert_eq!(Timestamp::from(time).resolve(), "9999-12-31T23:59:59Z");

        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_iso8601(&last), "9999-12-31T23:59:59Z");

        let first = Utc.with_ymd_and_hms(0, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_iso8601(&first), "0000-01-01T00:00:00Z");
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(Timestamp::from("not a date").resolve(), "not a date");
    }

    #[test]
    fn test_empty_text_and_none_mean_now() {
        for ts in [Timestamp::from(""), Timestamp::from(None::<&str>), Timestamp::Now] {
            let before = Utc::now() - chrono::Duration::seconds(1);
            let resolved = parse_iso8601(&ts.resolve());
            let after = Utc::now() + chrono::Duration::seconds(1);
            assert!(before <= resolved && resolved <= after);
        }
    }

    #[test]
    fn test_some_passes_through() {
        assert_eq!(
            Timestamp::from(Some("2020-02-02T02:02:02Z")),
            Timestamp::Text("2020-02-02T02:02:02Z".to_owned())
        );
    }
}
