use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Money amounts in whole Indian rupees.
pub type Rupees = i64;

/// Parse a timestamp as the upstream API emits it.
///
/// Accepts RFC 3339 (`2024-01-15T10:20:30Z`), offset-less date-times
/// (`2024-01-15T10:20:30.123`, assumed UTC) and bare dates (midnight UTC).
pub fn parse_upstream_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    parse_upstream_date(raw)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parse the date part of an upstream date or date-time string.
pub fn parse_upstream_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_rfc3339() {
        let ts = parse_upstream_timestamp("2024-01-15T10:20:30Z").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn parses_offsetless_datetime_as_utc() {
        let ts = parse_upstream_timestamp("2024-01-15T10:20:30.1234567").unwrap();
        assert_eq!((ts.day(), ts.minute(), ts.second()), (15, 20, 30));
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let ts = parse_upstream_timestamp("2025-10-20").unwrap();
        assert_eq!((ts.month(), ts.day(), ts.hour()), (10, 20, 0));
    }

    #[test]
    fn date_part_of_datetime() {
        assert_eq!(
            parse_upstream_date("2025-10-21T00:00:00"),
            NaiveDate::from_ymd_opt(2025, 10, 21)
        );
        assert_eq!(parse_upstream_date("garbage"), None);
    }
}
