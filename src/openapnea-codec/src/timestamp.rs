use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Day-first date-time layouts, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %I:%M:%S%.f %p",
    "%d/%m/%Y %I:%M %p",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%H:%M:%S %b %d, %Y",
    "%I:%M:%S %p %b %d, %Y",
    "%d %b %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

/// Parses a timestamp cell, reading ambiguous numeric dates as day first.
///
/// RFC 3339 values keep their wall-clock time and drop the offset. Bare dates
/// resolve to midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(time) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(time);
    }

    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.naive_local());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn slash_dates_are_day_first() {
        assert_eq!(
            parse_timestamp("03/04/2024 22:10:05"),
            Some(dt(2024, 4, 3, 22, 10, 5))
        );
        assert_eq!(
            parse_timestamp("13/04/2024 01:00"),
            Some(dt(2024, 4, 13, 1, 0, 0))
        );
    }

    #[test]
    fn day_first_fractional_seconds() {
        let expected = NaiveDate::from_ymd_opt(2024, 4, 3)
            .unwrap()
            .and_hms_milli_opt(22, 0, 1, 500);
        assert_eq!(parse_timestamp("3/4/2024 22:00:01.500"), expected);
        assert_eq!(parse_timestamp("03-04-2024 22:00:01.5"), expected);
        assert_eq!(parse_timestamp("03.04.2024 22:00:01.500"), expected);
        assert_eq!(
            parse_timestamp("03/04/2024 10:00:01.500 PM"),
            expected
        );
    }

    #[test]
    fn month_first_only_dates_are_rejected() {
        assert_eq!(parse_timestamp("04/13/2024 01:00:00"), None);
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(
            parse_timestamp("03/04/2024 10:15:00 PM"),
            Some(dt(2024, 4, 3, 22, 15, 0))
        );
    }

    #[test]
    fn o2ring_export_layout() {
        assert_eq!(
            parse_timestamp("22:10:00 Apr 3, 2024"),
            Some(dt(2024, 4, 3, 22, 10, 0))
        );
        assert_eq!(
            parse_timestamp("10:10:00 PM Apr 3, 2024"),
            Some(dt(2024, 4, 3, 22, 10, 0))
        );
    }

    #[test]
    fn iso_and_rfc3339() {
        assert_eq!(
            parse_timestamp("2024-04-03 22:10:00"),
            Some(dt(2024, 4, 3, 22, 10, 0))
        );
        assert_eq!(
            parse_timestamp("2024-04-03T22:10:00.250"),
            NaiveDate::from_ymd_opt(2024, 4, 3)
                .unwrap()
                .and_hms_milli_opt(22, 10, 0, 250)
        );
        assert_eq!(
            parse_timestamp("2024-04-03T22:10:00+02:00"),
            Some(dt(2024, 4, 3, 22, 10, 0))
        );
    }

    #[test]
    fn bare_date_is_midnight() {
        assert_eq!(parse_timestamp("03/04/2024"), Some(dt(2024, 4, 3, 0, 0, 0)));
    }

    #[test]
    fn garbage_is_missing() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("31/02/2024 00:00:00"), None);
    }
}
