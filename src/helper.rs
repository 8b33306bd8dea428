use std::borrow::Cow;

use chrono::{DateTime, Utc};

const COMPACT_UNITS: [&str; 5] = ["", "K", "M", "B", "T"];

/// `42`, `1.2K`, `3.4M`
pub fn format_number(number: i64) -> String {
    use numfmt::*;
    let formatter = Formatter::new().build_scales(1000, COMPACT_UNITS.to_vec());
    match formatter {
        Ok(formatter) => formatter
            .precision(Precision::Significance(2))
            .fmt(number as f64)
            .to_string(),
        Err(e) => {
            log::error!("Could not build number scales: {e:?}");
            number.to_string()
        }
    }
}

/// Compact age of `timestamp` as seen at `now`:
/// `42s`, `5m`, `3h`, or the plain date (`Mar 7`) once it is a day old.
/// Timestamps ahead of `now` count as just posted.
pub fn relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds().max(0);
    if seconds < 60 {
        format!("{seconds}s")
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h", seconds / 3600)
    } else {
        timestamp.format("%b %-d").to_string()
    }
}

/// `March 7, 2024`
pub fn format_article_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%B %-d, %Y").to_string()
}

/// Cut `text` after `threshold` characters and mark the cut with an ellipsis
pub fn truncate_excerpt(text: &str, threshold: usize) -> Cow<'_, str> {
    if text.chars().count() <= threshold {
        return Cow::Borrowed(text);
    }
    let mut cut: String = text.chars().take(threshold).collect();
    cut.push('…');
    Cow::Owned(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 18, 30, 0).unwrap()
    }

    #[test]
    fn relative_time_buckets() {
        let now = now();
        assert_eq!(relative_time(&now, &now), "0s");
        assert_eq!(relative_time(&(now - Duration::seconds(59)), &now), "59s");
        assert_eq!(relative_time(&(now - Duration::seconds(60)), &now), "1m");
        assert_eq!(relative_time(&(now - Duration::seconds(3599)), &now), "59m");
        assert_eq!(relative_time(&(now - Duration::seconds(3600)), &now), "1h");
        assert_eq!(relative_time(&(now - Duration::seconds(86399)), &now), "23h");
    }

    #[test]
    fn relative_time_falls_back_to_date() {
        let now = now();
        let posted = Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap();
        assert_eq!(relative_time(&posted, &now), "Mar 7");
        assert_eq!(relative_time(&(now - Duration::days(1)), &now), "Mar 19");
    }

    #[test]
    fn future_timestamps_are_fresh() {
        let now = now();
        assert_eq!(relative_time(&(now + Duration::seconds(30)), &now), "0s");
    }

    #[test]
    fn article_dates_use_the_long_form() {
        let date = Utc.with_ymd_and_hms(2023, 11, 2, 0, 0, 0).unwrap();
        assert_eq!(format_article_date(&date), "November 2, 2023");
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(56), "56");
        assert_eq!(format_number(1200), "1.2K");
        assert_eq!(format_number(3_400_000), "3.4M");
    }

    #[test]
    fn truncation_counts_characters() {
        assert!(matches!(truncate_excerpt("abc", 3), Cow::Borrowed("abc")));
        assert_eq!(truncate_excerpt("äöüß", 2), "äö…");
    }
}
