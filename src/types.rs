//! Shared types, unit constants and calendar helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seconds per day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Kilometers per astronomical unit
pub const AU_TO_KM: f64 = 1.495978707e8;

/// Kilometers per lunar distance (mean Earth-Moon distance)
pub const LUNAR_DISTANCE_KM: f64 = 384_400.0;

/// Stable identifier of a near-earth object, as issued by the NeoWs API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeoId(pub String);

impl NeoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NeoId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Get the current wall-clock time as a Unix timestamp in seconds.
pub fn current_unix_seconds() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Format a Unix timestamp as `YYYY-MM-DD` (UTC), the date format NeoWs expects.
pub fn unix_to_date_string(unix_secs: i64) -> String {
    let (year, month, day) = days_to_ymd(unix_secs.div_euclid(SECONDS_PER_DAY));
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Parse a `YYYY-MM-DD` date into a Unix timestamp at midnight UTC.
///
/// Trailing content after the day (for example a time of day) is ignored.
pub fn parse_date_to_unix(date: &str) -> Option<i64> {
    let mut parts = date.get(..10)?.splitn(3, '-');
    let year: i64 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(ymd_to_days(year, month, day) * SECONDS_PER_DAY)
}

/// Convert days since Unix epoch to year, month, day
pub fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    // Gregorian calendar, shifted so the era starts on March 1st
    let shifted = days + 719468;

    let era = if shifted >= 0 {
        shifted / 146097
    } else {
        (shifted - 146096) / 146097
    };

    let day_of_era = (shifted - era * 146097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}

/// Convert a calendar date to days since Unix epoch (inverse of [`days_to_ymd`]).
pub fn ymd_to_days(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let year_of_era = year - era * 400;
    let mp = (if month > 2 { month - 3 } else { month + 9 }) as i64;
    let day_of_year = (153 * mp + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146097 + day_of_era - 719468
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_date_string() {
        assert_eq!(unix_to_date_string(0), "1970-01-01");
        assert_eq!(unix_to_date_string(SECONDS_PER_DAY - 1), "1970-01-01");
    }

    #[test]
    fn test_known_date() {
        // 2024-01-01T00:00:00Z
        assert_eq!(unix_to_date_string(1_704_067_200), "2024-01-01");
        assert_eq!(parse_date_to_unix("2024-01-01"), Some(1_704_067_200));
    }

    #[test]
    fn test_leap_day() {
        let unix = parse_date_to_unix("2024-02-29").unwrap();
        assert_eq!(unix_to_date_string(unix), "2024-02-29");
        assert_eq!(unix_to_date_string(unix + SECONDS_PER_DAY), "2024-03-01");
    }

    #[test]
    fn test_parse_ignores_time_of_day() {
        assert_eq!(
            parse_date_to_unix("2024-01-02 08:30"),
            parse_date_to_unix("2024-01-02")
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date_to_unix(""), None);
        assert_eq!(parse_date_to_unix("2024-Jan-01"), None);
        assert_eq!(parse_date_to_unix("2024-13-01"), None);
    }

    #[test]
    fn test_ymd_inverse() {
        for days in [-1000, -1, 0, 1, 10_957, 19_723, 40_000] {
            let (y, m, d) = days_to_ymd(days);
            assert_eq!(ymd_to_days(y as i64, m, d), days);
        }
    }
}
