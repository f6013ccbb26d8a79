//! Calendar days, the key of every dated record

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};

const ISO_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const LONG_FORMAT: &str = "%B %d %Y";


/// A calendar day, without any time or timezone.
///
/// Records are keyed by this normalized value, and it is serialized as an ISO-8601 `YYYY-MM-DD` string.
/// Human-readable renderings (see [`DayKey::display_long`]) are for display only and are never used as keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    date: NaiveDate,
}

impl DayKey {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// The current day, in the local timezone
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.date
    }

    /// The ISO-8601 representation, that is used in storage
    pub fn to_iso_string(&self) -> String {
        self.date.format(ISO_FORMAT).to_string()
    }

    /// A long, human-readable rendering, e.g. "January 10th, 2024".
    ///
    /// Whether the day number carries an ordinal suffix depends on [`crate::config::ORDINAL_DAYS`]
    pub fn display_long(&self) -> String {
        self.format_long(crate::config::ordinal_days())
    }

    fn format_long(&self, ordinal: bool) -> String {
        let day = self.date.day();
        let suffix = if ordinal { ordinal_suffix(day) } else { "" };
        format!("{} {}{}, {}", self.date.format("%B"), day, suffix, self.date.year())
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_iso_string())
    }
}


/// The error returned when a string cannot be read as a calendar day
#[derive(Clone, Debug, PartialEq)]
pub struct ParseDayError {
    input: String,
}

impl Display for ParseDayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:?} is not a valid date", self.input)
    }
}

impl std::error::Error for ParseDayError {}

impl FromStr for DayKey {
    type Err = ParseDayError;

    /// Accepts `2024-01-10`, but also full timestamps such as `2024-01-10T00:00:00.000Z`,
    /// which is what browsers write when they serialize a date. Only the (UTC) day is kept.
    ///
    /// Long renderings ("January 10th, 2024", "January 10, 2024") are accepted as well, since older data used them as keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, ISO_FORMAT) {
            return Ok(Self::from(date));
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from(timestamp.with_timezone(&Utc).date_naive()));
        }
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(s, NAIVE_TIMESTAMP_FORMAT) {
            return Ok(Self::from(timestamp.date()));
        }
        if let Some(date) = parse_long(s) {
            return Ok(Self::from(date));
        }
        Err(ParseDayError{ input: s.to_string() })
    }
}

/// Reads "January 10th, 2024". The ordinal suffix and the comma are optional
fn parse_long(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split_whitespace();
    let month = parts.next()?;
    let day = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let day: u32 = day.trim_end_matches(',')
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::parse_from_str(&format!("{} {:02} {:04}", month, day, year), LONG_FORMAT).ok()
}

/// Used to support serde
impl Serialize for DayKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<DayKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_iso_and_timestamps() {
        let expected = DayKey::from_ymd(2024, 1, 10).unwrap();
        assert_eq!("2024-01-10".parse::<DayKey>().unwrap(), expected);
        assert_eq!("2024-01-10T00:00:00.000Z".parse::<DayKey>().unwrap(), expected);
        assert_eq!("2024-01-10T23:30:00+00:00".parse::<DayKey>().unwrap(), expected);
        assert_eq!("2024-01-10T08:15:00".parse::<DayKey>().unwrap(), expected);
        // This is still the 9th in UTC
        assert_eq!("2024-01-10T01:00:00+02:00".parse::<DayKey>().unwrap(), DayKey::from_ymd(2024, 1, 9).unwrap());

        assert!("2024-02-30".parse::<DayKey>().is_err());
        assert!("".parse::<DayKey>().is_err());
    }

    #[test]
    fn parse_long_renderings() {
        let expected = DayKey::from_ymd(2024, 1, 10).unwrap();
        assert_eq!("January 10th, 2024".parse::<DayKey>().unwrap(), expected);
        assert_eq!("January 10, 2024".parse::<DayKey>().unwrap(), expected);
        assert_eq!(" january 10th 2024 ".parse::<DayKey>().unwrap(), expected);
        assert_eq!("March 1st, 2024".parse::<DayKey>().unwrap(), DayKey::from_ymd(2024, 3, 1).unwrap());

        // What is displayed can be read back
        let day = DayKey::from_ymd(2023, 12, 22).unwrap();
        assert_eq!(day.format_long(true).parse::<DayKey>().unwrap(), day);
        assert_eq!(day.format_long(false).parse::<DayKey>().unwrap(), day);

        assert!("February 30th, 2024".parse::<DayKey>().is_err());
        assert!("Smarch 10th, 2024".parse::<DayKey>().is_err());
        assert!("January 10th, 2024, noon".parse::<DayKey>().is_err());
        assert!("January th, 2024".parse::<DayKey>().is_err());
    }

    #[test]
    fn long_display() {
        let day = |d| DayKey::from_ymd(2024, 1, d).unwrap();
        assert_eq!(day(10).format_long(true), "January 10th, 2024");
        assert_eq!(day(1).format_long(true), "January 1st, 2024");
        assert_eq!(day(2).format_long(true), "January 2nd, 2024");
        assert_eq!(day(3).format_long(true), "January 3rd, 2024");
        assert_eq!(day(11).format_long(true), "January 11th, 2024");
        assert_eq!(day(13).format_long(true), "January 13th, 2024");
        assert_eq!(day(22).format_long(true), "January 22nd, 2024");
        assert_eq!(day(31).format_long(true), "January 31st, 2024");
        assert_eq!(day(10).format_long(false), "January 10, 2024");
    }

    #[test]
    fn serde_as_iso_string() {
        let day = DayKey::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2024-03-05\"");
        let back: DayKey = serde_json::from_str("\"2024-03-05T00:00:00.000Z\"").unwrap();
        assert_eq!(back, day);
        assert!(serde_json::from_str::<DayKey>("\"not a date\"").is_err());
        assert!(serde_json::from_str::<DayKey>("12").is_err());
    }

    #[test]
    fn ordering_follows_the_calendar() {
        let a = DayKey::from_ymd(2023, 12, 31).unwrap();
        let b = DayKey::from_ymd(2024, 1, 1).unwrap();
        assert!(a < b);
    }
}
