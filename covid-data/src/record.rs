use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};
use derive_new::new;
use serde::{de, Deserialize, Deserializer};

/// Display name of the nationwide sentinel.
pub const NATIONWIDE_LABEL: &str = "All (Nationwide)";

/// Format of the `date` field. Text following the seconds (e.g. a `Z`) is
/// ignored.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Either a US state code or the nationwide aggregate.
///
/// Records decoded without a `state` field belong to `Nationwide`.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(from = "Option<String>")]
pub enum Jurisdiction {
    #[default]
    Nationwide,
    State(String),
}

impl From<Option<String>> for Jurisdiction {
    fn from(code: Option<String>) -> Self {
        match code {
            Some(code) => Jurisdiction::State(code),
            None => Jurisdiction::Nationwide,
        }
    }
}

impl Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Jurisdiction::Nationwide => write!(f, "{}", NATIONWIDE_LABEL),
            Jurisdiction::State(code) => write!(f, "{}", code),
        }
    }
}

/// One day of statistics for a jurisdiction, as delivered by the API.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub positive_increase: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub negative_increase: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub death_increase: i64,
    #[serde(default, rename = "state")]
    pub jurisdiction: Jurisdiction,
}

impl DailyRecord {
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_and_remainder(raw, DATE_FORMAT).map(|(date, _remainder)| date)
}

// The API serves `date` either as text or as a compact `yyyymmdd` integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Compact(u32),
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    match RawDate::deserialize(deserializer)? {
        RawDate::Text(raw) => parse_date(&raw)
            .map_err(|err| de::Error::custom(format!("invalid date '{}': {}", raw, err))),
        RawDate::Compact(raw) => {
            let (year, month, day) = (raw / 10_000, (raw / 100) % 100, raw % 100);
            NaiveDate::from_ymd_opt(year as i32, month, day)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .ok_or_else(|| de::Error::custom(format!("invalid date '{}'", raw)))
        }
    }
}

// Counts may be `null` in the source data, those count as zero.
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Option::unwrap_or_default)
}
