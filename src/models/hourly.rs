use crate::error::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A sub-daily weather record as delivered upstream.
///
/// Different source generations name the same quantity differently, so the
/// record is kept as a loose field map and read through accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyReading {
    fields: Map<String, Value>,
}

impl HourlyReading {
    /// Wrap a JSON value; anything other than an object becomes an empty reading.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn parse_many(content: &str) -> Result<Vec<Self>> {
        let values: Vec<Value> = serde_json::from_str(content)?;
        Ok(values.into_iter().map(Self::from_value).collect())
    }

    /// Numeric field value; present-but-non-numeric fields read as absent
    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            _ => None,
        })
    }

    /// Calendar date of the reading: the first of `fullDate`, `date` that
    /// holds a parseable date string
    pub fn date(&self) -> Option<NaiveDate> {
        ["fullDate", "date"].iter().find_map(|key| {
            self.fields
                .get(*key)
                .and_then(Value::as_str)
                .and_then(parse_calendar_date)
        })
    }
}

/// Parse `YYYY-MM-DD` or an ISO datetime starting with one
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Summed precipitation for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPrecipitation {
    pub date: NaiveDate,
    pub total: f64,
}

/// Per-day weather figures derived from hourly readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub precipitation_mm: f64,
    pub max_temperature_c: Option<f64>,
    pub radiation: Option<f64>,
}
