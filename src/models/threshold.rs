use crate::error::{Result, SalesCastError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub const MONTHS: std::ops::RangeInclusive<u32> = 1..=12;
pub const WEEKDAYS: std::ops::RangeInclusive<u32> = 0..=6;

/// Historical sales statistics for one (month, weekday) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    /// Weekday label, e.g. "Monday"
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "media")]
    pub mean: f64,
    pub q1: f64,
    pub q3: f64,
}

impl ThresholdEntry {
    pub fn new(name: impl Into<String>, mean: f64, q1: f64, q3: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            q1,
            q3,
        }
    }

    fn validate(&self, month: u32, weekday: u32) -> Result<()> {
        if !(self.mean.is_finite() && self.q1.is_finite() && self.q3.is_finite()) {
            return Err(SalesCastError::InvalidData(format!(
                "non-finite statistics for month {}, weekday {}",
                month, weekday
            )));
        }
        if !(self.q1 <= self.mean && self.mean <= self.q3) {
            return Err(SalesCastError::InvalidData(format!(
                "month {}, weekday {}: expected q1 <= mean <= q3, got q1={} mean={} q3={}",
                month, weekday, self.q1, self.mean, self.q3
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RawMonth {
    #[serde(alias = "dias")]
    days: HashMap<String, ThresholdEntry>,
}

/// Read-only table of historical baselines keyed by (month 1-12, weekday 0-6).
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct ThresholdTable {
    entries: BTreeMap<(u32, u32), ThresholdEntry>,
}

impl ThresholdTable {
    /// Build a table from explicit entries, validating keys and statistics.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ((u32, u32), ThresholdEntry)>,
    ) -> Result<Self> {
        let mut map = BTreeMap::new();
        for ((month, weekday), entry) in entries {
            check_key(month, weekday)?;
            entry.validate(month, weekday)?;
            if map.insert((month, weekday), entry).is_some() {
                return Err(SalesCastError::InvalidData(format!(
                    "duplicate entry for month {}, weekday {}",
                    month, weekday
                )));
            }
        }
        Ok(Self { entries: map })
    }

    /// Parse the JSON layout `{"<month>": {"days": {"<weekday>": {...}}}}`.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, RawMonth> = serde_json::from_str(content)?;

        let mut entries = Vec::new();
        for (month_key, month) in raw {
            let month_num = parse_key(&month_key, "month")?;
            for (day_key, entry) in month.days {
                let weekday = parse_key(&day_key, "weekday")?;
                entries.push(((month_num, weekday), entry));
            }
        }

        Self::from_entries(entries)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SalesCastError::Config(format!(
                "Failed to read threshold table {:?}: {}",
                path, e
            ))
        })?;
        let table = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded {} threshold entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn get(&self, month: u32, weekday: u32) -> Option<&ThresholdEntry> {
        self.entries.get(&(month, weekday))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weekdays with no entry for `month`
    pub fn missing_weekdays(&self, month: u32) -> Vec<u32> {
        WEEKDAYS
            .filter(|d| !self.entries.contains_key(&(month, *d)))
            .collect()
    }

    /// Months for which the table has all seven weekdays
    pub fn complete_months(&self) -> Vec<u32> {
        MONTHS
            .filter(|m| WEEKDAYS.all(|d| self.entries.contains_key(&(*m, d))))
            .collect()
    }
}

fn parse_key(key: &str, what: &str) -> Result<u32> {
    key.trim()
        .parse::<u32>()
        .map_err(|_| SalesCastError::InvalidData(format!("invalid {} key '{}'", what, key)))
}

fn check_key(month: u32, weekday: u32) -> Result<()> {
    if !MONTHS.contains(&month) {
        return Err(SalesCastError::InvalidData(format!(
            "month {} outside 1-12",
            month
        )));
    }
    if !WEEKDAYS.contains(&weekday) {
        return Err(SalesCastError::InvalidData(format!(
            "weekday {} outside 0-6",
            weekday
        )));
    }
    Ok(())
}
