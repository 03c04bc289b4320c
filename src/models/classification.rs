use super::weather::CategorizedReading;
use serde::{Deserialize, Serialize};

/// Qualitative sales level relative to the historical range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    High,
    Medium,
    Low,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::High => "HIGH",
            Classification::Medium => "MEDIUM",
            Classification::Low => "LOW",
        }
    }

    pub fn status(&self) -> RangeStatus {
        match self {
            Classification::High => RangeStatus::Above,
            Classification::Medium => RangeStatus::Within,
            Classification::Low => RangeStatus::Below,
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Classification::High => "Above the historical range for this day",
            Classification::Medium => "Within the typical range for this day",
            Classification::Low => "Below the historical range for this day",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position of a value against the interquartile range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStatus {
    Above,
    Within,
    Below,
}

impl RangeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeStatus::Above => "above",
            RangeStatus::Within => "within",
            RangeStatus::Below => "below",
        }
    }
}

impl std::fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub forecast_value: f64,
    pub expected_baseline: f64,
    pub classification: Classification,
    pub status: RangeStatus,
    pub explanation: String,
    pub deviation_percent: f64,
    pub weekday_label: String,
    pub thresholds: Thresholds,
}

/// Compact KPI direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendSignal {
    Up,
    Down,
    Neutral,
}

impl TrendSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendSignal::Up => "up",
            TrendSignal::Down => "down",
            TrendSignal::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weekday baseline scaled by the day's weather multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedSales {
    pub weekday_label: String,
    pub baseline: f64,
    pub expected: f64,
    pub q1_adjusted: f64,
    pub q3_adjusted: f64,
    pub temperature: CategorizedReading,
    pub precipitation: CategorizedReading,
    pub radiation: CategorizedReading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAssessment {
    pub temperature: CategorizedReading,
    pub precipitation: CategorizedReading,
    pub radiation: CategorizedReading,
    /// Product of the three multipliers
    pub total_impact: f64,
    pub positive_factors: Vec<String>,
    pub negative_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAssessment {
    pub classification: ClassificationResult,
    pub expected: ExpectedSales,
    pub weather: WeatherAssessment,
}
