use serde::{Deserialize, Serialize};

/// Which weather reading a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherDimension {
    Temperature,
    Precipitation,
    Radiation,
}

impl WeatherDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherDimension::Temperature => "temperature",
            WeatherDimension::Precipitation => "precipitation",
            WeatherDimension::Radiation => "radiation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" => Some(WeatherDimension::Temperature),
            "precipitation" | "rain" => Some(WeatherDimension::Precipitation),
            "radiation" | "solar" => Some(WeatherDimension::Radiation),
            _ => None,
        }
    }
}

impl std::fmt::Display for WeatherDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mean daily temperature band (°C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Cold,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub fn multiplier(&self) -> f64 {
        match self {
            TemperatureBand::Cold => 0.56,
            TemperatureBand::Mild => 1.00,
            TemperatureBand::Warm => 1.28,
            TemperatureBand::Hot => 1.38,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "cold",
            TemperatureBand::Mild => "mild",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Hot => "hot",
        }
    }
}

/// Daily precipitation band (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipitationBand {
    None,
    Light,
    Moderate,
    Heavy,
}

impl PrecipitationBand {
    pub fn multiplier(&self) -> f64 {
        match self {
            PrecipitationBand::None => 1.00,
            PrecipitationBand::Light => 0.67,
            PrecipitationBand::Moderate => 0.59,
            PrecipitationBand::Heavy => 0.51,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrecipitationBand::None => "none",
            PrecipitationBand::Light => "light",
            PrecipitationBand::Moderate => "moderate",
            PrecipitationBand::Heavy => "heavy",
        }
    }
}

/// Daily solar radiation band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiationBand {
    Low,
    Medium,
    High,
}

impl RadiationBand {
    pub fn multiplier(&self) -> f64 {
        match self {
            RadiationBand::Low => 0.45,
            RadiationBand::Medium => 0.66,
            RadiationBand::High => 1.00,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RadiationBand::Low => "low",
            RadiationBand::Medium => "medium",
            RadiationBand::High => "high",
        }
    }
}

/// A bucket from any of the three dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "dimension", content = "band", rename_all = "lowercase")]
pub enum WeatherCategory {
    Temperature(TemperatureBand),
    Precipitation(PrecipitationBand),
    Radiation(RadiationBand),
}

impl WeatherCategory {
    pub fn dimension(&self) -> WeatherDimension {
        match self {
            WeatherCategory::Temperature(_) => WeatherDimension::Temperature,
            WeatherCategory::Precipitation(_) => WeatherDimension::Precipitation,
            WeatherCategory::Radiation(_) => WeatherDimension::Radiation,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            WeatherCategory::Temperature(b) => b.multiplier(),
            WeatherCategory::Precipitation(b) => b.multiplier(),
            WeatherCategory::Radiation(b) => b.multiplier(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Temperature(b) => b.as_str(),
            WeatherCategory::Precipitation(b) => b.as_str(),
            WeatherCategory::Radiation(b) => b.as_str(),
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_str(), self.dimension())
    }
}

/// A reading together with the bucket it fell into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorizedReading {
    pub value: f64,
    pub category: WeatherCategory,
    pub multiplier: f64,
}

/// One day's weather figures as consumed by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// Daily temperature in °C; hourly aggregation supplies the day's maximum
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub radiation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_from_str() {
        assert_eq!(
            WeatherDimension::from_str("Temperature"),
            Some(WeatherDimension::Temperature)
        );
        assert_eq!(
            WeatherDimension::from_str(" rain "),
            Some(WeatherDimension::Precipitation)
        );
        assert_eq!(
            WeatherDimension::from_str("radiation"),
            Some(WeatherDimension::Radiation)
        );
        assert_eq!(WeatherDimension::from_str("humidity"), None);
    }

    #[test]
    fn multipliers_are_positive() {
        let all = [
            WeatherCategory::Temperature(TemperatureBand::Cold),
            WeatherCategory::Temperature(TemperatureBand::Mild),
            WeatherCategory::Temperature(TemperatureBand::Warm),
            WeatherCategory::Temperature(TemperatureBand::Hot),
            WeatherCategory::Precipitation(PrecipitationBand::None),
            WeatherCategory::Precipitation(PrecipitationBand::Light),
            WeatherCategory::Precipitation(PrecipitationBand::Moderate),
            WeatherCategory::Precipitation(PrecipitationBand::Heavy),
            WeatherCategory::Radiation(RadiationBand::Low),
            WeatherCategory::Radiation(RadiationBand::Medium),
            WeatherCategory::Radiation(RadiationBand::High),
        ];
        assert!(all.iter().all(|c| c.multiplier() > 0.0));
    }

    #[test]
    fn category_serializes_with_dimension() {
        let json =
            serde_json::to_value(WeatherCategory::Precipitation(PrecipitationBand::Light)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "dimension": "precipitation", "band": "light" })
        );
    }

    #[test]
    fn category_display() {
        assert_eq!(
            WeatherCategory::Temperature(TemperatureBand::Hot).to_string(),
            "hot temperature"
        );
    }
}
