use super::calculations::combined_multiplier;
use crate::models::{
    CategorizedReading, PrecipitationBand, RadiationBand, TemperatureBand, WeatherAssessment,
    WeatherCategory, WeatherConditions, WeatherDimension,
};

/// Bucket a mean temperature (°C). Lower bounds are inclusive.
pub fn temperature_band(temp_c: f64) -> TemperatureBand {
    if temp_c < 18.0 {
        TemperatureBand::Cold
    } else if temp_c < 24.0 {
        TemperatureBand::Mild
    } else if temp_c < 28.0 {
        TemperatureBand::Warm
    } else {
        TemperatureBand::Hot
    }
}

/// Bucket a daily precipitation total (mm). Exactly 0 is dry; 10 and 30 close
/// the light and moderate buckets.
pub fn precipitation_band(precip_mm: f64) -> PrecipitationBand {
    if precip_mm == 0.0 {
        PrecipitationBand::None
    } else if precip_mm <= 10.0 {
        PrecipitationBand::Light
    } else if precip_mm <= 30.0 {
        PrecipitationBand::Moderate
    } else {
        PrecipitationBand::Heavy
    }
}

pub fn radiation_band(radiation: f64) -> RadiationBand {
    if radiation < 500.0 {
        RadiationBand::Low
    } else if radiation < 1500.0 {
        RadiationBand::Medium
    } else {
        RadiationBand::High
    }
}

/// Map a reading in one dimension to its bucket and multiplier
pub fn categorize(dimension: WeatherDimension, value: f64) -> (WeatherCategory, f64) {
    let category = match dimension {
        WeatherDimension::Temperature => WeatherCategory::Temperature(temperature_band(value)),
        WeatherDimension::Precipitation => {
            WeatherCategory::Precipitation(precipitation_band(value))
        }
        WeatherDimension::Radiation => WeatherCategory::Radiation(radiation_band(value)),
    };
    (category, category.multiplier())
}

pub fn categorize_reading(dimension: WeatherDimension, value: f64) -> CategorizedReading {
    let (category, multiplier) = categorize(dimension, value);
    CategorizedReading {
        value,
        category,
        multiplier,
    }
}

/// Categorize all three readings and list what helps or hurts sales
pub fn assess_weather(conditions: &WeatherConditions) -> WeatherAssessment {
    let temperature = categorize_reading(WeatherDimension::Temperature, conditions.temperature_c);
    let precipitation =
        categorize_reading(WeatherDimension::Precipitation, conditions.precipitation_mm);
    let radiation = categorize_reading(WeatherDimension::Radiation, conditions.radiation);

    let mut positive_factors = Vec::new();
    let mut negative_factors = Vec::new();

    match temperature_band(conditions.temperature_c) {
        TemperatureBand::Warm => positive_factors.push("Warm temperature favors sales".to_string()),
        TemperatureBand::Hot => {
            positive_factors.push("Hot temperature may boost sales".to_string())
        }
        TemperatureBand::Cold => {
            negative_factors.push("Cold temperature hurts sales".to_string())
        }
        TemperatureBand::Mild => {
            negative_factors.push("Mild temperature, neutral effect".to_string())
        }
    }

    match precipitation_band(conditions.precipitation_mm) {
        PrecipitationBand::None => positive_factors.push("No rain favors sales".to_string()),
        PrecipitationBand::Light => {
            positive_factors.push("Light rain, little impact".to_string())
        }
        PrecipitationBand::Moderate => {
            negative_factors.push("Moderate rain may hurt sales".to_string())
        }
        PrecipitationBand::Heavy => negative_factors.push("Heavy rain hurts sales".to_string()),
    }

    match radiation_band(conditions.radiation) {
        RadiationBand::High => {
            positive_factors.push("High solar radiation favors foot traffic".to_string())
        }
        RadiationBand::Medium => {
            negative_factors.push("Moderate solar radiation".to_string())
        }
        RadiationBand::Low => {
            negative_factors.push("Low solar radiation, less foot traffic".to_string())
        }
    }

    let total_impact = combined_multiplier(&[
        temperature.multiplier,
        precipitation.multiplier,
        radiation.multiplier,
    ]);

    WeatherAssessment {
        temperature,
        precipitation,
        radiation,
        total_impact,
        positive_factors,
        negative_factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_boundaries_belong_to_upper_bucket() {
        assert_eq!(temperature_band(17.99), TemperatureBand::Cold);
        assert_eq!(temperature_band(18.0), TemperatureBand::Mild);
        assert_eq!(temperature_band(23.99), TemperatureBand::Mild);
        assert_eq!(temperature_band(24.0), TemperatureBand::Warm);
        assert_eq!(temperature_band(27.99), TemperatureBand::Warm);
        assert_eq!(temperature_band(28.0), TemperatureBand::Hot);
        assert_eq!(temperature_band(-40.0), TemperatureBand::Cold);
        assert_eq!(temperature_band(60.0), TemperatureBand::Hot);
    }

    #[test]
    fn precipitation_boundaries() {
        assert_eq!(precipitation_band(0.0), PrecipitationBand::None);
        assert_eq!(precipitation_band(0.1), PrecipitationBand::Light);
        assert_eq!(precipitation_band(10.0), PrecipitationBand::Light);
        assert_eq!(precipitation_band(10.01), PrecipitationBand::Moderate);
        assert_eq!(precipitation_band(30.0), PrecipitationBand::Moderate);
        assert_eq!(precipitation_band(30.01), PrecipitationBand::Heavy);
    }

    #[test]
    fn radiation_boundaries() {
        assert_eq!(radiation_band(499.9), RadiationBand::Low);
        assert_eq!(radiation_band(500.0), RadiationBand::Medium);
        assert_eq!(radiation_band(1499.9), RadiationBand::Medium);
        assert_eq!(radiation_band(1500.0), RadiationBand::High);
    }

    #[test]
    fn categorize_returns_fixed_multipliers() {
        let cases = [
            (WeatherDimension::Temperature, 10.0, 0.56),
            (WeatherDimension::Temperature, 20.0, 1.00),
            (WeatherDimension::Temperature, 25.0, 1.28),
            (WeatherDimension::Temperature, 35.0, 1.38),
            (WeatherDimension::Precipitation, 0.0, 1.00),
            (WeatherDimension::Precipitation, 5.0, 0.67),
            (WeatherDimension::Precipitation, 20.0, 0.59),
            (WeatherDimension::Precipitation, 45.0, 0.51),
            (WeatherDimension::Radiation, 100.0, 0.45),
            (WeatherDimension::Radiation, 800.0, 0.66),
            (WeatherDimension::Radiation, 2000.0, 1.00),
        ];

        for (dimension, value, expected) in cases {
            let (category, multiplier) = categorize(dimension, value);
            assert_eq!(category.dimension(), dimension);
            assert_eq!(multiplier, expected, "{} at {}", dimension, value);
        }
    }

    #[test]
    fn precipitation_multiplier_never_increases_with_rain() {
        let mut previous = f64::INFINITY;
        let mut p = 0.0;
        while p <= 60.0 {
            let (_, multiplier) = categorize(WeatherDimension::Precipitation, p);
            assert!(multiplier <= previous, "multiplier rose at {}mm", p);
            previous = multiplier;
            p += 0.5;
        }
    }

    #[test]
    fn assessment_lists_factors() {
        let assessment = assess_weather(&WeatherConditions {
            temperature_c: 26.0,
            precipitation_mm: 0.0,
            radiation: 300.0,
        });

        assert_eq!(assessment.positive_factors.len(), 2);
        assert_eq!(assessment.negative_factors.len(), 1);
        assert!(assessment.negative_factors[0].contains("Low solar radiation"));
        assert!((assessment.total_impact - 1.28 * 1.00 * 0.45).abs() < 1e-12);
    }

    #[test]
    fn assessment_in_bad_weather() {
        let assessment = assess_weather(&WeatherConditions {
            temperature_c: 12.0,
            precipitation_mm: 42.0,
            radiation: 900.0,
        });

        assert!(assessment.positive_factors.is_empty());
        assert_eq!(assessment.negative_factors.len(), 3);
        assert_eq!(
            assessment.precipitation.category,
            WeatherCategory::Precipitation(PrecipitationBand::Heavy)
        );
    }
}
