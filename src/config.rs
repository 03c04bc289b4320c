use crate::error::{Result, SalesCastError};
use crate::models::{DailyWeather, WeatherConditions, MONTHS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub defaults: WeatherDefaults,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThresholdsConfig {
    /// JSON file with per-(month, weekday) sales statistics
    pub path: PathBuf,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/sales_thresholds.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluatorConfig {
    /// Month whose baselines feed the weather-adjusted projection
    #[serde(default = "default_reference_month")]
    pub reference_month: u32,
}

fn default_reference_month() -> u32 {
    1
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            reference_month: default_reference_month(),
        }
    }
}

/// Readings used when the upstream source has nothing for a day
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct WeatherDefaults {
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,
    #[serde(default)]
    pub precipitation_mm: f64,
    #[serde(default = "default_radiation")]
    pub radiation: f64,
}

fn default_temperature() -> f64 {
    22.0
}

fn default_radiation() -> f64 {
    800.0
}

impl Default for WeatherDefaults {
    fn default() -> Self {
        Self {
            temperature_c: default_temperature(),
            precipitation_mm: 0.0,
            radiation: default_radiation(),
        }
    }
}

impl WeatherDefaults {
    /// Fill in whichever readings are missing
    pub fn conditions(
        &self,
        temperature_c: Option<f64>,
        precipitation_mm: Option<f64>,
        radiation: Option<f64>,
    ) -> WeatherConditions {
        WeatherConditions {
            temperature_c: temperature_c.unwrap_or(self.temperature_c),
            precipitation_mm: precipitation_mm.unwrap_or(self.precipitation_mm),
            radiation: radiation.unwrap_or(self.radiation),
        }
    }
}

impl DailyWeather {
    pub fn conditions(&self, defaults: &WeatherDefaults) -> WeatherConditions {
        defaults.conditions(
            self.max_temperature_c,
            Some(self.precipitation_mm),
            self.radiation,
        )
    }
}

impl Config {
    /// Load from `config_override`, or the first config found in the standard
    /// locations. Falls back to built-in defaults when no file exists.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(SalesCastError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::warn!("No config file found, using built-in defaults");
                    let config = Config::default();
                    config.validate()?;
                    return Ok(config);
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SalesCastError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml_str(&config_str)?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| SalesCastError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Try XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("salescast").join("config.yaml"))
            .filter(|p| p.exists())
    }

    pub fn validate(&self) -> Result<()> {
        if !MONTHS.contains(&self.evaluator.reference_month) {
            return Err(SalesCastError::Config(format!(
                "evaluator.reference_month must be 1-12, got {}",
                self.evaluator.reference_month
            )));
        }

        let d = &self.defaults;
        if !(d.temperature_c.is_finite() && d.precipitation_mm.is_finite() && d.radiation.is_finite())
        {
            return Err(SalesCastError::Config(
                "weather defaults must be finite numbers".into(),
            ));
        }

        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        re.replace_all(content, |caps: &regex_lite::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
    }
}
