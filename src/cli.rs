use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use salescast::models::WeatherDimension;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "salescast",
    version,
    about = "Classify sales forecasts against historical, weather-adjusted baselines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Either an explicit weekday/month pair or a calendar date
#[derive(Args)]
pub struct DaySelector {
    /// Weekday, 0 = Monday .. 6 = Sunday
    #[arg(long, requires = "month", conflicts_with = "date")]
    pub weekday: Option<u32>,

    /// Month, 1-12
    #[arg(long, requires = "weekday")]
    pub month: Option<u32>,

    /// Calendar date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct WeatherArgs {
    /// Daily (maximum) temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Daily precipitation in mm
    #[arg(long)]
    pub precipitation: Option<f64>,

    /// Daily solar radiation
    #[arg(long)]
    pub radiation: Option<f64>,
}

fn parse_dimension(s: &str) -> Result<WeatherDimension, String> {
    WeatherDimension::from_str(s).ok_or_else(|| {
        format!(
            "unknown dimension '{}' (expected temperature, precipitation or radiation)",
            s
        )
    })
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bucket a single weather reading and show its multiplier
    Categorize {
        #[arg(value_parser = parse_dimension)]
        dimension: WeatherDimension,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Classify a forecast value against the historical quartiles
    Classify {
        value: f64,
        #[command(flatten)]
        day: DaySelector,
    },
    /// Project expected sales for a weekday under given weather
    Expect {
        /// Weekday, 0 = Monday .. 6 = Sunday
        #[arg(long)]
        weekday: u32,
        #[command(flatten)]
        weather: WeatherArgs,
    },
    /// Classification, weather projection and contributing factors together
    Assess {
        value: f64,
        #[command(flatten)]
        day: DaySelector,
        #[command(flatten)]
        weather: WeatherArgs,
    },
    /// Sum hourly precipitation records (JSON array) into daily totals
    Aggregate {
        input: PathBuf,
        /// Include daily max temperature and radiation
        #[arg(long)]
        full: bool,
    },
    /// Validate config and load the threshold table
    Check,
}
