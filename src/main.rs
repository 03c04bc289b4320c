mod cli;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use cli::{Cli, Commands, DaySelector, WeatherArgs};
use salescast::logic::aggregation;
use salescast::models::{HourlyReading, ThresholdTable};
use salescast::{categorize, to_trend_signal, weekday_index, Config, ForecastEvaluator};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Categorize { dimension, value } => {
            let (category, multiplier) = categorize(dimension, value);
            print_json(&serde_json::json!({
                "dimension": dimension,
                "value": value,
                "category": category.as_str(),
                "multiplier": multiplier,
            }))?;
        }
        Commands::Classify { value, day } => {
            let evaluator = build_evaluator(&config)?;
            let (weekday, month) = resolve_day(&day);
            let result = evaluator.evaluate(value, weekday, month)?;

            #[derive(Serialize)]
            struct Output<'a> {
                #[serde(flatten)]
                result: &'a salescast::models::ClassificationResult,
                trend: salescast::models::TrendSignal,
            }
            print_json(&Output {
                result: &result,
                trend: to_trend_signal(&result),
            })?;
        }
        Commands::Expect { weekday, weather } => {
            let evaluator = build_evaluator(&config)?;
            let conditions = weather_conditions(&config, &weather);
            let expected = evaluator.project_expected(weekday, &conditions)?;
            print_json(&expected)?;
        }
        Commands::Assess { value, day, weather } => {
            let evaluator = build_evaluator(&config)?;
            let (weekday, month) = resolve_day(&day);
            let conditions = weather_conditions(&config, &weather);
            let assessment = evaluator.assess(value, weekday, month, &conditions)?;
            print_json(&assessment)?;
        }
        Commands::Aggregate { input, full } => {
            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let readings = HourlyReading::parse_many(&content)
                .with_context(|| format!("Failed to parse {}", input.display()))?;

            if full {
                print_json(&aggregation::summarize_days(&readings))?;
            } else {
                print_json(&aggregation::aggregate_daily(&readings))?;
            }
        }
        Commands::Check => {
            let evaluator = build_evaluator(&config)?;
            let table = evaluator.table();
            let reference_month = evaluator.reference_month();
            println!(
                "Config OK. Threshold table {} has {} entries; complete months: {:?}",
                config.thresholds.path.display(),
                table.len(),
                table.complete_months()
            );

            let missing = table.missing_weekdays(reference_month);
            if !missing.is_empty() {
                println!(
                    "Warning: reference month {} has no baseline for weekdays {:?}",
                    reference_month, missing
                );
            }
        }
    }

    Ok(())
}

fn build_evaluator(config: &Config) -> Result<ForecastEvaluator> {
    let table = ThresholdTable::load(&config.thresholds.path).with_context(|| {
        format!(
            "Failed to load threshold table from {}",
            config.thresholds.path.display()
        )
    })?;
    Ok(ForecastEvaluator::new(
        Arc::new(table),
        config.evaluator.reference_month,
    )?)
}

fn resolve_day(day: &DaySelector) -> (u32, u32) {
    match (day.weekday, day.month) {
        (Some(weekday), Some(month)) => (weekday, month),
        _ => {
            let date: NaiveDate = day.date.unwrap_or_else(|| Local::now().date_naive());
            (weekday_index(date), date.month())
        }
    }
}

fn weather_conditions(
    config: &Config,
    weather: &WeatherArgs,
) -> salescast::models::WeatherConditions {
    config
        .defaults
        .conditions(weather.temperature, weather.precipitation, weather.radiation)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
