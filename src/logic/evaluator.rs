use super::calculations::{combined_multiplier, deviation_percent, round_money};
use super::categorizer::{assess_weather, categorize_reading};
use crate::error::{Result, SalesCastError};
use crate::models::{
    Classification, ClassificationResult, ExpectedSales, FullAssessment, ThresholdEntry,
    ThresholdTable, Thresholds, WeatherConditions, WeatherDimension, MONTHS, WEEKDAYS,
};
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

/// Weekday index with Monday = 0 and Sunday = 6
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Classifies forecast sales against historical baselines.
///
/// The threshold table is injected at construction and only ever read, so a
/// single evaluator (or clones of it) can serve any number of callers.
#[derive(Debug, Clone)]
pub struct ForecastEvaluator {
    table: Arc<ThresholdTable>,
    reference_month: u32,
}

impl ForecastEvaluator {
    /// `reference_month` selects the baseline period used by
    /// [`project_expected`](Self::project_expected).
    pub fn new(table: Arc<ThresholdTable>, reference_month: u32) -> Result<Self> {
        validate_month(reference_month)?;
        Ok(Self {
            table,
            reference_month,
        })
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    pub fn reference_month(&self) -> u32 {
        self.reference_month
    }

    fn lookup(&self, month: u32, weekday: u32) -> Result<&ThresholdEntry> {
        self.table.get(month, weekday).ok_or_else(|| {
            tracing::warn!(month, weekday, "No historical baseline");
            SalesCastError::MissingBaseline { month, weekday }
        })
    }

    /// Scale the weekday's reference-period baseline and quartiles by the
    /// weather multipliers.
    pub fn project_expected(
        &self,
        weekday: u32,
        conditions: &WeatherConditions,
    ) -> Result<ExpectedSales> {
        validate_weekday(weekday)?;
        let entry = self.lookup(self.reference_month, weekday)?;

        let temperature =
            categorize_reading(WeatherDimension::Temperature, conditions.temperature_c);
        let precipitation =
            categorize_reading(WeatherDimension::Precipitation, conditions.precipitation_mm);
        let radiation = categorize_reading(WeatherDimension::Radiation, conditions.radiation);

        let factor = combined_multiplier(&[
            temperature.multiplier,
            precipitation.multiplier,
            radiation.multiplier,
        ]);

        let expected = ExpectedSales {
            weekday_label: entry.name.clone(),
            baseline: entry.mean,
            expected: round_money(entry.mean * factor),
            q1_adjusted: round_money(entry.q1 * factor),
            q3_adjusted: round_money(entry.q3 * factor),
            temperature,
            precipitation,
            radiation,
        };

        tracing::debug!(
            weekday,
            baseline = expected.baseline,
            factor,
            expected = expected.expected,
            "Projected expected sales"
        );

        Ok(expected)
    }

    /// Classify a forecast against the raw (month, weekday) quartiles.
    ///
    /// Below q1 is LOW, above q3 is HIGH, and both bounds themselves are MEDIUM.
    pub fn evaluate(
        &self,
        forecast_value: f64,
        weekday: u32,
        month: u32,
    ) -> Result<ClassificationResult> {
        validate_forecast(forecast_value)?;
        validate_weekday(weekday)?;
        validate_month(month)?;
        let entry = self.lookup(month, weekday)?;

        let classification = if forecast_value < entry.q1 {
            Classification::Low
        } else if forecast_value > entry.q3 {
            Classification::High
        } else {
            Classification::Medium
        };

        let result = ClassificationResult {
            forecast_value: round_money(forecast_value),
            expected_baseline: entry.mean,
            classification,
            status: classification.status(),
            explanation: classification.explanation().to_string(),
            deviation_percent: deviation_percent(forecast_value, entry.mean),
            weekday_label: entry.name.clone(),
            thresholds: Thresholds {
                low: entry.q1,
                high: entry.q3,
            },
        };

        tracing::debug!(
            forecast_value,
            weekday,
            month,
            classification = %result.classification,
            status = %result.status,
            deviation = result.deviation_percent,
            "Evaluated forecast"
        );

        Ok(result)
    }

    /// [`evaluate`](Self::evaluate) with weekday and month taken from `date`
    pub fn evaluate_on(&self, forecast_value: f64, date: NaiveDate) -> Result<ClassificationResult> {
        self.evaluate(forecast_value, weekday_index(date), date.month())
    }

    /// Quartile classification plus the weather-adjusted projection for the
    /// same weekday.
    pub fn assess(
        &self,
        forecast_value: f64,
        weekday: u32,
        month: u32,
        conditions: &WeatherConditions,
    ) -> Result<FullAssessment> {
        let classification = self.evaluate(forecast_value, weekday, month)?;
        let expected = self.project_expected(weekday, conditions)?;
        let weather = assess_weather(conditions);

        Ok(FullAssessment {
            classification,
            expected,
            weather,
        })
    }

    pub fn assess_on(
        &self,
        forecast_value: f64,
        date: NaiveDate,
        conditions: &WeatherConditions,
    ) -> Result<FullAssessment> {
        self.assess(forecast_value, weekday_index(date), date.month(), conditions)
    }
}

fn validate_forecast(forecast_value: f64) -> Result<()> {
    if !forecast_value.is_finite() {
        return Err(SalesCastError::InvalidInput(format!(
            "forecast value must be a finite number, got {}",
            forecast_value
        )));
    }
    Ok(())
}

fn validate_weekday(weekday: u32) -> Result<()> {
    if !WEEKDAYS.contains(&weekday) {
        return Err(SalesCastError::InvalidInput(format!(
            "weekday must be between 0 (Monday) and 6 (Sunday), got {}",
            weekday
        )));
    }
    Ok(())
}

fn validate_month(month: u32) -> Result<()> {
    if !MONTHS.contains(&month) {
        return Err(SalesCastError::InvalidInput(format!(
            "month must be between 1 and 12, got {}",
            month
        )));
    }
    Ok(())
}
