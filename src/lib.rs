//! Sales forecast classification against historical weekday baselines,
//! with weather-adjusted projections and hourly precipitation aggregation.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use config::Config;
pub use error::{Result, SalesCastError};
pub use logic::{
    aggregate_daily, assess_weather, categorize, summarize_days, to_trend_signal, weekday_index,
    ForecastEvaluator,
};
