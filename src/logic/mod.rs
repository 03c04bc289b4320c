pub mod aggregation;
pub mod calculations;
pub mod categorizer;
pub mod evaluator;
pub mod kpi;

pub use aggregation::{aggregate_daily, summarize_days};
pub use categorizer::{assess_weather, categorize};
pub use evaluator::{weekday_index, ForecastEvaluator};
pub use kpi::to_trend_signal;
