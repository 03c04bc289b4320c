use crate::models::{Classification, ClassificationResult, TrendSignal};

pub fn trend_for(classification: Classification) -> TrendSignal {
    match classification {
        Classification::High => TrendSignal::Up,
        Classification::Low => TrendSignal::Down,
        Classification::Medium => TrendSignal::Neutral,
    }
}

/// Reduce a classification to the direction shown on a KPI card
pub fn to_trend_signal(result: &ClassificationResult) -> TrendSignal {
    trend_for(result.classification)
}
