use crate::models::{DailyPrecipitation, DailyWeather, HourlyReading};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Reads one candidate field from a reading
pub type FieldAccessor = fn(&HourlyReading) -> Option<f64>;

fn precipitation(r: &HourlyReading) -> Option<f64> {
    r.number("precipitation")
}

fn precipitacao_total(r: &HourlyReading) -> Option<f64> {
    r.number("precipitacao_total")
}

fn chuva_aberta(r: &HourlyReading) -> Option<f64> {
    r.number("Chuva_aberta")
}

fn temp_max(r: &HourlyReading) -> Option<f64> {
    r.number("temp_max")
}

fn temperature(r: &HourlyReading) -> Option<f64> {
    r.number("temperature")
}

fn radiation(r: &HourlyReading) -> Option<f64> {
    r.number("radiation")
}

fn radiacao(r: &HourlyReading) -> Option<f64> {
    r.number("radiacao")
}

/// Precipitation field names, newest source generation first
pub const PRECIPITATION_ACCESSORS: &[FieldAccessor] =
    &[precipitation, precipitacao_total, chuva_aberta];

pub const TEMPERATURE_ACCESSORS: &[FieldAccessor] = &[temp_max, temperature];

pub const RADIATION_ACCESSORS: &[FieldAccessor] = &[radiation, radiacao];

/// First accessor that yields a value wins
pub fn resolve(reading: &HourlyReading, accessors: &[FieldAccessor]) -> Option<f64> {
    accessors.iter().find_map(|accessor| accessor(reading))
}

/// Precipitation of one reading; zero when no known field is present
pub fn resolve_precipitation(reading: &HourlyReading) -> f64 {
    resolve(reading, PRECIPITATION_ACCESSORS).unwrap_or_else(|| {
        tracing::trace!("No precipitation field in reading, counting as 0");
        0.0
    })
}

/// Sum sub-daily precipitation into one total per calendar day, ascending by
/// date. Readings without a usable date are skipped; duplicates are summed.
pub fn aggregate_daily(readings: &[HourlyReading]) -> Vec<DailyPrecipitation> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for reading in readings {
        let Some(date) = reading.date() else {
            tracing::trace!("Skipping reading without a date");
            continue;
        };
        *totals.entry(date).or_insert(0.0) += resolve_precipitation(reading);
    }

    totals
        .into_iter()
        .map(|(date, total)| DailyPrecipitation { date, total })
        .collect()
}

/// Highest temperature reported per day
pub fn aggregate_daily_max_temperature(readings: &[HourlyReading]) -> BTreeMap<NaiveDate, f64> {
    let mut maxima: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for reading in readings {
        let (Some(date), Some(temp)) = (reading.date(), resolve(reading, TEMPERATURE_ACCESSORS))
        else {
            continue;
        };
        maxima
            .entry(date)
            .and_modify(|m| *m = m.max(temp))
            .or_insert(temp);
    }

    maxima
}

/// Combine precipitation totals, maximum temperature, and the first radiation
/// reading of each day.
pub fn summarize_days(readings: &[HourlyReading]) -> Vec<DailyWeather> {
    let maxima = aggregate_daily_max_temperature(readings);

    let mut first_radiation: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for reading in readings {
        if let (Some(date), Some(value)) = (reading.date(), resolve(reading, RADIATION_ACCESSORS)) {
            first_radiation.entry(date).or_insert(value);
        }
    }

    aggregate_daily(readings)
        .into_iter()
        .map(|day| DailyWeather {
            date: day.date,
            precipitation_mm: day.total,
            max_temperature_c: maxima.get(&day.date).copied(),
            radiation: first_radiation.get(&day.date).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn readings(values: Vec<serde_json::Value>) -> Vec<HourlyReading> {
        values.into_iter().map(HourlyReading::from_value).collect()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn sums_across_field_generations() {
        let input = readings(vec![
            json!({ "date": "2024-01-01", "precipitation": 5 }),
            json!({ "date": "2024-01-01", "precipitacao_total": 3 }),
            json!({ "date": "2024-01-02", "precipitation": 2 }),
            json!({ "temperature": 20 }),
        ]);

        let result = aggregate_daily(&input);
        assert_eq!(
            result,
            vec![
                DailyPrecipitation {
                    date: date("2024-01-01"),
                    total: 8.0
                },
                DailyPrecipitation {
                    date: date("2024-01-02"),
                    total: 2.0
                },
            ]
        );
    }

    #[test]
    fn accessor_priority_order() {
        let reading = HourlyReading::from_value(json!({
            "Chuva_aberta": 9.0,
            "precipitacao_total": 4.0,
            "precipitation": 1.0
        }));
        assert_eq!(resolve_precipitation(&reading), 1.0);

        let reading = HourlyReading::from_value(json!({
            "Chuva_aberta": 9.0,
            "precipitacao_total": 4.0
        }));
        assert_eq!(resolve_precipitation(&reading), 4.0);

        // A non-numeric higher-priority field falls through
        let reading = HourlyReading::from_value(json!({
            "precipitation": "n/a",
            "Chuva_aberta": 9.0
        }));
        assert_eq!(resolve_precipitation(&reading), 9.0);
    }

    #[test]
    fn unknown_fields_count_as_zero() {
        let input = readings(vec![json!({ "fullDate": "2024-02-10", "rain_mm": 12 })]);
        let result = aggregate_daily(&input);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total, 0.0);
    }

    #[test]
    fn output_independent_of_input_order() {
        let forward = readings(vec![
            json!({ "date": "2024-03-02", "precipitation": 1.5 }),
            json!({ "date": "2024-03-01", "precipitation": 2.0 }),
            json!({ "date": "2024-03-02T14:00:00", "Chuva_aberta": 0.5 }),
        ]);
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = aggregate_daily(&forward);
        let b = aggregate_daily(&reversed);
        assert_eq!(a, b);
        assert_eq!(a[0].date, date("2024-03-01"));
        assert_eq!(a[1].total, 2.0);
    }

    #[test]
    fn unusable_full_date_does_not_drop_reading() {
        let input = readings(vec![json!({
            "fullDate": "n/a",
            "date": "2024-01-01",
            "precipitation": 4
        })]);
        assert_eq!(
            aggregate_daily(&input),
            vec![DailyPrecipitation {
                date: date("2024-01-01"),
                total: 4.0
            }]
        );
    }

    #[test]
    fn duplicates_double_count() {
        let one = json!({ "date": "2024-01-01", "precipitation": 2.5 });
        let input = readings(vec![one.clone(), one]);
        assert_eq!(aggregate_daily(&input)[0].total, 5.0);
    }

    #[test]
    fn empty_input() {
        assert!(aggregate_daily(&[]).is_empty());
        assert!(summarize_days(&[]).is_empty());
    }

    #[test]
    fn max_temperature_per_day() {
        let input = readings(vec![
            json!({ "date": "2024-01-01", "temp_max": 27.5 }),
            json!({ "date": "2024-01-01", "temperature": 30.1 }),
            json!({ "date": "2024-01-01", "temp_max": 22.0, "temperature": 35.0 }),
            json!({ "date": "2024-01-02" }),
        ]);

        let maxima = aggregate_daily_max_temperature(&input);
        assert_eq!(maxima.get(&date("2024-01-01")), Some(&30.1));
        assert_eq!(maxima.get(&date("2024-01-02")), None);
    }

    #[test]
    fn summarize_combines_figures() {
        let input = readings(vec![
            json!({ "fullDate": "2024-05-01", "precipitation": 1.0, "temp_max": 24.0, "radiation": 900 }),
            json!({ "fullDate": "2024-05-01", "precipitation": 2.0, "temp_max": 26.0, "radiation": 1600 }),
            json!({ "fullDate": "2024-05-02", "precipitacao_total": 0.0 }),
        ]);

        let days = summarize_days(&input);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].precipitation_mm, 3.0);
        assert_eq!(days[0].max_temperature_c, Some(26.0));
        assert_eq!(days[0].radiation, Some(900.0));
        assert_eq!(days[1].max_temperature_c, None);
        assert_eq!(days[1].radiation, None);
    }
}
