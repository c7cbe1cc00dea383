//! Open-Meteo flood forecast integration
//!
//! Fetches daily river discharge statistics for a coordinate pair and
//! flattens the columnar upstream response into one record per date.
//!
//! # Example
//!
//! ```no_run
//! use floodcast::flood::{FloodClient, FloodClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FloodClient::new(FloodClientConfig::default());
//!
//!     let report = client.fetch_forecast(23.8, 90.4).await?.into_report();
//!     println!("{} daily records", report.daily_data.len());
//!
//!     Ok(())
//! }
//! ```

mod client;

pub use client::{FloodApiError, FloodClient, FloodClientConfig};

use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use crate::models::{Coordinates, DailyRecord, WeatherReport};
use crate::sanitize::SafeNumber;

/// Raw forecast response as served by the flood API.
///
/// Shape is defined by the upstream service; series may be shorter than the
/// reported time range and carry nulls for days without data.
#[derive(Debug, Clone, Deserialize)]
pub struct FloodApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub utc_offset_seconds: i64,
    pub daily: DailyBlock,
}

/// Columnar daily block: a date index plus seven parallel series
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<NaiveDate>,
    #[serde(default)]
    pub river_discharge: Vec<Option<f64>>,
    #[serde(default)]
    pub river_discharge_mean: Vec<Option<f64>>,
    #[serde(default)]
    pub river_discharge_median: Vec<Option<f64>>,
    #[serde(default)]
    pub river_discharge_max: Vec<Option<f64>>,
    #[serde(default)]
    pub river_discharge_min: Vec<Option<f64>>,
    #[serde(default)]
    pub river_discharge_p25: Vec<Option<f64>>,
    #[serde(default)]
    pub river_discharge_p75: Vec<Option<f64>>,
}

impl FloodApiResponse {
    /// Flatten into the wire shape served by `/query-weather`.
    ///
    /// All metadata scalars and every series value pass through the
    /// sanitizer, so the report contains no NaN or Infinity tokens.
    pub fn into_report(self) -> WeatherReport {
        let FloodApiResponse {
            latitude,
            longitude,
            elevation,
            timezone,
            timezone_abbreviation,
            utc_offset_seconds,
            daily,
        } = self;

        WeatherReport {
            coordinates: Coordinates {
                latitude: SafeNumber::from(latitude),
                longitude: SafeNumber::from(longitude),
                elevation: SafeNumber::from(elevation),
                timezone,
                timezone_abbreviation,
                utc_offset_seconds: SafeNumber::from(utc_offset_seconds as f64),
            },
            daily_data: daily.flatten(),
        }
    }
}

impl DailyBlock {
    /// One record per reported slot.
    ///
    /// The date index starts at the reported time-range start and steps one
    /// day at a time, end exclusive; each slot is zipped against the seven
    /// series. Series shorter than the index pad with the placeholder.
    pub fn flatten(&self) -> Vec<DailyRecord> {
        let Some(start) = self.time.first().copied() else {
            return Vec::new();
        };

        (0..self.time.len())
            .map(|i| DailyRecord {
                date: start + Duration::days(i as i64),
                river_discharge: pick(&self.river_discharge, i),
                river_discharge_mean: pick(&self.river_discharge_mean, i),
                river_discharge_median: pick(&self.river_discharge_median, i),
                river_discharge_max: pick(&self.river_discharge_max, i),
                river_discharge_min: pick(&self.river_discharge_min, i),
                river_discharge_p25: pick(&self.river_discharge_p25, i),
                river_discharge_p75: pick(&self.river_discharge_p75, i),
            })
            .collect()
    }
}

fn pick(series: &[Option<f64>], index: usize) -> SafeNumber {
    SafeNumber::from(series.get(index).copied().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> FloodApiResponse {
        serde_json::from_value(serde_json::json!({
            "latitude": 23.8,
            "longitude": 90.4,
            "elevation": 9.0,
            "timezone": "GMT",
            "timezone_abbreviation": "GMT",
            "utc_offset_seconds": 0,
            "daily": {
                "time": ["2024-06-01", "2024-06-02", "2024-06-03"],
                "river_discharge": [120.5, null, 98.2],
                "river_discharge_mean": [110.0, 112.3, 111.9],
                "river_discharge_median": [108.4, 109.0, 110.2],
                "river_discharge_max": [150.1, 151.7, 149.8],
                "river_discharge_min": [80.2, 81.0, 79.5],
                "river_discharge_p25": [95.0, 96.1],
                "river_discharge_p75": [130.3, 131.0, 132.4]
            }
        }))
        .expect("sample response should deserialize")
    }

    #[test]
    fn test_parses_upstream_shape() {
        let response = sample_response();
        assert_eq!(response.daily.time.len(), 3);
        assert_eq!(response.daily.river_discharge[0], Some(120.5));
        assert_eq!(response.daily.river_discharge[1], None);
    }

    #[test]
    fn test_report_has_one_record_per_slot() {
        let report = sample_response().into_report();
        assert_eq!(report.daily_data.len(), 3);
    }

    #[test]
    fn test_date_index_steps_daily_from_start() {
        let report = sample_response().into_report();
        let dates: Vec<String> = report
            .daily_data
            .iter()
            .map(|r| r.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-06-01", "2024-06-02", "2024-06-03"]);
    }

    #[test]
    fn test_null_and_short_series_become_placeholder() {
        let report = sample_response().into_report();

        // Null in the middle of a full-length series
        assert_eq!(report.daily_data[1].river_discharge, SafeNumber::Empty);
        // p25 series only has two entries; the third slot pads
        assert_eq!(report.daily_data[2].river_discharge_p25, SafeNumber::Empty);
        // Finite neighbors are untouched
        assert_eq!(
            report.daily_data[2].river_discharge,
            SafeNumber::Finite(98.2)
        );
    }

    #[test]
    fn test_metadata_is_sanitized() {
        let mut response = sample_response();
        response.elevation = None;

        let report = response.into_report();
        assert_eq!(report.coordinates.elevation, SafeNumber::Empty);
        assert_eq!(report.coordinates.latitude, SafeNumber::Finite(23.8));
        assert_eq!(report.coordinates.utc_offset_seconds, SafeNumber::Finite(0.0));
    }

    #[test]
    fn test_empty_time_range_yields_empty_report() {
        let mut response = sample_response();
        response.daily = DailyBlock::default();

        let report = response.into_report();
        assert!(report.daily_data.is_empty());
    }

    #[test]
    fn test_serialized_report_is_json_safe() {
        let value = serde_json::to_value(sample_response().into_report())
            .expect("report must serialize to strict JSON");
        let rendered = value.to_string();
        assert!(!rendered.contains("null"));
        assert!(!rendered.contains("NaN"));
    }

    #[test]
    fn test_record_has_all_eight_keys() {
        let value = serde_json::to_value(sample_response().into_report()).unwrap();
        let record = value["daily_data"][0].as_object().unwrap();
        assert_eq!(record.len(), 8);
        for key in [
            "date",
            "river_discharge",
            "river_discharge_mean",
            "river_discharge_median",
            "river_discharge_max",
            "river_discharge_min",
            "river_discharge_p25",
            "river_discharge_p75",
        ] {
            assert!(record.contains_key(key), "missing key {}", key);
        }
    }
}
