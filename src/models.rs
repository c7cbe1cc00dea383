use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::sanitize::SafeNumber;

/// Number of input features the model was trained with
pub const NUM_FEATURES: usize = 20;

/// Feature columns in the exact order the model artifact expects.
///
/// The request schema and the inference path both derive from this list;
/// reordering it without retraining the artifact produces silently wrong
/// predictions.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "MonsoonIntensity",
    "TopographyDrainage",
    "RiverManagement",
    "Deforestation",
    "Urbanization",
    "ClimateChange",
    "DamsQuality",
    "Siltation",
    "AgriculturalPractices",
    "Encroachments",
    "IneffectiveDisasterPreparedness",
    "DrainageSystems",
    "CoastalVulnerability",
    "Landslides",
    "Watersheds",
    "DeterioratingInfrastructure",
    "PopulationScore",
    "WetlandLoss",
    "InadequatePlanning",
    "PoliticalFactors",
];

/// Flood prediction input: 20 dimensionless risk/severity scores
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionRequest {
    pub monsoon_intensity: f64,
    pub topography_drainage: f64,
    pub river_management: f64,
    pub deforestation: f64,
    pub urbanization: f64,
    pub climate_change: f64,
    pub dams_quality: f64,
    pub siltation: f64,
    pub agricultural_practices: f64,
    pub encroachments: f64,
    pub ineffective_disaster_preparedness: f64,
    pub drainage_systems: f64,
    pub coastal_vulnerability: f64,
    pub landslides: f64,
    pub watersheds: f64,
    pub deteriorating_infrastructure: f64,
    pub population_score: f64,
    pub wetland_loss: f64,
    pub inadequate_planning: f64,
    pub political_factors: f64,
}

impl PredictionRequest {
    /// Feature vector in [`FEATURE_NAMES`] order
    pub fn features(&self) -> [f64; NUM_FEATURES] {
        [
            self.monsoon_intensity,
            self.topography_drainage,
            self.river_management,
            self.deforestation,
            self.urbanization,
            self.climate_change,
            self.dams_quality,
            self.siltation,
            self.agricultural_practices,
            self.encroachments,
            self.ineffective_disaster_preparedness,
            self.drainage_systems,
            self.coastal_vulnerability,
            self.landslides,
            self.watersheds,
            self.deteriorating_infrastructure,
            self.population_score,
            self.wetland_loss,
            self.inadequate_planning,
            self.political_factors,
        ]
    }
}

/// Flood prediction response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionResponse {
    pub predicted_flood_probability: f64,
}

/// Query parameters for the river discharge forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location metadata reported by the forecast service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: SafeNumber,
    pub longitude: SafeNumber,
    pub elevation: SafeNumber,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub utc_offset_seconds: SafeNumber,
}

/// One day of river discharge statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub river_discharge: SafeNumber,
    pub river_discharge_mean: SafeNumber,
    pub river_discharge_median: SafeNumber,
    pub river_discharge_max: SafeNumber,
    pub river_discharge_min: SafeNumber,
    pub river_discharge_p25: SafeNumber,
    pub river_discharge_p75: SafeNumber,
}

/// Flattened forecast returned by `/query-weather`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub coordinates: Coordinates,
    pub daily_data: Vec<DailyRecord>,
}

/// Welcome payload for the root route
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_loaded: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
