/// Core data types for the outdoor-event weather risk service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond trivial accessors, no I/O, and no network
/// dependencies — only types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Forecast types
// ---------------------------------------------------------------------------

/// One calendar day of forecast (or historical) weather for a point.
///
/// Produced by `ingest::open_meteo` from one index of the Open-Meteo daily
/// arrays. Every numeric field is always present: upstream nulls are
/// defaulted to `0.0` at ingest, so consumers never see a gap — a zero is
/// indistinguishable from "not reported".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Daily maximum air temperature, °C.
    pub temp_max: f64,
    /// Daily minimum air temperature, °C.
    pub temp_min: f64,
    /// Daily mean air temperature, °C (max/min midpoint).
    pub temp_avg: f64,
    /// Daily maximum apparent ("feels like") temperature, °C.
    pub feels_like_max: f64,
    /// Daily minimum apparent temperature, °C.
    pub feels_like_min: f64,
    /// Daily maximum 10 m wind speed, m/s.
    pub wind_speed_max: f64,
    /// Total precipitation for the day, mm.
    pub precipitation_total: f64,
    /// Daily relative humidity, percent (0–100).
    pub humidity_avg: f64,
    /// Human-readable conditions summary ("Clear sky", "Thunderstorm", ...).
    /// Decorative only — never consulted by the risk engine.
    pub description: String,
}

// ---------------------------------------------------------------------------
// Threshold types
// ---------------------------------------------------------------------------

/// User-owned comfort boundaries against which a forecast is judged.
///
/// Loaded from the `[thresholds]` table of a TOML config file by `config`,
/// or defaulted. No cross-field invariants are enforced — nothing stops
/// `temp_very_cold > temp_very_hot` — and the risk engine must produce a
/// deterministic, non-panicking result for any combination of finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Daily maximum above this is "very hot", °C.
    pub temp_very_hot: f64,
    /// Daily minimum below this is "very cold", °C.
    pub temp_very_cold: f64,
    /// Maximum wind speed above this is "very windy", m/s.
    pub wind_speed_high: f64,
    /// Precipitation total over the whole queried range above this is
    /// "very wet", mm. A range total, not a daily rate.
    pub precipitation_high: f64,
    /// Average humidity above this contributes to discomfort, percent.
    pub humidity_uncomfortable: f64,
    /// Apparent temperature above this contributes to discomfort, °C.
    pub feels_like_hot: f64,
    /// Apparent temperature below this contributes to discomfort, °C.
    pub feels_like_cold: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        ThresholdConfig {
            temp_very_hot: 35.0,
            temp_very_cold: 0.0,
            wind_speed_high: 15.0,
            precipitation_high: 20.0,
            humidity_uncomfortable: 80.0,
            feels_like_hot: 40.0,
            feels_like_cold: -5.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Risk types
// ---------------------------------------------------------------------------

/// Hazard severity levels, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Severe,
}

impl RiskLevel {
    /// Fixed numeric weight used when averaging the five hazard levels
    /// into the overall risk score.
    pub fn score(self) -> u32 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 25,
            RiskLevel::High => 60,
            RiskLevel::Severe => 90,
        }
    }

    /// Display label for report rendering.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Severe => "Severe Risk",
        }
    }
}

/// Raw statistics aggregated over the queried range, carried alongside the
/// classified levels so callers can render the underlying numbers without
/// recomputing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherStats {
    pub temp_max: f64,
    pub temp_min: f64,
    pub temp_avg: f64,
    pub feels_like_max: f64,
    pub feels_like_min: f64,
    pub wind_max: f64,
    pub precip_total: f64,
    pub humidity_avg: f64,
}

impl WeatherStats {
    /// All-zero statistics, paired with the empty-series risk analysis.
    pub fn zeroed() -> Self {
        WeatherStats {
            temp_max: 0.0,
            temp_min: 0.0,
            temp_avg: 0.0,
            feels_like_max: 0.0,
            feels_like_min: 0.0,
            wind_max: 0.0,
            precip_total: 0.0,
            humidity_avg: 0.0,
        }
    }
}

/// Output of the risk engine for one (forecast, thresholds) pair.
///
/// Immutable single-use value: five per-hazard levels, the 0–100 overall
/// score, the horizon-based confidence percentage, and the aggregated
/// statistics the levels were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub risk_very_hot: RiskLevel,
    pub risk_very_cold: RiskLevel,
    pub risk_very_windy: RiskLevel,
    pub risk_very_wet: RiskLevel,
    pub risk_uncomfortable: RiskLevel,
    /// Unweighted mean of the five hazard scores, rounded, clamped to 100.
    pub overall_risk_score: u8,
    /// One of {90, 75, 60, 45}, or 0 for an empty series.
    pub confidence_level: u8,
    pub details: WeatherStats,
}

// ---------------------------------------------------------------------------
// Location types
// ---------------------------------------------------------------------------

/// A location query resolved to coordinates, either from the landmark
/// registry or from the geocoding API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when resolving a location or fetching weather data.
#[derive(Debug, PartialEq)]
pub enum ForecastError {
    /// The request never produced a response (DNS, connect, timeout).
    Network(String),
    /// Non-2xx HTTP response from an Open-Meteo endpoint.
    HttpError(u16),
    /// The response body could not be deserialized or was internally
    /// inconsistent (e.g. ragged daily arrays).
    ParseError(String),
    /// Neither the landmark registry nor the geocoding API matched the query.
    LocationNotFound(String),
    /// The forecast response contained no daily data for the range.
    NoDataAvailable(String),
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::Network(msg) => write!(f, "Network error: {}", msg),
            ForecastError::HttpError(code) => write!(f, "HTTP error: {}", code),
            ForecastError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ForecastError::LocationNotFound(query) => {
                write!(f, "Location not found: {}", query)
            }
            ForecastError::NoDataAvailable(detail) => {
                write!(f, "No data available: {}", detail)
            }
        }
    }
}

impl std::error::Error for ForecastError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
