/// Location resolution for free-text queries.
///
/// Resolution is two-stage: the built-in landmark registry is consulted
/// first (no network), then the Open-Meteo geocoding API. The first
/// registry hit wins, so well-known extreme-weather locations resolve
/// identically offline and online.
///
/// API documentation: https://open-meteo.com/en/docs/geocoding-api

use serde::Deserialize;

use crate::landmarks;
use crate::model::{ForecastError, ResolvedLocation};

const GEOCODE_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

// ============================================================================
// Geocoding API Response Structures
// ============================================================================

/// Search response. `results` is omitted entirely when nothing matched.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub results: Option<Vec<GeocodeResult>>,
}

/// A single geocoding candidate.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Resolve a free-text query through the geocoding API, taking the
/// top-ranked candidate. A query the API cannot match is
/// `LocationNotFound`, not an empty success.
pub fn geocode(
    client: &reqwest::blocking::Client,
    query: &str,
) -> Result<ResolvedLocation, ForecastError> {
    let response = client
        .get(GEOCODE_BASE_URL)
        .query(&[
            ("name", query),
            ("count", "1"),
            ("language", "en"),
            ("format", "json"),
        ])
        .header("Accept", "application/json")
        .send()
        .map_err(|e| ForecastError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ForecastError::HttpError(response.status().as_u16()));
    }

    let api_response: GeocodeResponse = response
        .json()
        .map_err(|e| ForecastError::ParseError(e.to_string()))?;

    top_result(api_response, query)
}

/// Resolve a location query: landmark registry first, geocoding API on a
/// miss.
pub fn resolve_location(
    client: &reqwest::blocking::Client,
    query: &str,
) -> Result<ResolvedLocation, ForecastError> {
    if let Some(landmark) = landmarks::find_landmark(query) {
        return Ok(landmark.to_resolved());
    }
    geocode(client, query)
}

// ============================================================================
// Response Conversion
// ============================================================================

/// Pick the first candidate out of a decoded search response.
pub fn top_result(
    response: GeocodeResponse,
    query: &str,
) -> Result<ResolvedLocation, ForecastError> {
    let result = response
        .results
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ForecastError::LocationNotFound(query.to_string()))?;

    Ok(ResolvedLocation {
        name: result.name,
        latitude: result.latitude,
        longitude: result.longitude,
        country: result.country.unwrap_or_default(),
    })
}

// ============================================================================
// Tests
// ============================================================================
