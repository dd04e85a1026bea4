/// Open-Meteo daily weather client.
///
/// Retrieves daily forecast data from the Open-Meteo forecast API, and
/// past daily data from the archive API, for a coordinate pair and an
/// inclusive date range. Both endpoints share one response shape, so one
/// set of structs and one conversion path serves both.
///
/// API documentation: https://open-meteo.com/en/docs
/// Archive endpoint:  https://open-meteo.com/en/docs/historical-weather-api
///
/// Conversion upholds the contract the risk engine relies on: dates
/// ascending, one record per calendar day, every numeric field present.
/// Nulls inside the daily arrays become `0.0` — downstream code cannot
/// tell "true zero" from "not reported", and does not need to.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{DailyForecast, ForecastError};

const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
const ARCHIVE_BASE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Daily variables requested from both endpoints, in the order the
/// converter consumes them.
const DAILY_VARIABLES: &str = "temperature_2m_max,temperature_2m_min,\
apparent_temperature_max,apparent_temperature_min,precipitation_sum,\
wind_speed_10m_max,relative_humidity_2m_max,weathercode";

// ============================================================================
// Open-Meteo API Response Structures
// ============================================================================

/// Top-level daily weather response. The `daily` block is absent when the
/// API rejects the variable list or the range.
#[derive(Debug, Deserialize)]
pub struct OpenMeteoDailyResponse {
    pub daily: Option<DailyBlock>,
}

/// Column-oriented daily data: one `time` array plus one equally-long
/// array per requested variable. Individual entries are `null` when the
/// provider has no value for that day.
#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<NaiveDate>,
    #[serde(rename = "temperature_2m_max")]
    pub temp_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temp_min: Vec<Option<f64>>,
    #[serde(rename = "apparent_temperature_max")]
    pub feels_like_max: Vec<Option<f64>>,
    #[serde(rename = "apparent_temperature_min")]
    pub feels_like_min: Vec<Option<f64>>,
    #[serde(rename = "precipitation_sum")]
    pub precipitation: Vec<Option<f64>>,
    #[serde(rename = "wind_speed_10m_max")]
    pub wind_speed_max: Vec<Option<f64>>,
    #[serde(rename = "relative_humidity_2m_max")]
    pub humidity: Vec<Option<f64>>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<Option<u16>>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Fetch the daily forecast for an inclusive date range.
///
/// Wind speeds are requested in m/s (the API default is km/h) so the
/// domain unit contract holds without conversion.
pub fn fetch_forecast(
    client: &reqwest::blocking::Client,
    latitude: f64,
    longitude: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyForecast>, ForecastError> {
    fetch_daily(client, FORECAST_BASE_URL, latitude, longitude, start, end)
}

/// Fetch past daily weather from the archive endpoint. Same response
/// shape and conversion as the forecast endpoint.
pub fn fetch_historical(
    client: &reqwest::blocking::Client,
    latitude: f64,
    longitude: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyForecast>, ForecastError> {
    fetch_daily(client, ARCHIVE_BASE_URL, latitude, longitude, start, end)
}

fn fetch_daily(
    client: &reqwest::blocking::Client,
    base_url: &str,
    latitude: f64,
    longitude: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyForecast>, ForecastError> {
    let url = build_daily_url(base_url, latitude, longitude, start, end);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| ForecastError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ForecastError::HttpError(response.status().as_u16()));
    }

    let api_response: OpenMeteoDailyResponse = response
        .json()
        .map_err(|e| ForecastError::ParseError(e.to_string()))?;

    convert_daily(api_response)
}

/// Build the daily-weather request URL. All parameter values here are
/// numeric or fixed strings, so no percent-encoding is needed.
pub fn build_daily_url(
    base_url: &str,
    latitude: f64,
    longitude: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> String {
    format!(
        "{}?latitude={}&longitude={}&start_date={}&end_date={}&daily={}&timezone=auto&wind_speed_unit=ms",
        base_url,
        latitude,
        longitude,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
        DAILY_VARIABLES,
    )
}

// ============================================================================
// Response Conversion
// ============================================================================

/// Convert a decoded response into the domain series.
///
/// A missing daily block is `NoDataAvailable`; a daily block whose value
/// arrays disagree with `time` in length is a `ParseError` rather than a
/// silently shortened series; out-of-order dates are likewise rejected.
/// An empty `time` array converts to an empty series — the engine treats
/// that as its defined sentinel, not an error.
pub fn convert_daily(
    response: OpenMeteoDailyResponse,
) -> Result<Vec<DailyForecast>, ForecastError> {
    let daily = response
        .daily
        .ok_or_else(|| ForecastError::NoDataAvailable("response contained no daily block".into()))?;

    let days = daily.time.len();
    check_len("temperature_2m_max", daily.temp_max.len(), days)?;
    check_len("temperature_2m_min", daily.temp_min.len(), days)?;
    check_len("apparent_temperature_max", daily.feels_like_max.len(), days)?;
    check_len("apparent_temperature_min", daily.feels_like_min.len(), days)?;
    check_len("precipitation_sum", daily.precipitation.len(), days)?;
    check_len("wind_speed_10m_max", daily.wind_speed_max.len(), days)?;
    check_len("relative_humidity_2m_max", daily.humidity.len(), days)?;
    check_len("weathercode", daily.weather_code.len(), days)?;

    if daily.time.windows(2).any(|w| w[0] >= w[1]) {
        return Err(ForecastError::ParseError(
            "daily dates are not strictly ascending".into(),
        ));
    }

    let mut forecasts = Vec::with_capacity(days);
    for i in 0..days {
        let temp_max = value_or_zero(&daily.temp_max, i);
        let temp_min = value_or_zero(&daily.temp_min, i);

        forecasts.push(DailyForecast {
            date: daily.time[i],
            temp_max,
            temp_min,
            temp_avg: (temp_max + temp_min) / 2.0,
            feels_like_max: value_or_zero(&daily.feels_like_max, i),
            feels_like_min: value_or_zero(&daily.feels_like_min, i),
            wind_speed_max: value_or_zero(&daily.wind_speed_max, i),
            precipitation_total: value_or_zero(&daily.precipitation, i),
            humidity_avg: value_or_zero(&daily.humidity, i),
            description: daily.weather_code[i]
                .map(describe_weather_code)
                .unwrap_or("Unknown")
                .to_string(),
        });
    }

    Ok(forecasts)
}

fn check_len(field: &str, actual: usize, expected: usize) -> Result<(), ForecastError> {
    if actual == expected {
        Ok(())
    } else {
        Err(ForecastError::ParseError(format!(
            "daily array '{}' has {} entries, expected {}",
            field, actual, expected
        )))
    }
}

fn value_or_zero(values: &[Option<f64>], i: usize) -> f64 {
    values[i].unwrap_or(0.0)
}

// ============================================================================
// Weather Code Descriptions
// ============================================================================

/// Human-readable summary for a WMO weather interpretation code.
pub fn describe_weather_code(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("test date should parse")
    }

    fn block_for_one_day() -> DailyBlock {
        DailyBlock {
            time: vec![date("2026-08-10")],
            temp_max: vec![Some(31.4)],
            temp_min: vec![Some(18.2)],
            feels_like_max: vec![Some(33.0)],
            feels_like_min: vec![Some(17.1)],
            precipitation: vec![Some(2.5)],
            wind_speed_max: vec![Some(6.3)],
            humidity: vec![Some(64.0)],
            weather_code: vec![Some(61)],
        }
    }

    #[test]
    fn test_convert_single_day() {
        let result = convert_daily(OpenMeteoDailyResponse {
            daily: Some(block_for_one_day()),
        })
        .expect("well-formed block should convert");

        assert_eq!(result.len(), 1);
        let day = &result[0];
        assert_eq!(day.date, date("2026-08-10"));
        assert_eq!(day.temp_max, 31.4);
        assert_eq!(day.temp_min, 18.2);
        assert_eq!(day.temp_avg, (31.4 + 18.2) / 2.0);
        assert_eq!(day.wind_speed_max, 6.3);
        assert_eq!(day.precipitation_total, 2.5);
        assert_eq!(day.humidity_avg, 64.0);
        assert_eq!(day.description, "Slight rain");
    }

    #[test]
    fn test_convert_defaults_nulls_to_zero() {
        let mut block = block_for_one_day();
        block.temp_max = vec![None];
        block.precipitation = vec![None];
        block.weather_code = vec![None];

        let result = convert_daily(OpenMeteoDailyResponse { daily: Some(block) })
            .expect("nulls should convert, not fail");

        assert_eq!(result[0].temp_max, 0.0);
        assert_eq!(result[0].precipitation_total, 0.0);
        // Average still derives from the defaulted max.
        assert_eq!(result[0].temp_avg, (0.0 + 18.2) / 2.0);
        assert_eq!(result[0].description, "Unknown");
    }

    #[test]
    fn test_convert_rejects_ragged_arrays() {
        let mut block = block_for_one_day();
        block.time = vec![date("2026-08-10"), date("2026-08-11")];
        block.temp_max = vec![Some(31.4), Some(29.0)];
        // Remaining arrays still have one entry each.

        let result = convert_daily(OpenMeteoDailyResponse { daily: Some(block) });
        match result {
            Err(ForecastError::ParseError(msg)) => {
                assert!(
                    msg.contains("temperature_2m_min"),
                    "error should name the short array, got: {}",
                    msg
                );
            }
            other => panic!("ragged arrays should be a ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_rejects_out_of_order_dates() {
        let mut block = block_for_one_day();
        block.time = vec![date("2026-08-11"), date("2026-08-10")];
        block.temp_max = vec![Some(31.4), Some(29.0)];
        block.temp_min = vec![Some(18.2), Some(17.0)];
        block.feels_like_max = vec![Some(33.0), Some(30.0)];
        block.feels_like_min = vec![Some(17.1), Some(16.0)];
        block.precipitation = vec![Some(2.5), Some(0.0)];
        block.wind_speed_max = vec![Some(6.3), Some(5.0)];
        block.humidity = vec![Some(64.0), Some(60.0)];
        block.weather_code = vec![Some(61), Some(0)];

        let result = convert_daily(OpenMeteoDailyResponse { daily: Some(block) });
        assert_eq!(
            result,
            Err(ForecastError::ParseError(
                "daily dates are not strictly ascending".into()
            ))
        );
    }

    #[test]
    fn test_convert_missing_daily_block_is_no_data() {
        let result = convert_daily(OpenMeteoDailyResponse { daily: None });
        assert!(matches!(result, Err(ForecastError::NoDataAvailable(_))));
    }

    #[test]
    fn test_convert_empty_time_array_is_empty_series() {
        let block = DailyBlock {
            time: vec![],
            temp_max: vec![],
            temp_min: vec![],
            feels_like_max: vec![],
            feels_like_min: vec![],
            precipitation: vec![],
            wind_speed_max: vec![],
            humidity: vec![],
            weather_code: vec![],
        };
        let result = convert_daily(OpenMeteoDailyResponse { daily: Some(block) })
            .expect("empty block should convert to empty series");
        assert!(result.is_empty());
    }

    #[test]
    fn test_build_daily_url_contains_all_parameters() {
        let url = build_daily_url(
            FORECAST_BASE_URL,
            40.6939,
            -89.5898,
            date("2026-08-10"),
            date("2026-08-16"),
        );
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?"));
        assert!(url.contains("latitude=40.6939"));
        assert!(url.contains("longitude=-89.5898"));
        assert!(url.contains("start_date=2026-08-10"));
        assert!(url.contains("end_date=2026-08-16"));
        assert!(url.contains("temperature_2m_max"));
        assert!(url.contains("weathercode"));
        assert!(url.contains("wind_speed_unit=ms"));
        assert!(url.contains("timezone=auto"));
    }

    #[test]
    fn test_describe_weather_code_known_and_unknown() {
        assert_eq!(describe_weather_code(0), "Clear sky");
        assert_eq!(describe_weather_code(95), "Thunderstorm");
        assert_eq!(describe_weather_code(42), "Unknown");
    }
}
