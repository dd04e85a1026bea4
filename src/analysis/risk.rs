/// Risk assessment engine.
///
/// Maps a daily forecast series plus a set of comfort thresholds to five
/// categorical hazard levels, an aggregate 0–100 score, and a confidence
/// percentage that steps down with forecast horizon.
///
/// The engine is a pure function of its inputs: no I/O, no clock, no
/// global state. Given finite numbers it cannot fail — an empty series
/// yields a fixed sentinel analysis rather than an error, so callers
/// never need a fallible path here.
///
/// Each hazard rule is written out explicitly. The tier boundaries differ
/// between rules, and the wind and precipitation rules map two adjacent
/// difference bands to the same Medium level; both branches are kept as
/// distinct arms so the tiering stays visible and greppable.

use crate::model::{DailyForecast, RiskAnalysis, RiskLevel, ThresholdConfig, WeatherStats};

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Assess a forecast series against a set of thresholds.
///
/// An empty series returns the sentinel analysis: all levels Low, score 0,
/// confidence 0, zeroed statistics. Callers should treat that as "no
/// assessment possible", not as a clean bill of health.
pub fn assess(forecast: &[DailyForecast], thresholds: &ThresholdConfig) -> RiskAnalysis {
    if forecast.is_empty() {
        return empty_analysis();
    }

    let stats = aggregate(forecast);

    let risk_very_hot = classify_heat(stats.temp_max, thresholds.temp_very_hot);
    let risk_very_cold = classify_cold(stats.temp_min, thresholds.temp_very_cold);
    let risk_very_windy = classify_wind(stats.wind_max, thresholds.wind_speed_high);
    let risk_very_wet = classify_precipitation(stats.precip_total, thresholds.precipitation_high);
    let risk_uncomfortable = classify_comfort(
        stats.feels_like_max,
        stats.feels_like_min,
        stats.humidity_avg,
        thresholds,
    );

    let overall_risk_score = overall_score(&[
        risk_very_hot,
        risk_very_cold,
        risk_very_windy,
        risk_very_wet,
        risk_uncomfortable,
    ]);

    RiskAnalysis {
        risk_very_hot,
        risk_very_cold,
        risk_very_windy,
        risk_very_wet,
        risk_uncomfortable,
        overall_risk_score,
        confidence_level: confidence(forecast.len()),
        details: stats,
    }
}

/// The fixed analysis returned for a zero-length series.
pub fn empty_analysis() -> RiskAnalysis {
    RiskAnalysis {
        risk_very_hot: RiskLevel::Low,
        risk_very_cold: RiskLevel::Low,
        risk_very_windy: RiskLevel::Low,
        risk_very_wet: RiskLevel::Low,
        risk_uncomfortable: RiskLevel::Low,
        overall_risk_score: 0,
        confidence_level: 0,
        details: WeatherStats::zeroed(),
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Collapse the series into range-wide statistics. Requires a non-empty
/// slice; `assess` guards the empty case before calling.
fn aggregate(forecast: &[DailyForecast]) -> WeatherStats {
    let days = forecast.len() as f64;

    WeatherStats {
        temp_max: fold_max(forecast.iter().map(|d| d.temp_max)),
        temp_min: fold_min(forecast.iter().map(|d| d.temp_min)),
        temp_avg: forecast.iter().map(|d| d.temp_avg).sum::<f64>() / days,
        feels_like_max: fold_max(forecast.iter().map(|d| d.feels_like_max)),
        feels_like_min: fold_min(forecast.iter().map(|d| d.feels_like_min)),
        wind_max: fold_max(forecast.iter().map(|d| d.wind_speed_max)),
        // Range total, not a daily rate: a drizzle every day of a long
        // window can legitimately breach the precipitation threshold.
        precip_total: forecast.iter().map(|d| d.precipitation_total).sum(),
        humidity_avg: forecast.iter().map(|d| d.humidity_avg).sum::<f64>() / days,
    }
}

fn fold_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

fn fold_min(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}

// ---------------------------------------------------------------------------
// Per-hazard classification
// ---------------------------------------------------------------------------

/// Heat risk from the range-wide maximum temperature.
fn classify_heat(temp_max: f64, threshold: f64) -> RiskLevel {
    let diff = temp_max - threshold;
    if diff >= 10.0 {
        RiskLevel::Severe
    } else if diff >= 5.0 {
        RiskLevel::High
    } else if diff >= 0.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Cold risk from the range-wide minimum temperature. The difference is
/// inverted relative to the heat rule: risk rises as the minimum falls
/// below the threshold.
fn classify_cold(temp_min: f64, threshold: f64) -> RiskLevel {
    let diff = threshold - temp_min;
    if diff >= 10.0 {
        RiskLevel::Severe
    } else if diff >= 5.0 {
        RiskLevel::High
    } else if diff >= 0.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Wind risk from the range-wide maximum wind speed.
///
/// Both the [0, 5) and [5, 10) bands map to Medium; there is no distinct
/// low-but-positive bucket. The redundant arm is intentional and must not
/// be collapsed.
fn classify_wind(wind_max: f64, threshold: f64) -> RiskLevel {
    let diff = wind_max - threshold;
    if diff >= 15.0 {
        RiskLevel::Severe
    } else if diff >= 10.0 {
        RiskLevel::High
    } else if diff >= 5.0 {
        RiskLevel::Medium
    } else if diff >= 0.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Precipitation risk from the range total. Same double-Medium plateau as
/// the wind rule, over the [0, 10) and [10, 30) bands.
fn classify_precipitation(precip_total: f64, threshold: f64) -> RiskLevel {
    let diff = precip_total - threshold;
    if diff >= 50.0 {
        RiskLevel::Severe
    } else if diff >= 30.0 {
        RiskLevel::High
    } else if diff >= 10.0 {
        RiskLevel::Medium
    } else if diff >= 0.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Comfort risk from apparent-temperature extremes and humidity.
///
/// Each firing condition adds to a unitless score; contributions are
/// additive and uncapped, so a hot, humid window with a cold snap can
/// stack all three.
fn classify_comfort(
    feels_like_max: f64,
    feels_like_min: f64,
    humidity_avg: f64,
    thresholds: &ThresholdConfig,
) -> RiskLevel {
    let mut score = 0.0;

    if feels_like_max >= thresholds.feels_like_hot {
        score += (feels_like_max - thresholds.feels_like_hot) / 10.0;
    }

    if feels_like_min <= thresholds.feels_like_cold {
        score += (thresholds.feels_like_cold - feels_like_min) / 10.0;
    }

    if humidity_avg >= thresholds.humidity_uncomfortable {
        score += (humidity_avg - thresholds.humidity_uncomfortable) / 20.0;
    }

    if score >= 3.0 {
        RiskLevel::Severe
    } else if score >= 2.0 {
        RiskLevel::High
    } else if score >= 1.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

// ---------------------------------------------------------------------------
// Aggregation of levels
// ---------------------------------------------------------------------------

/// Unweighted mean of the hazard scores, rounded to the nearest integer
/// and clamped to 100. With scores in {0, 25, 60, 90} the mean tops out
/// at 90, so the clamp never fires for current weights.
fn overall_score(levels: &[RiskLevel]) -> u8 {
    let total: u32 = levels.iter().map(|l| l.score()).sum();
    let mean = f64::from(total) / levels.len() as f64;
    (mean.round() as u32).min(100) as u8
}

/// Forecast-horizon confidence: a step function of series length only.
/// The observed weather values play no part.
fn confidence(days: usize) -> u8 {
    if days <= 3 {
        90
    } else if days <= 7 {
        75
    } else if days <= 14 {
        60
    } else {
        45
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Heat tier boundaries ----------------------------------------------

    #[test]
    fn test_heat_tiers_at_exact_boundaries() {
        assert_eq!(classify_heat(45.0, 35.0), RiskLevel::Severe); // diff 10
        assert_eq!(classify_heat(40.0, 35.0), RiskLevel::High); // diff 5
        assert_eq!(classify_heat(35.0, 35.0), RiskLevel::Medium); // diff 0
        assert_eq!(classify_heat(34.9, 35.0), RiskLevel::Low); // diff < 0
    }

    #[test]
    fn test_heat_just_below_boundaries_stays_in_lower_tier() {
        assert_eq!(classify_heat(44.9, 35.0), RiskLevel::High);
        assert_eq!(classify_heat(39.9, 35.0), RiskLevel::Medium);
    }

    // --- Cold tier boundaries ----------------------------------------------

    #[test]
    fn test_cold_difference_is_inverted() {
        // Risk rises as the minimum falls below the threshold.
        assert_eq!(classify_cold(-10.0, 0.0), RiskLevel::Severe); // diff 10
        assert_eq!(classify_cold(-5.0, 0.0), RiskLevel::High); // diff 5
        assert_eq!(classify_cold(0.0, 0.0), RiskLevel::Medium); // diff 0
        assert_eq!(classify_cold(0.1, 0.0), RiskLevel::Low);
    }

    // --- Wind and precipitation plateaus -----------------------------------

    #[test]
    fn test_wind_double_medium_plateau() {
        // Both [0, 5) and [5, 10) above the threshold classify as Medium.
        assert_eq!(classify_wind(15.0, 15.0), RiskLevel::Medium); // diff 0
        assert_eq!(classify_wind(19.9, 15.0), RiskLevel::Medium); // diff 4.9
        assert_eq!(classify_wind(20.0, 15.0), RiskLevel::Medium); // diff 5
        assert_eq!(classify_wind(24.9, 15.0), RiskLevel::Medium); // diff 9.9
        assert_eq!(classify_wind(25.0, 15.0), RiskLevel::High); // diff 10
        assert_eq!(classify_wind(30.0, 15.0), RiskLevel::Severe); // diff 15
        assert_eq!(classify_wind(14.9, 15.0), RiskLevel::Low);
    }

    #[test]
    fn test_precipitation_double_medium_plateau() {
        assert_eq!(classify_precipitation(20.0, 20.0), RiskLevel::Medium); // diff 0
        assert_eq!(classify_precipitation(29.9, 20.0), RiskLevel::Medium); // diff 9.9
        assert_eq!(classify_precipitation(30.0, 20.0), RiskLevel::Medium); // diff 10
        assert_eq!(classify_precipitation(49.9, 20.0), RiskLevel::Medium); // diff 29.9
        assert_eq!(classify_precipitation(50.0, 20.0), RiskLevel::High); // diff 30
        assert_eq!(classify_precipitation(70.0, 20.0), RiskLevel::Severe); // diff 50
        assert_eq!(classify_precipitation(19.9, 20.0), RiskLevel::Low);
    }

    // --- Comfort accumulation ----------------------------------------------

    #[test]
    fn test_comfort_single_contribution_below_one_is_low() {
        // feels_like_max 48 vs hot threshold 40 contributes 0.8 — under the
        // Medium floor of 1.0.
        let t = ThresholdConfig::default();
        assert_eq!(classify_comfort(48.0, 18.0, 30.0, &t), RiskLevel::Low);
    }

    #[test]
    fn test_comfort_contributions_are_additive() {
        let t = ThresholdConfig::default();
        // Hot contributes (55-40)/10 = 1.5, humidity (90-80)/20 = 0.5;
        // total 2.0 crosses the High floor even though neither alone would.
        assert_eq!(classify_comfort(55.0, 10.0, 90.0, &t), RiskLevel::High);
    }

    #[test]
    fn test_comfort_all_three_conditions_can_stack_to_severe() {
        let t = ThresholdConfig::default();
        // Hot (52-40)/10 = 1.2, cold (-5 - -15)/10 = 1.0,
        // humidity (96-80)/20 = 0.8; total 3.0.
        assert_eq!(classify_comfort(52.0, -15.0, 96.0, &t), RiskLevel::Severe);
    }

    #[test]
    fn test_comfort_boundary_equality_fires_conditions() {
        let t = ThresholdConfig::default();
        // feels_like_max == hot threshold and humidity == uncomfortable
        // threshold both fire but contribute 0. Score stays 0.0 → Low.
        assert_eq!(classify_comfort(40.0, 0.0, 80.0, &t), RiskLevel::Low);
    }

    // --- Overall score and confidence --------------------------------------

    #[test]
    fn test_overall_score_rounds_mean_of_level_scores() {
        use RiskLevel::*;
        // (90 + 0 + 0 + 0 + 90) / 5 = 36
        assert_eq!(overall_score(&[Severe, Low, Low, Low, Severe]), 36);
        // (25 + 25 + 60 + 0 + 0) / 5 = 22
        assert_eq!(overall_score(&[Medium, Medium, High, Low, Low]), 22);
        // (25 * 3 + 0 * 2) / 5 = 15
        assert_eq!(overall_score(&[Medium, Medium, Medium, Low, Low]), 15);
    }

    #[test]
    fn test_overall_score_extremes() {
        use RiskLevel::*;
        assert_eq!(overall_score(&[Low; 5]), 0);
        assert_eq!(overall_score(&[Severe; 5]), 90);
    }

    #[test]
    fn test_confidence_step_function() {
        assert_eq!(confidence(1), 90);
        assert_eq!(confidence(3), 90);
        assert_eq!(confidence(4), 75);
        assert_eq!(confidence(7), 75);
        assert_eq!(confidence(8), 60);
        assert_eq!(confidence(14), 60);
        assert_eq!(confidence(15), 45);
        assert_eq!(confidence(20), 45);
    }
}
