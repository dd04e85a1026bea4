/// Report rendering for a completed risk query.
///
/// The engine's output is a plain value; this module is the presentation
/// seam that turns one query's worth of results into either a terminal
/// summary or a JSON document. Nothing here feeds back into scoring.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

use crate::model::{DailyForecast, ResolvedLocation, RiskAnalysis};

// ---------------------------------------------------------------------------
// Report structure
// ---------------------------------------------------------------------------

/// Everything produced by one query, bundled for rendering: where, when,
/// the raw daily series, and the engine's analysis of it.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub location: ResolvedLocation,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub forecast: Vec<DailyForecast>,
    pub analysis: RiskAnalysis,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Format the report for terminal output.
pub fn render_text(report: &QueryReport) -> String {
    let mut out = String::new();
    let a = &report.analysis;

    let _ = writeln!(out, "Weather Risk Assessment");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(
        out,
        "Location: {}{} ({:.4}, {:.4})",
        report.location.name,
        if report.location.country.is_empty() {
            String::new()
        } else {
            format!(", {}", report.location.country)
        },
        report.location.latitude,
        report.location.longitude
    );
    let _ = writeln!(
        out,
        "Range:    {} to {} ({} day{})",
        report.start_date,
        report.end_date,
        report.forecast.len(),
        if report.forecast.len() == 1 { "" } else { "s" }
    );
    let _ = writeln!(out);

    if report.forecast.is_empty() {
        let _ = writeln!(out, "No forecast data available for this range.");
        let _ = writeln!(out, "No assessment possible.");
        return out;
    }

    let _ = writeln!(out, "  Very Hot:       {}", a.risk_very_hot.label());
    let _ = writeln!(out, "  Very Cold:      {}", a.risk_very_cold.label());
    let _ = writeln!(out, "  Very Windy:     {}", a.risk_very_windy.label());
    let _ = writeln!(out, "  Very Wet:       {}", a.risk_very_wet.label());
    let _ = writeln!(out, "  Uncomfortable:  {}", a.risk_uncomfortable.label());
    let _ = writeln!(out);
    let _ = writeln!(out, "  Overall risk score: {}/100", a.overall_risk_score);
    let _ = writeln!(out, "  Confidence:         {}%", a.confidence_level);
    let _ = writeln!(out);

    let d = &a.details;
    let _ = writeln!(out, "Range statistics:");
    let _ = writeln!(
        out,
        "  Temperature:   max {:.1}°C  min {:.1}°C  avg {:.1}°C",
        d.temp_max, d.temp_min, d.temp_avg
    );
    let _ = writeln!(
        out,
        "  Feels like:    max {:.1}°C  min {:.1}°C",
        d.feels_like_max, d.feels_like_min
    );
    let _ = writeln!(out, "  Wind:          max {:.1} m/s", d.wind_max);
    let _ = writeln!(out, "  Precipitation: total {:.1} mm", d.precip_total);
    let _ = writeln!(out, "  Humidity:      avg {:.0}%", d.humidity_avg);
    let _ = writeln!(out);

    let _ = writeln!(out, "Daily detail:");
    for day in &report.forecast {
        let _ = writeln!(
            out,
            "  {}  {:>6.1}..{:<6.1}°C  wind {:>5.1} m/s  precip {:>5.1} mm  {}",
            day.date,
            day.temp_min,
            day.temp_max,
            day.wind_speed_max,
            day.precipitation_total,
            day.description
        );
    }

    out
}

/// Serialize the report as pretty-printed JSON for machine consumers.
pub fn render_json(report: &QueryReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
