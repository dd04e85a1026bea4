/// CLI entry point: resolve a location, fetch its daily weather for a
/// date range, assess risk against the configured thresholds, and print
/// a report.
///
/// Exit codes: 0 success, 1 collaborator failure (network, config),
/// 2 usage error.

use chrono::{Duration, Local, NaiveDate};
use std::time::Duration as StdDuration;

use wxrisk_service::analysis::risk;
use wxrisk_service::ingest::{geocode, open_meteo};
use wxrisk_service::logging::{self, DataSource, LogLevel};
use wxrisk_service::report::{self, QueryReport};
use wxrisk_service::{config, model::ForecastError};

const USAGE: &str = "\
Usage: wxrisk_service <location query> [options]

Assess weather risk for an outdoor event at a location over a date range.

Options:
  --start YYYY-MM-DD   First day of the range (default: today)
  --end YYYY-MM-DD     Last day of the range, inclusive
  --days N             Range length in days when --end is absent (default: 7)
  --historical         Query past weather (archive API) instead of forecast
  --config PATH        Threshold config file (or set WXRISK_CONFIG)
  --json               Emit the full report as JSON instead of text
  -h, --help           Show this help

Examples:
  wxrisk_service \"death valley\" --days 3
  wxrisk_service Reykjavik --start 2026-08-20 --end 2026-08-23 --json";

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

/// Outcome of argument parsing: either a runnable query or an explicit
/// request for the usage text.
#[derive(Debug, PartialEq)]
enum Parsed {
    Help,
    Run(CliArgs),
}

#[derive(Debug, PartialEq)]
struct CliArgs {
    query: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    days: Option<i64>,
    historical: bool,
    json: bool,
    config_path: Option<String>,
}

/// Parse command-line arguments (without the program name). Positional
/// words join into one free-text location query, so quoting multi-word
/// locations is optional.
fn parse_args(args: &[String]) -> Result<Parsed, String> {
    let mut query_words: Vec<&str> = Vec::new();
    let mut start = None;
    let mut end = None;
    let mut days = None;
    let mut historical = false;
    let mut json = false;
    let mut config_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Parsed::Help),
            "--historical" => historical = true,
            "--json" => json = true,
            "--start" => {
                let value = iter.next().ok_or("--start requires a date")?;
                start = Some(parse_date(value)?);
            }
            "--end" => {
                let value = iter.next().ok_or("--end requires a date")?;
                end = Some(parse_date(value)?);
            }
            "--days" => {
                let value = iter.next().ok_or("--days requires a number")?;
                let n: i64 = value
                    .parse()
                    .map_err(|_| format!("invalid day count '{}'", value))?;
                if n < 1 {
                    return Err(format!("--days must be at least 1, got {}", n));
                }
                days = Some(n);
            }
            "--config" => {
                let value = iter.next().ok_or("--config requires a path")?;
                config_path = Some(value.clone());
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option '{}'", flag));
            }
            word => query_words.push(word),
        }
    }

    if query_words.is_empty() {
        return Err("a location query is required".to_string());
    }
    if end.is_some() && days.is_some() {
        return Err("--end and --days are mutually exclusive".to_string());
    }

    Ok(Parsed::Run(CliArgs {
        query: query_words.join(" "),
        start,
        end,
        days,
        historical,
        json,
        config_path,
    }))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    value
        .parse()
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", value))
}

/// Turn the parsed flags into a concrete inclusive range.
fn resolve_range(args: &CliArgs, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), String> {
    let start = args.start.unwrap_or(today);
    let end = match args.end {
        Some(end) => end,
        None => start + Duration::days(args.days.unwrap_or(7) - 1),
    };
    if end < start {
        return Err(format!("range end {} is before start {}", end, start));
    }
    Ok((start, end))
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    dotenv::dotenv().ok();

    let min_level = std::env::var("WXRISK_LOG_LEVEL")
        .map(|v| LogLevel::from_env_value(&v))
        .unwrap_or(LogLevel::Info);
    let log_file = std::env::var("WXRISK_LOG_FILE").ok();
    logging::init_logger(min_level, log_file.as_deref(), false);

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw_args) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            println!("{}", USAGE);
            return 0;
        }
        Err(msg) => {
            eprintln!("Error: {}\n", msg);
            eprintln!("{}", USAGE);
            return 2;
        }
    };

    let (start, end) = match resolve_range(&args, Local::now().date_naive()) {
        Ok(range) => range,
        Err(msg) => {
            eprintln!("Error: {}\n", msg);
            eprintln!("{}", USAGE);
            return 2;
        }
    };

    let config = match config::load_or_default(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::error(DataSource::Config, None, &e.to_string());
            return 1;
        }
    };

    let client = match reqwest::blocking::Client::builder()
        .timeout(StdDuration::from_secs(10))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            logging::error(
                DataSource::System,
                None,
                &format!("failed to build HTTP client: {}", e),
            );
            return 1;
        }
    };

    let location = match geocode::resolve_location(&client, &args.query) {
        Ok(location) => location,
        Err(e) => {
            logging::log_geocode_failure(&args.query, "location resolution", &e);
            if let ForecastError::LocationNotFound(query) = &e {
                eprintln!("No location found matching '{}'.", query);
            }
            return 1;
        }
    };
    logging::debug(
        DataSource::Geocode,
        Some(&location.name),
        &format!("resolved to ({}, {})", location.latitude, location.longitude),
    );

    let fetch = if args.historical {
        open_meteo::fetch_historical
    } else {
        open_meteo::fetch_forecast
    };
    let forecast = match fetch(&client, location.latitude, location.longitude, start, end) {
        Ok(forecast) => forecast,
        Err(e) => {
            logging::log_forecast_failure(&location.name, "daily weather fetch", &e);
            return 1;
        }
    };
    logging::debug(
        DataSource::OpenMeteo,
        Some(&location.name),
        &format!("received {} daily records", forecast.len()),
    );

    let analysis = risk::assess(&forecast, &config.thresholds);

    let report = QueryReport {
        location,
        start_date: start,
        end_date: end,
        forecast,
        analysis,
    };

    if args.json {
        match report::render_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                logging::error(
                    DataSource::System,
                    None,
                    &format!("failed to serialize report: {}", e),
                );
                return 1;
            }
        }
    } else {
        print!("{}", report::render_text(&report));
    }

    0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
