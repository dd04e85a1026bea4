/// Outdoor-event weather risk service.
///
/// Resolves a free-text location, retrieves a daily forecast (or past
/// daily weather) from Open-Meteo, and assesses it against user-owned
/// comfort thresholds, producing per-hazard risk levels, an overall score,
/// and a horizon-based confidence percentage.
///
/// The crate separates pure computation from I/O: `analysis` never
/// performs network or filesystem access, and `ingest` owns every remote
/// call.

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod landmarks;
pub mod logging;
pub mod model;
pub mod report;
