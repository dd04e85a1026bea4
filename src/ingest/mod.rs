/// Remote data retrieval for the weather risk service.
///
/// Everything that touches the network lives here. The rest of the crate
/// works on the domain types these clients produce and never sees a URL,
/// an HTTP status, or a provider field name.
///
/// Submodules:
/// - `open_meteo` — daily forecast and historical weather from the
///   Open-Meteo forecast/archive APIs.
/// - `geocode` — free-text location resolution via the landmark registry
///   and the Open-Meteo geocoding API.

pub mod geocode;
pub mod open_meteo;
