/// Risk analysis for the weather risk service.
///
/// This module turns an ingested forecast series into the hazard summary
/// shown to the user. It is pure computation over in-memory values — no
/// I/O, no shared state — so everything here is safe to call concurrently
/// and trivially deterministic to test.
///
/// Submodules:
/// - `risk` — the risk assessment engine: per-hazard classification,
///   overall score, and horizon confidence.

pub mod risk;
