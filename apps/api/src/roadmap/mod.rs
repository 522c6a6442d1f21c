// Roadmap Generation Engine
// Implements: skill catalog, gap analysis, phase scheduling, effort estimation, assembly.
// Pure computation over the shared catalog; the only I/O happens in handlers (job lookup).

pub mod assembler;
pub mod catalog;
pub mod effort;
pub mod engine;
pub mod gap;
pub mod handlers;
pub mod models;
pub mod scheduler;

/// Rounds to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
