//! Prometheus metrics for the search pipeline.

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry};

/// Search lookups total by result ("ok" / "error").
pub static SEARCH_LOOKUPS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "cinemaguide_search_lookups_total",
            "Total search lookups dispatched",
        ),
        &["result"],
    )
    .unwrap()
});

/// Search lookup duration in seconds, minimum-loading floor included.
pub static SEARCH_LOOKUP_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "cinemaguide_search_lookup_duration_seconds",
            "Duration of search lookups as observed by the UI",
        )
        .buckets(vec![0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 10.0, 30.0]),
    )
    .unwrap()
});

/// Register all metrics with the given registry.
pub fn register_metrics(registry: &Registry) -> Result<(), prometheus::Error> {
    registry.register(Box::new(SEARCH_LOOKUPS.clone()))?;
    registry.register(Box::new(SEARCH_LOOKUP_DURATION.clone()))?;
    Ok(())
}
