//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::IntCounter;

/// Global Prometheus handle reused in tests.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics") // exposed URL
        .build()
        .expect("metrics builder")
});

/// Matches logged since start-up (all users).
pub static MATCHES_LOGGED: Lazy<IntCounter> = Lazy::new(|| {
    let c = IntCounter::new("matches_logged_total", "Logged matches accepted")
        .expect("counter definition");
    METRICS
        .registry
        .register(Box::new(c.clone()))
        .expect("counter registration");
    c
});

/// Register the domain counters eagerly so every series exists from the
/// first scrape, not from its first increment.
pub fn init_counters() {
    Lazy::force(&MATCHES_LOGGED);
}
