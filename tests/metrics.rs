//! Unit tests for domain metric registration.

use decklog_server::metrics;

#[test]
fn matches_counter_exists_after_init() {
    metrics::init_counters();

    let families = metrics::METRICS.registry.gather();
    assert!(
        families
            .iter()
            .any(|f| f.get_name() == "matches_logged_total"),
        "counter series registered before any increment"
    );
}
