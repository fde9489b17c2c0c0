//! Shared helpers for workspace tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the tracing subscriber for a test process.
///
/// Honors `RUST_LOG`; defaults to `debug` for workspace crates so scan
/// and aggregation events show up under `--nocapture`. Safe to call
/// from every test, the subscriber is installed once per process.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tagrank=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
