//! Tracing setup for tests
//!
//! Library crates never install a subscriber. Tests that want to see the
//! generator's debug events call [`init_test_tracing`]; `RUST_LOG` filters
//! the output as usual.

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // another harness may already own the global subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Installs the test subscriber once per process
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
