//! Shared test utilities.

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
});

/// Install the test tracing subscriber once per process.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
