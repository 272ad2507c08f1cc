//! Shared setup for integration tests.

use rstest::fixture;
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber filtered by `RUST_LOG` so rebalancing
/// events can be inspected with `RUST_LOG=rbmap=trace cargo test`.
///
/// Installing twice is harmless; later attempts are ignored.
#[fixture]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
