//! Purpose: Opt-in tracing setup for host applications and tests.
//! Exports: `init_tracing`.
//! Role: The codec only emits `tracing` events; installing a subscriber is the host's call.
//! Invariants: Safe to call repeatedly; later calls are no-ops.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
