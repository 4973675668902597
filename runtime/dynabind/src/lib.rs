//! Dynabind - benchmark driver for the binding cache.
//!
//! Reproduces the classic worst case for per-site binding caches: every
//! iteration defines a brand-new concrete type and reads one attribute from
//! an instance of it, so the site misses and re-runs detection every time.

pub mod harness;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=dyb_bind=debug` or `RUST_LOG=dynabind=info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
