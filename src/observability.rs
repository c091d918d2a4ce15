//! Structured logging setup.
//!
//! Verbosity is controlled by the `RUST_LOG` environment variable; the
//! default shows warnings and errors only. Logging happens at effect
//! boundaries, and the synthesis core itself stays silent below `debug`
//! level.
//!
//! ```bash
//! # phase-level progress
//! RUST_LOG=info propmap analyze classes.json
//!
//! # per-class detail
//! RUST_LOG=debug propmap analyze classes.json
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
