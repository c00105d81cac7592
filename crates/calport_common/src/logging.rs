//! Logging utilities for the Calport application.
//!
//! Initializes the global `tracing` subscriber. Binaries call [`init`] or
//! [`init_with_level`] once at startup; `RUST_LOG` directives are honored on top of
//! the given level.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use calport_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific level for the `calport` crates.
///
/// Calling this more than once is harmless; only the first call installs a subscriber.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("calport={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    // try_init: a global default subscriber may already be set (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
