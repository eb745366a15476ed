//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` (falling back to `config.log_level`);
/// output is plain text or one JSON object per line depending on
/// `config.log_format`.
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.log_format == "json" {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing already initialised: {e}");
    }
}
