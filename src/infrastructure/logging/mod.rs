// Logging module - Logging infrastructure
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::domain::error::{SerialPickError, SerialPickResult};
use std::io;

/// Build the filter directive: debug when verbose, otherwise the configured level
pub fn filter_directive(log_level: &str, verbose: bool) -> String {
    let level = if verbose {
        "debug"
    } else {
        match log_level {
            "error" | "warn" | "info" | "debug" | "trace" => log_level,
            _ => "warn",
        }
    };

    format!("serialpick={}", level)
}

/// Initialize logging system
///
/// Log lines go to stderr so the interactive menus on stdout stay readable.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(log_level: &str, verbose: bool) -> SerialPickResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level, verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true)
        )
        .try_init()
        .map_err(|e| SerialPickError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;

    tracing::debug!("SerialPick logging system initialized");
    Ok(())
}
