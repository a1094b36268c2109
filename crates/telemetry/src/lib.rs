//! Tracing bootstrap shared by the herald binaries.
//!
//! Diagnostics always go to stderr: stdout carries the wrapper's
//! announcements and nothing else.

use herald_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the configured level parses.
const FALLBACK_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, in which case
/// nothing changes.
pub fn init(settings: &TelemetrySettings) -> bool {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(rust_log.as_deref(), &settings.level);

    let installed = match settings.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .try_init(),
    }
    .is_ok();

    if installed {
        tracing::debug!(
            target: "herald-telemetry",
            format = ?settings.log_format,
            "telemetry initialized"
        );
    }
    installed
}

/// `rust_log` wins when it parses, then the configured `level`, then `warn`.
fn build_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER))
}
