//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/shorts-trends/shorts-cli.log` (or platform
//! equivalent) with 10 MB size-based rotation. Set `DEBUG_LOGGING=1` to
//! enable debug output for the shorts crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,shorts_core=debug,shorts_cli=debug";

/// Initialize logging with dual output (file + stderr).
///
/// Returns a `WorkerGuard` that MUST be held for the application lifetime
/// to ensure all buffered logs are flushed on shutdown.
///
/// The console layer only shows warnings unless `DEBUG_LOGGING` is set, so
/// log lines do not interleave with dashboard output.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let log_dir = match dirs::config_dir() {
        Some(config) => config.join("shorts-trends"),
        None => {
            init_console_only(debug_logging);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Can't use tracing yet since subscriber not initialized
        eprintln!(
            "Failed to create log directory {:?}: {}, using console only",
            log_dir, e
        );
        init_console_only(debug_logging);
        return None;
    }

    // 10 MB, keep 1 rotated file
    let log_path = log_dir.join("shorts-cli.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(10 * 1024 * 1024),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_console_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer(debug_logging))
        .with(filter(debug_logging))
        .init();

    tracing::info!(
        log_file = ?log_path,
        debug_logging,
        "shorts-cli logging initialized"
    );

    Some(guard)
}

/// Fallback when file logging is unavailable.
fn init_console_only(debug_logging: bool) {
    tracing_subscriber::registry()
        .with(console_layer(debug_logging))
        .with(filter(debug_logging))
        .init();

    tracing::info!(debug_logging, "shorts-cli logging initialized (console only)");
}

fn console_layer<S>(debug_logging: bool) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(console_level(debug_logging))
}

/// stdout belongs to the dashboard; the console only carries warnings by default
fn console_level(debug_logging: bool) -> LevelFilter {
    if debug_logging {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

fn filter(debug_logging: bool) -> EnvFilter {
    EnvFilter::new(if debug_logging { DEBUG_DIRECTIVE } else { "info" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_stays_quiet_unless_debugging() {
        assert_eq!(console_level(false), LevelFilter::WARN);
        assert_eq!(console_level(true), LevelFilter::DEBUG);
    }

    #[test]
    fn debug_directive_parses() {
        assert!(DEBUG_DIRECTIVE.parse::<EnvFilter>().is_ok());
    }
}
