//! Logging Infrastructure
//!
//! Structured logging setup for the presenter binary. The library itself
//! only emits `tracing` events and never installs a subscriber.

use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` directives take precedence over `log_level`.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "catalog-presenter");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}

fn env_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(log_level).into())
        .from_env_lossy()
}

/// Level used when `RUST_LOG` is unset; unknown names fall back to info
fn default_level(log_level: Option<&str>) -> LevelFilter {
    log_level
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(Some("debug")), LevelFilter::DEBUG);
        assert_eq!(default_level(Some(" WARN ")), LevelFilter::WARN);
        assert_eq!(default_level(Some("off")), LevelFilter::OFF);
        assert_eq!(default_level(Some("loud")), LevelFilter::INFO);
        assert_eq!(default_level(None), LevelFilter::INFO);
    }
}
