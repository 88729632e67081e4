use std::{path::Path, sync::Once};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static INIT: Once = Once::new();

/// Installs the global subscriber: stdout, plus a daily rolling file in
/// `log_dir` when given. Filtered by `RUST_LOG`, `info` by default. Only the
/// first call has an effect.
pub fn setup_telemetry(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        let file_appender = log_dir.and_then(|log_dir| {
            match RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("cnft-demo")
                .filename_suffix("log")
                .max_log_files(7)
                .build(log_dir)
            {
                Ok(appender) => Some(appender),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to create log file appender: {}. Logging to stdout only.",
                        e
                    );
                    None
                }
            }
        });

        let stdout_env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let stdout_layer = fmt::Layer::new()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_filter(stdout_env_filter);

        if let Some(file_appender) = file_appender {
            let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(EnvFilter::new("info"));

            tracing_subscriber::registry()
                .with(stdout_layer)
                .with(file_layer)
                .init();

            std::mem::forget(_guard);
        } else {
            tracing_subscriber::registry().with(stdout_layer).init();
        }
    });
}
