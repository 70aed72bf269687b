use std::io;
use std::path::Path;
use tracing::warn;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Console filter when `RUST_LOG` is not set. Processing chatter stays quiet so
/// it doesn't fight with the progress line.
const DEFAULT_STDOUT_FILTER: &str = "warn,newsdesk=info,pipeline=warn,synth=warn,state=info";

/// File filter: everything the desk does, including per-step pipeline events.
const DEFAULT_FILE_FILTER: &str = "info,pipeline=debug,synth=debug,report=debug,export=debug";

/// Daily `newsdesk.<date>.log` files under `log_dir`, created on demand.
fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("newsdesk")
        .filename_suffix("log")
        .build(log_dir)
}

/// Installs console and file logging. When `log_dir` is unusable only the
/// console layer is installed.
pub fn configure_logging(log_dir: &Path) {
    let stdout_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_STDOUT_FILTER));

    // Console log configuration (stderr keeps stdout clean for rendered output)
    let stdout_log = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(stdout_filter);

    // File log configuration
    let (file_log, file_error) = match file_appender(log_dir) {
        Ok(appender) => (
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(appender)
                    .with_filter(EnvFilter::new(DEFAULT_FILE_FILTER)),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    // A second call (tests, repeated CLI setup) keeps the first subscriber.
    let _ = tracing_subscriber::Registry::default()
        .with(stdout_log)
        .with(file_log)
        .try_init();

    if let Some(e) = file_error {
        warn!("File logging disabled, {} is unusable: {}", log_dir.display(), e);
    }
}
