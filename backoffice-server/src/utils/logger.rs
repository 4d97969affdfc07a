//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and
//! production environments.

use std::path::Path;

/// Initialize the logger
///
/// Respects `RUST_LOG` when set, otherwise defaults to
/// `backoffice_server=info,tower_http=info`.
pub fn init_logger() {
    init_logger_with_file(None);
}

/// Initialize the logger with optional daily-rotated file output
pub fn init_logger_with_file(log_dir: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "backoffice_server=info,tower_http=info".into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "backoffice-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
