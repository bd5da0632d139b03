//! File-based logging initialization

use super::config::LogConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the non-blocking writers flushing until dropped at shutdown.
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation for the main log
/// - Optional realtime debug log (truncated on startup, for live monitoring)
/// - Non-blocking writes so a slow disk never stalls the event loop
/// - Panic hook integration for crash logging
///
/// Stdout belongs to the operator surface, so nothing is logged there.
/// Returns `None` when the log directory cannot be created; the console
/// then runs without logging.
pub fn init(config: &LogConfig) -> Option<LogGuards> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);
    let (non_blocking_main, guard_main) = tracing_appender::non_blocking(file_appender);
    let mut guards = vec![guard_main];

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("curator_console=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_main)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let realtime_layer = if config.enable_realtime_log {
        // Fresh file per session
        match fs::File::create(config.realtime_log_file()) {
            Ok(file) => {
                let (non_blocking_realtime, guard_realtime) = tracing_appender::non_blocking(file);
                guards.push(guard_realtime);
                Some(
                    fmt::layer()
                        .with_writer(non_blocking_realtime)
                        .with_target(true)
                        .with_thread_names(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_ansi(false)
                        .pretty(),
                )
            }
            Err(e) => {
                eprintln!("Warning: Failed to create realtime log file: {}", e);
                None
            }
        }
    } else {
        None
    };

    let init_result = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(realtime_layer)
        .try_init();

    if let Err(e) = init_result {
        eprintln!("Warning: Logging already initialized: {}", e);
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        realtime_log = config.enable_realtime_log,
        "Logging initialized"
    );

    setup_panic_hook();

    Some(LogGuards { _guards: guards })
}

/// Set up panic hook to log panics with location and message
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
