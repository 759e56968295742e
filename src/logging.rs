use std::backtrace::Backtrace;

use tracing_subscriber::{EnvFilter, fmt};

/// Subscriber for the HTTP server. `RUST_LOG` wins over the configured level.
pub fn init_tracing(log_level: &str) {
    fmt()
        .with_env_filter(env_filter(log_level))
        .with_target(false)
        .init();
    set_panic_hook();
}

/// Subscriber for the `migrate` binary: stderr, no timestamps, so progress
/// lines read like script output.
pub fn init_cli_tracing(log_level: &str) {
    fmt()
        .with_env_filter(env_filter(log_level))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
    set_panic_hook();
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
            *message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };

        let backtrace = Backtrace::capture();

        match info.location() {
            Some(location) => tracing::error!(
                panic = %message,
                location = %location,
                backtrace = %backtrace,
                "panic"
            ),
            None => tracing::error!(panic = %message, backtrace = %backtrace, "panic"),
        }
    }));
}
