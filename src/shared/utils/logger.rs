use log::{debug, error, info, warn};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Install `env_logger` once; `RUST_LOG` overrides the defaults below
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .filter_module("planet_catalog", log::LevelFilter::Debug)
            .filter_module("tower_http", log::LevelFilter::Info)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

fn millis_since(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// One-line log records for storage and outbound HTTP calls
pub struct LogContext;

impl LogContext {
    pub fn db_operation(operation: &str, table: &str, started: Instant) {
        debug!("DB: {} on {} took {}ms", operation, table, millis_since(started));
    }

    pub fn api_request(service: &str, operation: &str) {
        debug!("API: {} {} sent", service, operation);
    }

    pub fn api_response(service: &str, operation: &str, status: &str, started: Instant) {
        info!(
            "API: {} {} answered {} in {}ms",
            service,
            operation,
            status,
            millis_since(started)
        );
    }

    /// Warn when `started` is more than `threshold_ms` ago
    pub fn slow_operation(operation: &str, started: Instant, threshold_ms: u64) {
        let elapsed = millis_since(started);
        if elapsed > threshold_ms {
            warn!("Slow: {} took {}ms (over {}ms)", operation, elapsed, threshold_ms);
        }
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}

/// Logs how long a use case took once it finishes
pub struct TimedOperation {
    started: Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            started: Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let elapsed = millis_since(self.started);
        info!("Performance: {} took {}ms", self.operation, elapsed);
        elapsed
    }
}
