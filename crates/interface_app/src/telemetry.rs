//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;
use crate::error::AppError;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins over `log_level` when set; an unparsable level falls back
/// to `info`. Fails if a global subscriber is already installed.
pub fn init_tracing(log_level: &str, format: LogFormat) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    result.map_err(|e| AppError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Another test in this binary may have installed one already.
        let _ = init_tracing("debug", LogFormat::Pretty);

        let result = init_tracing("debug", LogFormat::Json);
        assert!(matches!(result, Err(AppError::Telemetry(_))));
    }
}
