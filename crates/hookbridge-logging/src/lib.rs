//! Log configuration.
//!
//! Logs go either to a human-readable tree on stderr, or as bunyan JSON
//! records on stdout when `LOGGING_USE_BUNYAN` is set.

use std::str::FromStr;

use hookbridge_config::{Config, LoggingConfig};
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};
use tracing_tree::HierarchicalLayer;

/// Logging setup error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not install the tracing subscriber,\n  caused by: {source}")]
    SubscriberError {
        source: tracing::subscriber::SetGlobalDefaultError,
    },
    #[error("Could not forward `log` records to tracing,\n  caused by: {source}")]
    LogForwardingError {
        source: tracing_log::log::SetLoggerError,
    },
    #[error("Invalid log filter '{filter}',\n  caused by: {source}")]
    InvalidFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Install the global subscriber for the bridge.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    // Validate the filter before touching any global state.
    let filter = build_filter(&config.logging)?;

    LogTracer::init().map_err(|e| LoggingError::LogForwardingError { source: e })?;

    let use_bunyan = config.logging.use_bunyan;
    let tree = (!use_bunyan).then(|| {
        HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true)
    });
    let bunyan = use_bunyan.then(|| {
        JsonStorageLayer.and_then(BunyanFormattingLayer::new(
            format!("hookbridge-{}", config.version),
            std::io::stdout,
        ))
    });

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default())
        .with(tree)
        .with(bunyan);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::SubscriberError { source: e })
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::from_str(&config.filter).map_err(|e| LoggingError::InvalidFilter {
        filter: config.filter.clone(),
        source: e,
    })
}
