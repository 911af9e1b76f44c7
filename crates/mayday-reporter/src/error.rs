//! Reporter error types

use std::path::PathBuf;

use mayday_core::ConfigError;
use thiserror::Error;

/// Errors surfaced by the report pipeline.
///
/// Delivery failures are not represented here: the webhook is fire and
/// forget, so they are logged at the call site and never returned.
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("failed to write trace file {}: {source}", .path.display())]
    TraceWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ReporterError {
    /// Stable numeric code, present for configuration errors only.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Configuration(err) => Some(err.code()),
            Self::TraceWrite { .. } => None,
        }
    }
}

/// Why a notifier could not be constructed.
#[derive(Error, Debug)]
pub enum NotifierInitError {
    /// Required delivery settings are missing; the event fails fast.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No TLS-capable HTTP client could be built; the pipeline answers with
    /// the not-notified terminal response instead.
    #[error("webhook transport unavailable: {0}")]
    Transport(#[source] reqwest::Error),
}
