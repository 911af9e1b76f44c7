//! Configuration error type

use thiserror::Error;

/// Stable code reported when required delivery settings are missing.
pub const MISSING_CONFIG_CODE: u32 = 1_394_918_214;

/// Errors raised when the reporter configuration is inspected at event time.
///
/// Setters never validate; this surfaces on first use instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "not all required parameters are set, configure the reporter before reporting (code {MISSING_CONFIG_CODE})"
    )]
    MissingRequired,
}

impl ConfigError {
    pub fn code(&self) -> u32 {
        match self {
            Self::MissingRequired => MISSING_CONFIG_CODE,
        }
    }
}
