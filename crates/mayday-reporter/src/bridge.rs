//! Bridge from non-fatal runtime errors into the report pipeline
//!
//! Runtime errors arrive on a separate channel from uncaught panics; the
//! bridge converts them into the one event shape the pipeline accepts,
//! unless the ambient reporting mask suppresses their severity.

use serde::{Deserialize, Serialize};

use mayday_core::ReportEvent;

/// Severity classes of non-fatal runtime errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Deprecation,
    Notice,
    Warning,
    Recoverable,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deprecation => "deprecation",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Recoverable => "recoverable",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Deprecation => 1 << 0,
            Self::Notice => 1 << 1,
            Self::Warning => 1 << 2,
            Self::Recoverable => 1 << 3,
        }
    }
}

/// Ambient reporting policy: which severities get converted and raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingMask(u8);

impl ReportingMask {
    pub fn all() -> Self {
        Self(0b1111)
    }

    pub fn none() -> Self {
        Self(0)
    }

    pub fn with(self, severity: Severity) -> Self {
        Self(self.0 | severity.bit())
    }

    pub fn contains(self, severity: Severity) -> bool {
        self.0 & severity.bit() != 0
    }
}

impl Default for ReportingMask {
    fn default() -> Self {
        Self::all()
    }
}

/// A non-fatal runtime error as raised by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeError {
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: u32,
}

/// Result of offering a runtime error to the bridge.
#[derive(Debug, Clone)]
pub enum ErrorDisposition {
    /// Severity masked out; default processing continues unchanged.
    Ignored,
    /// Converted event, to be fed through the report pipeline.
    Raised(ReportEvent),
}

impl ErrorDisposition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Convert a runtime error into a report event unless the mask suppresses
/// its severity. Converted events carry code 0 and an empty frame list.
pub fn bridge_runtime_error(error: RuntimeError, mask: ReportingMask) -> ErrorDisposition {
    if !mask.contains(error.severity) {
        return ErrorDisposition::Ignored;
    }
    ErrorDisposition::Raised(ReportEvent::new(error.message, 0, error.file, error.line))
}
