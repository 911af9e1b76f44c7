//! Mayday reporter - Slack incident reporting for axum applications
//!
//! The reporter takes error events (caught or uncaught), persists a
//! plain-text stack trace, posts a one-line diagnostic to a Slack incoming
//! webhook, and for uncaught events produces the terminal JSON response
//! that ends request processing. Two adapters feed the pipeline: the panic
//! middleware (uncaught) and the runtime-error bridge (converted).

pub mod bridge;
pub mod error;
pub mod middleware;
pub mod response;
pub mod service;
pub mod slack;
pub mod trace_file;

// Re-export the main types for convenience
pub use bridge::{bridge_runtime_error, ErrorDisposition, ReportingMask, RuntimeError, Severity};
pub use error::{NotifierInitError, ReporterError};
pub use middleware::report_panics;
pub use response::{
    terminal_response, ReportOutcome, TerminalBody, NOTIFIED_TEXT, NOT_NOTIFIED_TEXT,
};
pub use service::Reporter;
pub use slack::{SlackNotifier, WebhookPayload};
pub use trace_file::{TraceWriter, TRACE_FILE_PREFIX};

// Re-export the core types applications build events from
pub use mayday_core::{ConfigError, FrameArg, ReportEvent, ReporterConfig, StackFrame};
