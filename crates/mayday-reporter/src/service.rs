//! The report pipeline
//!
//! One entry point for every error channel: validate configuration, persist
//! the trace, format the diagnostic line, deliver it, and decide whether
//! the request terminates.

use tracing::{error, warn};

use mayday_core::{ReportEvent, ReporterConfig};

use crate::bridge::{bridge_runtime_error, ErrorDisposition, ReportingMask, RuntimeError};
use crate::error::{NotifierInitError, ReporterError};
use crate::response::{terminal_response, ReportOutcome, NOTIFIED_TEXT, NOT_NOTIFIED_TEXT};
use crate::slack::SlackNotifier;
use crate::trace_file::TraceWriter;

/// Reports error events to Slack and produces the terminal response for
/// uncaught ones. Holds no mutable state; share it behind an `Arc`.
pub struct Reporter {
    config: ReporterConfig,
}

impl Reporter {
    /// Store the configuration as given. Validation is deferred to event
    /// time, so an incomplete config only fails once something is reported.
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Report one event.
    ///
    /// Missing delivery settings fail fast (stable code 1394918214) before
    /// anything is written or sent. Otherwise exactly one trace file is
    /// written and one webhook delivery attempted; delivery failures are
    /// logged and ignored. `was_caught == false` yields the terminal
    /// response the caller must return; `true` resumes normally.
    pub async fn handle_exception(
        &self,
        event: &ReportEvent,
        was_caught: bool,
    ) -> Result<ReportOutcome, ReporterError> {
        self.config.validate()?;

        let writer = TraceWriter::new(self.config.resolved_trace_path());
        let trace_file = writer.write(event).await?;

        let text = format_report_line(&self.config, event, was_caught, &trace_file);

        match SlackNotifier::from_config(&self.config) {
            Ok(notifier) => {
                if let Err(err) = notifier.send(&text).await {
                    warn!("webhook delivery failed: {err}");
                }
            }
            Err(NotifierInitError::Config(err)) => return Err(err.into()),
            Err(NotifierInitError::Transport(err)) => {
                // No usable HTTP client: answer with the not-notified body,
                // for caught and uncaught events alike.
                error!("webhook transport unavailable: {err}");
                return Ok(ReportOutcome::Respond(terminal_response(
                    500,
                    NOT_NOTIFIED_TEXT,
                )));
            }
        }

        if was_caught {
            Ok(ReportOutcome::Resume)
        } else {
            Ok(ReportOutcome::Respond(terminal_response(500, NOTIFIED_TEXT)))
        }
    }

    /// Report an explicitly caught event; the caller resumes afterwards.
    pub async fn report_caught(
        &self,
        event: &ReportEvent,
    ) -> Result<ReportOutcome, ReporterError> {
        self.handle_exception(event, true).await
    }

    /// Offer a non-fatal runtime error to the reporter.
    ///
    /// Severities excluded by the mask are skipped without side effects and
    /// yield `None` (continue default processing). Anything else is
    /// converted and reported as an uncaught event. The mask check runs
    /// before configuration validation, so masked errors never fail.
    pub async fn handle_runtime_error(
        &self,
        error: RuntimeError,
        mask: ReportingMask,
    ) -> Result<Option<ReportOutcome>, ReporterError> {
        match bridge_runtime_error(error, mask) {
            ErrorDisposition::Ignored => Ok(None),
            ErrorDisposition::Raised(event) => self.handle_exception(&event, false).await.map(Some),
        }
    }
}

pub(crate) fn format_report_line(
    config: &ReporterConfig,
    event: &ReportEvent,
    was_caught: bool,
    trace_file: &str,
) -> String {
    let kind = if was_caught { "caught" } else { "uncaught" };
    format!(
        "{}/{}@{}: {} Exception in file {} on line {} (Code: {} - Trace: {}): {}",
        config.hostname,
        config.version,
        config.env,
        kind,
        event.file,
        event.line,
        event.code,
        trace_file,
        event.message
    )
}
