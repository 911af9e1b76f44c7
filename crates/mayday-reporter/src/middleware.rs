//! Panic-catching middleware feeding uncaught events into the reporter

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use futures_util::FutureExt;
use tracing::error;

use mayday_core::ReportEvent;

use crate::response::{terminal_response, ReportOutcome, NOTIFIED_TEXT, NOT_NOTIFIED_TEXT};
use crate::service::Reporter;

/// Catch panics from downstream handlers, report them as uncaught events,
/// and answer with the terminal response.
///
/// Install with
/// `axum::middleware::from_fn_with_state(reporter.clone(), report_panics)`.
pub async fn report_panics(
    State(reporter): State<Arc<Reporter>>,
    request: Request,
    next: Next,
) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let event = panic_event(&*panic);
            match reporter.handle_exception(&event, false).await {
                Ok(ReportOutcome::Respond(response)) => response,
                // Delivery happened but no terminal response was produced;
                // a request handler must still answer.
                Ok(ReportOutcome::Resume) => terminal_response(500, NOTIFIED_TEXT),
                Err(err) => {
                    error!("failed to report panic: {err}");
                    terminal_response(500, NOT_NOTIFIED_TEXT)
                }
            }
        }
    }
}

fn panic_event(panic: &(dyn Any + Send)) -> ReportEvent {
    let message = if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unhandled panic".to_string()
    };
    ReportEvent::new(message, 0, "unknown file", 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_event_extracts_str_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        let event = panic_event(&*payload);
        assert_eq!(event.message, "boom");
        assert_eq!(event.code, 0);
        assert_eq!(event.file, "unknown file");
        assert_eq!(event.line, 0);
    }

    #[test]
    fn test_panic_event_extracts_string_payloads() {
        let payload: Box<dyn Any + Send> = Box::new(format!("boom {}", 42));
        assert_eq!(panic_event(&*payload).message, "boom 42");
    }

    #[test]
    fn test_panic_event_falls_back_for_opaque_payloads() {
        let payload: Box<dyn Any + Send> = Box::new(17_u32);
        assert_eq!(panic_event(&*payload).message, "unhandled panic");
    }
}
