//! Terminal JSON response for uncaught events

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use mayday_core::status;

pub const NOTIFIED_TEXT: &str =
    "Okay, Houston, we've had a problem here. -- Don't panic. The Team has been notified.";
pub const NOT_NOTIFIED_TEXT: &str =
    "Okay, Houston, we've had a problem here. -- The Team could not be notified.";

/// Body of the terminal response; field order is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TerminalBody {
    pub status: u16,
    pub message: String,
}

/// What the caller must do after a report.
#[derive(Debug)]
pub enum ReportOutcome {
    /// A terminal response was produced. Return it and stop; nothing else
    /// may run for the current request.
    Respond(Response),
    /// The event was reported out of band; resume normal processing.
    Resume,
}

impl ReportOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Respond(_))
    }

    pub fn into_response(self) -> Option<Response> {
        match self {
            Self::Respond(response) => Some(response),
            Self::Resume => None,
        }
    }
}

/// Build the terminal response: catalog-checked status (unknown codes fall
/// back to 500), `application/json` content type, trimmed message body.
pub fn terminal_response(status: u16, message: &str) -> Response {
    let status = if status::is_known(status) { status } else { 500 };
    let status_code =
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = TerminalBody {
        status,
        message: message.trim().to_string(),
    };
    (status_code, axum::Json(body)).into_response()
}
