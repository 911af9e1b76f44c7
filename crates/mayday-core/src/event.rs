//! Report events and their stack-frame model
//!
//! A [`ReportEvent`] is the single shape every error channel converges on:
//! the panic adapter produces uncaught events, the runtime-error bridge
//! produces converted ones, and explicitly reported errors are built by the
//! caller. The reporter pipeline does not care which channel an event came
//! from; only the caught/uncaught flag at report time changes its behavior.

use serde::{Deserialize, Serialize};

/// One error occurrence, ready to be reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEvent {
    pub message: String,
    pub code: i64,
    pub file: String,
    pub line: u32,
    pub frames: Vec<StackFrame>,
}

impl ReportEvent {
    pub fn new(message: impl Into<String>, code: i64, file: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            code,
            file: file.into(),
            line,
            frames: Vec::new(),
        }
    }

    pub fn with_frames(mut self, frames: Vec<StackFrame>) -> Self {
        self.frames = frames;
        self
    }
}

/// One call-stack entry of a report event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackFrame {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub class: Option<String>,
    /// Token joining class and function (e.g. `::`)
    pub call_type: Option<String>,
    pub function: String,
    pub args: Vec<FrameArg>,
}

impl StackFrame {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            file: None,
            line: None,
            class: None,
            call_type: None,
            function: function.into(),
            args: Vec::new(),
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    pub fn in_class(mut self, class: impl Into<String>, call_type: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self.call_type = Some(call_type.into());
        self
    }

    pub fn with_arg(mut self, arg: FrameArg) -> Self {
        self.args.push(arg);
        self
    }
}

/// Rendered representation of one captured call argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FrameArg {
    /// String value, rendered single-quoted
    Str(String),
    /// Any sequence or mapping, rendered as the literal token `Array`
    Sequence,
    /// Missing value, rendered as the literal token `NULL`
    Null,
    Bool(bool),
    /// Object instance, rendered as its type name
    Object(String),
    /// OS resource or handle, rendered as its kind
    Resource(String),
    /// Anything else, rendered as its raw scalar representation
    Scalar(String),
}
