//! Plain-text rendering of stack traces for trace files

use crate::event::{FrameArg, StackFrame};

/// Render an ordered frame list, one line per frame:
///
/// ```text
/// #0 /srv/app.rs(42): Pool::connect('localhost', true)
/// #1 unknown file(unknown line): main()
/// ```
pub fn render_trace(frames: &[StackFrame]) -> String {
    let mut rendered = String::new();
    for (index, frame) in frames.iter().enumerate() {
        let file = frame.file.as_deref().unwrap_or("unknown file");
        let line = match frame.line {
            Some(line) => line.to_string(),
            None => "unknown line".to_string(),
        };
        let callable = match (&frame.class, &frame.call_type) {
            (Some(class), Some(call_type)) => format!("{}{}{}", class, call_type, frame.function),
            (Some(class), None) => format!("{}{}", class, frame.function),
            (None, _) => frame.function.clone(),
        };
        let args = frame
            .args
            .iter()
            .map(render_arg)
            .collect::<Vec<_>>()
            .join(", ");
        rendered.push_str(&format!("#{} {}({}): {}({})\n", index, file, line, callable, args));
    }
    rendered
}

fn render_arg(arg: &FrameArg) -> String {
    match arg {
        FrameArg::Str(value) => format!("'{}'", value),
        FrameArg::Sequence => "Array".to_string(),
        FrameArg::Null => "NULL".to_string(),
        FrameArg::Bool(true) => "true".to_string(),
        FrameArg::Bool(false) => "false".to_string(),
        FrameArg::Object(class) => class.clone(),
        FrameArg::Resource(kind) => kind.clone(),
        FrameArg::Scalar(repr) => repr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_one_line_per_frame_with_zero_based_index() {
        let frames = vec![
            StackFrame::new("connect").at("/srv/db.rs", 10),
            StackFrame::new("main"),
        ];
        let trace = render_trace(&frames);
        assert_eq!(
            trace,
            "#0 /srv/db.rs(10): connect()\n#1 unknown file(unknown line): main()\n"
        );
    }

    #[test]
    fn test_class_and_call_type_prefix_the_function() {
        let frames = vec![StackFrame::new("connect")
            .at("/srv/db.rs", 10)
            .in_class("Pool", "::")];
        assert_eq!(render_trace(&frames), "#0 /srv/db.rs(10): Pool::connect()\n");
    }

    #[test]
    fn test_argument_rendering_rules() {
        let frame = StackFrame::new("call")
            .with_arg(FrameArg::Str("x".into()))
            .with_arg(FrameArg::Null)
            .with_arg(FrameArg::Bool(true))
            .with_arg(FrameArg::Bool(false))
            .with_arg(FrameArg::Sequence)
            .with_arg(FrameArg::Object("Connection".into()))
            .with_arg(FrameArg::Resource("stream".into()))
            .with_arg(FrameArg::Scalar("42".into()));
        let trace = render_trace(&[frame]);
        assert_eq!(
            trace,
            "#0 unknown file(unknown line): call('x', NULL, true, false, Array, Connection, stream, 42)\n"
        );
    }

    #[test]
    fn test_empty_frame_list_renders_nothing() {
        assert_eq!(render_trace(&[]), "");
    }
}
