//! Trace-file persistence
//!
//! One plain-text file per reported event, written under the configured
//! directory. The reporter never reads the files back; rotation and cleanup
//! belong to the deployment.

use std::path::PathBuf;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use mayday_core::{render_trace, ReportEvent};

use crate::error::ReporterError;

pub const TRACE_FILE_PREFIX: &str = "handleException";

pub struct TraceWriter {
    dir: PathBuf,
}

impl TraceWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Write one trace file for the event and return its file name.
    ///
    /// Names follow `handleException.<unixTimestamp>.trace.<unique>.txt`.
    /// Write failures propagate; the filesystem is treated as available.
    pub async fn write(&self, event: &ReportEvent) -> Result<String, ReporterError> {
        let file_name = format!(
            "{}.{}.trace.{}.txt",
            TRACE_FILE_PREFIX,
            Utc::now().timestamp(),
            Uuid::new_v4().simple()
        );
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, render_trace(&event.frames))
            .await
            .map_err(|source| ReporterError::TraceWrite {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "trace file written");
        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mayday_core::StackFrame;

    #[tokio::test]
    async fn test_writes_rendered_trace_and_returns_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TraceWriter::new(dir.path().to_path_buf());

        let event = ReportEvent::new("boom", 7, "/srv/app.rs", 42)
            .with_frames(vec![StackFrame::new("main").at("/srv/app.rs", 42)]);
        let file_name = writer.write(&event).await.unwrap();

        assert!(file_name.starts_with("handleException."));
        assert!(file_name.ends_with(".txt"));
        assert!(file_name.contains(".trace."));

        let content = std::fs::read_to_string(dir.path().join(&file_name)).unwrap();
        assert_eq!(content, "#0 /srv/app.rs(42): main()\n");
    }

    #[tokio::test]
    async fn test_each_write_produces_a_distinct_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TraceWriter::new(dir.path().to_path_buf());
        let event = ReportEvent::new("boom", 0, "/srv/app.rs", 1);

        let first = writer.write(&event).await.unwrap();
        let second = writer.write(&event).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_missing_directory_propagates_io_error() {
        let writer = TraceWriter::new(PathBuf::from("/definitely/not/a/dir"));
        let event = ReportEvent::new("boom", 0, "/srv/app.rs", 1);

        let err = writer.write(&event).await.unwrap_err();
        assert!(matches!(err, ReporterError::TraceWrite { .. }));
    }
}
