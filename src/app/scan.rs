// WorkflowView - app/scan.rs
//
// Scan orchestration: build the line filter, open the log, run the core
// scan into the given writer, and report the outcome through tracing.
// Single pass, single thread; every error is fatal and returned as-is.

use crate::core::filter::LineFilter;
use crate::core::model::ScanSummary;
use crate::core::scan;
use crate::platform;
use crate::util::error::Result;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Scan the log at `path`, writing matched spans to `out`.
pub fn scan_file<W: Write>(path: &Path, out: W) -> Result<ScanSummary> {
    let started = Instant::now();
    let filter = LineFilter::new()?;
    let reader = platform::fs::open_log(path)?;

    let summary = scan::scan(reader, path, &filter, out)?;

    tracing::info!(
        file = %path.display(),
        lines = summary.lines_read,
        matches = summary.matches(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Scan finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::{ScanError, WorkflowViewError};

    #[test]
    fn test_missing_file_surfaces_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = scan_file(&dir.path().join("absent.log"), Vec::new());
        assert!(
            matches!(
                result,
                Err(WorkflowViewError::Scan(ScanError::NotFound { .. }))
            ),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn test_scans_file_into_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puppet.log");
        std::fs::write(
            &path,
            "a INFO: [pid 9] Worker WorkerX running   Job()\n\
             b INFO: Informed scheduler that task Job() has status   FAILED\n",
        )
        .unwrap();

        let mut out = Vec::new();
        let summary = scan_file(&path, &mut out).unwrap();

        assert_eq!(summary.workers_started, 1);
        assert_eq!(summary.tasks_finished, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a INFO: [pid 9] Worker WorkerX running   Job()\n\
             b INFO: Informed scheduler that task Job() has status   FAILED\n"
        );
    }
}
