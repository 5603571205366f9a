// WorkflowView - core/scan.rs
//
// Sequential line scan: read a line, test both patterns, write each match.
// Core layer: accepts BufRead/Write trait objects, never touches the
// filesystem directly.

use crate::core::filter::LineFilter;
use crate::core::model::ScanSummary;
use crate::util::constants;
use crate::util::error::ScanError;
use std::io::{BufRead, Write};
use std::path::Path;

/// Scan `reader` line by line, writing every match span plus `\n` to `out`.
///
/// Lines are split on `\n`; a trailing `\r` is dropped so CRLF files behave
/// the same as LF files. Any read, decode, or write failure ends the scan.
/// Matches written before the failure stay written.
///
/// # Arguments
/// * `reader` - Source of log lines
/// * `source` - Path of the source (for error context only)
/// * `filter` - Compiled line patterns
/// * `out` - Destination for matched spans
pub fn scan<R: BufRead, W: Write>(
    mut reader: R,
    source: &Path,
    filter: &LineFilter,
    mut out: W,
) -> Result<ScanSummary, ScanError> {
    let mut summary = ScanSummary::default();
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();
        let line_number = summary.lines_read + 1;
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| ScanError::Read {
                file: source.to_path_buf(),
                line_number,
                source: e,
            })?;
        if read == 0 {
            break;
        }
        summary.lines_read = line_number;

        trim_line_ending(&mut buf);
        let line = String::from_utf8(std::mem::take(&mut buf)).map_err(|e| {
            ScanError::InvalidEncoding {
                file: source.to_path_buf(),
                line_number,
                source: e,
            }
        })?;

        for m in filter.matches(&line) {
            tracing::trace!(
                line = line_number,
                kind = %m.kind,
                span = preview(m.span),
                "Line matched"
            );
            writeln!(out, "{}", m.span).map_err(|e| ScanError::Output { source: e })?;
            summary.record(m.kind);
        }

        // Hand the allocation back for the next line.
        buf = line.into_bytes();
    }

    out.flush().map_err(|e| ScanError::Output { source: e })?;

    tracing::debug!(
        file = %source.display(),
        lines = summary.lines_read,
        workers_started = summary.workers_started,
        tasks_finished = summary.tasks_finished,
        "Scan complete"
    );

    Ok(summary)
}

/// Strip one trailing `\n` and then one trailing `\r`.
fn trim_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Truncate long spans so trace output stays readable.
fn preview(span: &str) -> &str {
    if span.len() <= constants::DEBUG_MAX_LINE_PREVIEW {
        return span;
    }
    let mut end = constants::DEBUG_MAX_LINE_PREVIEW;
    while !span.is_char_boundary(end) {
        end -= 1;
    }
    &span[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    const WORKER: &str = "2020-01-01 10:00:00 INFO: [pid 123] Worker WorkerA running   task1";
    const DONE: &str =
        "2020-01-01 10:00:05 INFO: Informed scheduler that task task1 has status    DONE";
    const CANCELLED: &str =
        "2020-01-01 10:00:05 INFO: Informed scheduler that task task1 has status    CANCELLED";

    fn run(input: &[u8]) -> (Result<ScanSummary, ScanError>, String) {
        let filter = LineFilter::new().expect("patterns compile");
        let mut out = Vec::new();
        let result = scan(Cursor::new(input), Path::new("test.log"), &filter, &mut out);
        (result, String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        let (result, out) = run(b"");
        assert_eq!(result.unwrap(), ScanSummary::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_matches_written_in_input_order() {
        let input = format!("{WORKER}\nnoise line\n{DONE}\n{CANCELLED}\n");
        let (result, out) = run(input.as_bytes());
        assert_eq!(out, format!("{WORKER}\n{DONE}\n"));

        let summary = result.unwrap();
        assert_eq!(summary.lines_read, 4);
        assert_eq!(summary.workers_started, 1);
        assert_eq!(summary.tasks_finished, 1);
        assert_eq!(summary.matches(), 2);
    }

    #[test]
    fn test_last_line_without_newline_is_scanned() {
        let (_, out) = run(DONE.as_bytes());
        assert_eq!(out, format!("{DONE}\n"));
    }

    #[test]
    fn test_crlf_line_endings_are_not_echoed() {
        let input = format!("{WORKER}\r\n{DONE}\r\n");
        let (_, out) = run(input.as_bytes());
        assert_eq!(out, format!("{WORKER}\n{DONE}\n"));
    }

    #[test]
    fn test_invalid_utf8_is_fatal_with_line_number() {
        let mut input = format!("{WORKER}\n").into_bytes();
        input.extend_from_slice(b"bad \xff\xfe bytes\n");
        input.extend_from_slice(format!("{DONE}\n").as_bytes());

        let (result, out) = run(&input);
        match result {
            Err(ScanError::InvalidEncoding { line_number, .. }) => assert_eq!(line_number, 2),
            other => panic!("expected InvalidEncoding, got {other:?}"),
        }
        // Output produced before the bad line is kept; nothing after it.
        assert_eq!(out, format!("{WORKER}\n"));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let input = format!("{WORKER}\n{DONE}\n{CANCELLED}\n{WORKER}\n");
        let (_, first) = run(input.as_bytes());
        let (_, second) = run(input.as_bytes());
        assert_eq!(first, second);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let filter = LineFilter::new().unwrap();
        let result = scan(
            Cursor::new(WORKER.as_bytes()),
            Path::new("test.log"),
            &filter,
            BrokenPipe,
        );
        assert!(
            matches!(result, Err(ScanError::Output { .. })),
            "expected Output error, got {result:?}"
        );
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let long = "é".repeat(constants::DEBUG_MAX_LINE_PREVIEW);
        let p = preview(&long);
        assert!(p.len() <= constants::DEBUG_MAX_LINE_PREVIEW);
        assert!(long.starts_with(p));
    }
}
