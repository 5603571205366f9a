// WorkflowView - platform/fs.rs
//
// Filesystem access for the scan: opening the log with typed errors.

use crate::util::error::ScanError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Open a log file for buffered line reading.
///
/// A missing file maps to `ScanError::NotFound`; any other failure
/// (permissions, special files) maps to `ScanError::Open`.
pub fn open_log(path: &Path) -> Result<BufReader<File>, ScanError> {
    match File::open(path) {
        Ok(file) => {
            tracing::debug!(path = %path.display(), "Opened log file");
            Ok(BufReader::new(file))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ScanError::NotFound {
            path: path.to_path_buf(),
            source: e,
        }),
        Err(e) => Err(ScanError::Open {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
