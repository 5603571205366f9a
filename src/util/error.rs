// WorkflowView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant that wraps a lower-level error exposes it via `source()`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all WorkflowView operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum WorkflowViewError {
    /// Reading the log or writing matches failed.
    Scan(ScanError),

    /// The line patterns could not be compiled.
    Filter(FilterError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for WorkflowViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "Scan error: {e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for WorkflowViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Scan errors
// ---------------------------------------------------------------------------

/// Errors raised while scanning a log file. All of them are fatal.
#[derive(Debug)]
pub enum ScanError {
    /// The log file does not exist.
    NotFound { path: PathBuf, source: io::Error },

    /// The log file exists but could not be opened.
    Open { path: PathBuf, source: io::Error },

    /// A line is not valid UTF-8.
    InvalidEncoding {
        file: PathBuf,
        line_number: u64,
        source: std::string::FromUtf8Error,
    },

    /// I/O error while reading a line.
    Read {
        file: PathBuf,
        line_number: u64,
        source: io::Error,
    },

    /// Writing a match to the output failed.
    Output { source: io::Error },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path, source } => {
                write!(f, "Log file '{}' not found: {source}", path.display())
            }
            Self::Open { path, source } => {
                write!(f, "Cannot open log file '{}': {source}", path.display())
            }
            Self::InvalidEncoding {
                file,
                line_number,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: invalid UTF-8 encoding: {source}",
                file.display()
            ),
            Self::Read {
                file,
                line_number,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: I/O error: {source}",
                file.display()
            ),
            Self::Output { source } => write!(f, "Failed to write output: {source}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { source, .. } => Some(source),
            Self::Open { source, .. } => Some(source),
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
            Self::Output { source } => Some(source),
        }
    }
}

impl From<ScanError> for WorkflowViewError {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors related to building the line filter.
#[derive(Debug)]
pub enum FilterError {
    /// A line pattern is not a valid regex.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegex { pattern, source } => {
                write!(f, "Invalid line pattern '{pattern}': {source}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
        }
    }
}

impl From<FilterError> for WorkflowViewError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for WorkflowViewError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for WorkflowView results.
pub type Result<T> = std::result::Result<T, WorkflowViewError>;
