// WorkflowView - util/constants.rs
//
// Single source of truth for named constants, patterns, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "WorkflowView";

/// Application identifier used for the config directory.
pub const APP_ID: &str = "WorkflowView";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input
// =============================================================================

/// Log file scanned when no path is given on the command line.
/// Resolved relative to the current working directory.
pub const DEFAULT_LOG_PATH: &str = "ignored/puppet.log";

// =============================================================================
// Line patterns
// =============================================================================

/// Worker-start line, e.g.
/// `2020-01-01 10:00:00 INFO: [pid 123] Worker WorkerA running   task1`.
///
/// Greedy `(.*)` tails mean the match span always runs to end of line.
pub const WORKER_STARTED_PATTERN: &str =
    r"^(.*) INFO: \[pid \d+\] Worker Worker(.*) running\s\s\s(.*)";

/// Task-result line reporting a terminal DONE or FAILED status, e.g.
/// `2020-01-01 10:00:05 INFO: Informed scheduler that task task1 has status    DONE`.
///
/// The span ends at the status token; anything after it is not emitted.
pub const TASK_FINISHED_PATTERN: &str =
    r"^(.*) INFO: Informed scheduler that task (.*) has status\s+(DONE|FAILED)";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at `warn` so a normal run prints matches only.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Level names accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
