// WorkflowView - core/model.rs
//
// Match results produced by the line filter.
// Borrowed from the scanned line; nothing here outlives one loop iteration.

use std::fmt;

/// Which line pattern produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// A worker began running a task.
    WorkerStarted,
    /// The scheduler was told a task ended as DONE or FAILED.
    TaskFinished,
}

impl MatchKind {
    /// Short label for diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::WorkerStarted => "worker-started",
            Self::TaskFinished => "task-finished",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A successful pattern application: the full match span, not a capture group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    pub kind: MatchKind,
    pub span: &'a str,
}

/// Counters gathered during one scan. Diagnostic only; never printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total lines read.
    pub lines_read: u64,
    /// Worker-start matches emitted.
    pub workers_started: u64,
    /// Task-result matches emitted.
    pub tasks_finished: u64,
}

impl ScanSummary {
    /// Total matches emitted across both patterns.
    pub fn matches(&self) -> u64 {
        self.workers_started + self.tasks_finished
    }

    pub(crate) fn record(&mut self, kind: MatchKind) {
        match kind {
            MatchKind::WorkerStarted => self.workers_started += 1,
            MatchKind::TaskFinished => self.tasks_finished += 1,
        }
    }
}
