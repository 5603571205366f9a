// WorkflowView - core/filter.rs
//
// The two line patterns and per-line evaluation.
// Both patterns are applied to every line; neither short-circuits the other.
// Core layer: pure logic, no I/O.

use crate::core::model::{LineMatch, MatchKind};
use crate::util::constants;
use crate::util::error::FilterError;
use regex::Regex;

/// Compiled worker-start and task-result patterns.
#[derive(Debug, Clone)]
pub struct LineFilter {
    worker_started: Regex,
    task_finished: Regex,
}

impl LineFilter {
    /// Compile both line patterns.
    pub fn new() -> Result<Self, FilterError> {
        Ok(Self {
            worker_started: compile(constants::WORKER_STARTED_PATTERN)?,
            task_finished: compile(constants::TASK_FINISHED_PATTERN)?,
        })
    }

    /// Span of the worker-start match in `line`, if any.
    pub fn worker_started<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.worker_started.find(line).map(|m| m.as_str())
    }

    /// Span of the task-result match in `line`, if any.
    pub fn task_finished<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.task_finished.find(line).map(|m| m.as_str())
    }

    /// All matches for `line`, worker-start first.
    ///
    /// Returns an empty vector for lines matching neither pattern.
    pub fn matches<'a>(&self, line: &'a str) -> Vec<LineMatch<'a>> {
        let started = self.worker_started(line).map(|span| LineMatch {
            kind: MatchKind::WorkerStarted,
            span,
        });
        let finished = self.task_finished(line).map(|span| LineMatch {
            kind: MatchKind::TaskFinished,
            span,
        });
        started.into_iter().chain(finished).collect()
    }
}

fn compile(pattern: &str) -> Result<Regex, FilterError> {
    Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}
