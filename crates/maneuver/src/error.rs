use std::fmt;

use thiserror::Error;

/// A registered item that panicked while executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorFailure {
    /// Registration index within the frame.
    pub index: usize,
    pub behavior: &'static str,
    pub message: String,
}

impl fmt::Display for BehaviorFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}: {}", self.index, self.behavior, self.message)
    }
}

/// Raised after a frame in which one or more registered items panicked.
///
/// Every other item of that frame still ran, and the queue was cleared.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{count} behavior(s) failed this frame", count = .failures.len())]
pub struct ExecutionError {
    failures: Vec<BehaviorFailure>,
}

impl ExecutionError {
    /// Returns `None` when there is nothing to report.
    pub fn from_failures(failures: Vec<BehaviorFailure>) -> Option<Self> {
        (!failures.is_empty()).then_some(Self { failures })
    }

    pub fn failures(&self) -> &[BehaviorFailure] {
        &self.failures
    }
}
