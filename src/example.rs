//! Execution-result data model.
//!
//! These are the records the matchers inspect: an [`Example`] is a single
//! executed test case, and its [`ExecutionResult`] is the immutable record of
//! how it concluded. Matchers never mutate them; evaluation is a read.
//!
//! Providers construct these records when an example finishes running. The
//! fields are public so harness front-ends (and tests) can build any flag
//! combination, including shapes like skipped-but-not-pending.

use std::any;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How an example concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The example has not been executed yet.
    NotRun,
    Passed,
    Failed,
    /// The example ran in pending mode (covers the skip sub-case too).
    Pending,
}

impl Status {
    /// Returns the text used verbatim in diagnostic reasons.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotRun => "not run",
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Pending => "pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a concrete error type, compared by exact identity.
///
/// Two distinct concrete types never compare equal, so an "is-a" relationship
/// between error types is not enough to satisfy an exception-kind matcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExceptionKind(String);

impl ExceptionKind {
    /// The kind of the concrete type `T`, keyed by its full type path.
    pub fn of<T: ?Sized>() -> Self {
        ExceptionKind(any::type_name::<T>().to_string())
    }

    /// A kind with an explicit name, for providers whose error types are not
    /// Rust types (e.g. replayed from a serialized run).
    pub fn named(name: impl Into<String>) -> Self {
        ExceptionKind(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An error recorded against a failed example: the concrete kind plus the
/// rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    pub kind: ExceptionKind,
    pub message: String,
}

impl Exception {
    pub fn new(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Exception {
            kind,
            message: message.into(),
        }
    }

    /// An exception of kind `T` with the given message.
    pub fn of<T: ?Sized>(message: impl Into<String>) -> Self {
        Exception::new(ExceptionKind::of::<T>(), message)
    }

    /// Captures a live error value: its concrete type and rendered message.
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        Exception::new(ExceptionKind::of::<E>(), error.to_string())
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Immutable record of how an example concluded.
///
/// `pending_message` is set only for pending results; when the example is
/// additionally flagged skipped it carries the skip reason instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: Status,
    pub exception: Option<Exception>,
    pub pending_message: Option<String>,
}

impl ExecutionResult {
    pub fn not_run() -> Self {
        ExecutionResult {
            status: Status::NotRun,
            exception: None,
            pending_message: None,
        }
    }

    pub fn passed() -> Self {
        ExecutionResult {
            status: Status::Passed,
            exception: None,
            pending_message: None,
        }
    }

    pub fn failed(exception: Option<Exception>) -> Self {
        ExecutionResult {
            status: Status::Failed,
            exception,
            pending_message: None,
        }
    }

    pub fn pending(message: impl Into<String>) -> Self {
        ExecutionResult {
            status: Status::Pending,
            exception: None,
            pending_message: Some(message.into()),
        }
    }
}

impl Default for ExecutionResult {
    fn default() -> Self {
        ExecutionResult::not_run()
    }
}

/// A single executed test case: its result plus the pending/skipped flags.
///
/// `skipped` marks the skip sub-case of pending; a well-formed skipped example
/// is also pending, but the flags are independent so providers can express
/// any combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub execution_result: ExecutionResult,
    pub pending: bool,
    pub skipped: bool,
}

impl Example {
    /// Wraps a result with both flags cleared.
    pub fn new(execution_result: ExecutionResult) -> Self {
        Example {
            execution_result,
            pending: false,
            skipped: false,
        }
    }

    pub fn passed() -> Self {
        Example::new(ExecutionResult::passed())
    }

    pub fn failed(exception: Option<Exception>) -> Self {
        Example::new(ExecutionResult::failed(exception))
    }

    pub fn pending_with(message: impl Into<String>) -> Self {
        Example {
            execution_result: ExecutionResult::pending(message),
            pending: true,
            skipped: false,
        }
    }

    pub fn skipped_with(message: impl Into<String>) -> Self {
        Example {
            execution_result: ExecutionResult::pending(message),
            pending: true,
            skipped: true,
        }
    }

    /// Convenience accessor mirroring the result's exception.
    pub fn exception(&self) -> Option<&Exception> {
        self.execution_result.exception.as_ref()
    }
}
