//! The outcome matchers: pass, fail-with, pending-with, skipped-with.
//!
//! Each `matches` call reduces to "is the derived failure reason absent?",
//! and the failure message re-runs the same derivation over the same subject
//! (see [`crate::inspect`]). The two exact-match matchers at the bottom skip
//! reason derivation entirely: an exact-message mismatch is self-explanatory,
//! so their failure messages always show expected vs. actual.

use crate::example::{Example, ExceptionKind, Status};
use crate::inspect;
use crate::matcher::Matcher;
use crate::pattern::MessagePattern;

/// Matches an example that ran to completion and passed.
#[derive(Debug, Clone, Default)]
pub struct PassMatcher;

/// Expects the example to have passed.
pub fn pass() -> PassMatcher {
    PassMatcher
}

impl<'a> Matcher<&'a Example> for PassMatcher {
    fn matches(&mut self, example: &Example) -> bool {
        inspect::pass_failure_reason(example).is_none()
    }

    fn failure_message(&self, example: &Example) -> String {
        format!(
            "expected example to pass, but {}",
            inspect::pass_failure_reason(example).unwrap_or_default()
        )
    }
}

/// Matches a failed example whose exception message matches a pattern.
#[derive(Debug, Clone)]
pub struct FailWithMessage {
    expected: MessagePattern,
}

/// Expects the example to have failed with an exception message matching
/// `message`. A plain string is matched as literal text; pass a
/// [`MessagePattern::Pattern`] (or a compiled `Regex`) for real pattern
/// semantics.
pub fn fail_with_regexp(message: impl Into<MessagePattern>) -> FailWithMessage {
    FailWithMessage {
        expected: message.into(),
    }
}

impl<'a> Matcher<&'a Example> for FailWithMessage {
    fn matches(&mut self, example: &Example) -> bool {
        inspect::fail_message_failure_reason(example, &self.expected).is_none()
    }

    fn failure_message(&self, example: &Example) -> String {
        format!(
            "expected example to fail with exception message {}\n    but {}",
            self.expected,
            inspect::fail_message_failure_reason(example, &self.expected).unwrap_or_default()
        )
    }
}

/// Matches a skipped example whose skip reason matches a pattern.
#[derive(Debug, Clone)]
pub struct SkippedWithMessage {
    expected: MessagePattern,
}

/// Expects the example to have been skipped with a reason matching `message`.
/// String arguments are matched as literal text, as in [`fail_with_regexp`].
pub fn be_skipped_with_regexp(message: impl Into<MessagePattern>) -> SkippedWithMessage {
    SkippedWithMessage {
        expected: message.into(),
    }
}

impl<'a> Matcher<&'a Example> for SkippedWithMessage {
    fn matches(&mut self, example: &Example) -> bool {
        inspect::skip_message_failure_reason(example, &self.expected).is_none()
    }

    fn failure_message(&self, example: &Example) -> String {
        format!(
            "expected: example skipped with {}\n     got: {}",
            self.expected,
            inspect::skip_message_failure_reason(example, &self.expected).unwrap_or_default()
        )
    }
}

/// Matches a failed example whose exception is of exactly one kind.
#[derive(Debug, Clone)]
pub struct FailWith {
    expected: ExceptionKind,
}

/// Expects the example to have failed with an exception of exactly `kind`:
/// identity, not an is-a relationship.
pub fn fail_with(kind: ExceptionKind) -> FailWith {
    FailWith { expected: kind }
}

impl<'a> Matcher<&'a Example> for FailWith {
    fn matches(&mut self, example: &Example) -> bool {
        inspect::fail_kind_failure_reason(example, &self.expected).is_none()
    }

    fn failure_message(&self, example: &Example) -> String {
        format!(
            "expected example to fail with a {} exception, but {}",
            self.expected,
            inspect::fail_kind_failure_reason(example, &self.expected).unwrap_or_default()
        )
    }
}

/// Matches a pending example with an exact pending message.
#[derive(Debug, Clone)]
pub struct PendingWith {
    expected: String,
}

/// Expects the example to be pending with exactly `message` (no pattern
/// semantics).
pub fn be_pending_with(message: impl Into<String>) -> PendingWith {
    PendingWith {
        expected: message.into(),
    }
}

impl<'a> Matcher<&'a Example> for PendingWith {
    fn matches(&mut self, example: &Example) -> bool {
        example.pending
            && example.execution_result.status == Status::Pending
            && example.execution_result.pending_message.as_deref() == Some(self.expected.as_str())
    }

    fn failure_message(&self, example: &Example) -> String {
        format!(
            "expected: example pending with {:?}\n     got: {:?}",
            self.expected, example.execution_result.pending_message
        )
    }
}

/// Matches a skipped example with an exact skip reason.
#[derive(Debug, Clone)]
pub struct SkippedWith {
    expected: String,
}

/// Expects the example to have been skipped with exactly `message`.
pub fn be_skipped_with(message: impl Into<String>) -> SkippedWith {
    SkippedWith {
        expected: message.into(),
    }
}

impl<'a> Matcher<&'a Example> for SkippedWith {
    fn matches(&mut self, example: &Example) -> bool {
        example.skipped
            && example.pending
            && example.execution_result.pending_message.as_deref() == Some(self.expected.as_str())
    }

    fn failure_message(&self, example: &Example) -> String {
        format!(
            "expected: example skipped with {:?}\n     got: {:?}",
            self.expected, example.execution_result.pending_message
        )
    }
}
