//! Result Inspector: shared diagnostic derivation for the outcome matchers.
//!
//! Every outcome matcher reduces to one question ("is the derived failure
//! reason absent?") and reuses the *same* derivation to build its failure
//! message. A returned `None` is the success sentinel; a `Some(reason)` is a
//! one-line, human-readable account of why the expectation does not hold.
//! Because verdict and message come from one function, the displayed
//! diagnostic can never diverge from the pass/fail decision.
//!
//! Each function below is an ordered decision table. The order is load-bearing:
//! a pending example disqualifies a "passed"/"failed-with" expectation before
//! its status is ever consulted, and the skipped table starts from the
//! *negated* pending flag (see [`skip_message_failure_reason`]). The two
//! orderings produce different diagnostics for the same example and must not
//! be unified.

use crate::example::{Example, ExceptionKind, ExecutionResult, Status};
use crate::pattern::MessagePattern;

fn pending_message_text(result: &ExecutionResult) -> &str {
    result.pending_message.as_deref().unwrap_or("")
}

fn exception_message(example: &Example) -> &str {
    example
        .exception()
        .map(|exception| exception.message.as_str())
        .unwrap_or("")
}

/// Why the example does not count as passed. `None` means it passed.
pub fn pass_failure_reason(example: &Example) -> Option<String> {
    let result = &example.execution_result;
    if example.pending {
        return Some(format!(
            "was pending with message: {}",
            pending_message_text(result)
        ));
    }
    if result.status != Status::Passed {
        // Surface the exception so the reason says *why* it was not passed.
        return Some(match &result.exception {
            Some(exception) => format!("{}: {}", result.status, exception),
            None => result.status.to_string(),
        });
    }
    None
}

/// Why the example did not fail with a message matching `pattern`.
pub fn fail_message_failure_reason(example: &Example, pattern: &MessagePattern) -> Option<String> {
    let result = &example.execution_result;
    if example.pending {
        return Some(format!(
            "was pending with message: {}",
            pending_message_text(result)
        ));
    }
    if result.status != Status::Failed {
        return Some(result.status.to_string());
    }
    if !pattern.is_match(exception_message(example)) {
        return Some(format!("got: {}", exception_message(example)));
    }
    None
}

/// Why the example does not count as skipped with a message matching
/// `pattern`.
///
/// This table checks the negation of the pending flag first, unlike its
/// siblings: a not-pending example reports "passed" or its exception message
/// directly, a pending-but-not-skipped example reports its raw status, and a
/// skipped example with the wrong message reports that message verbatim.
pub fn skip_message_failure_reason(example: &Example, pattern: &MessagePattern) -> Option<String> {
    let result = &example.execution_result;
    if !example.pending {
        if result.status == Status::Passed {
            return Some("passed".to_string());
        }
        return Some(match example.exception() {
            Some(exception) => exception.message.clone(),
            None => result.status.to_string(),
        });
    }
    if !example.skipped {
        return Some(result.status.to_string());
    }
    if !pattern.is_match(pending_message_text(result)) {
        return Some(pending_message_text(result).to_string());
    }
    None
}

/// Why the example did not fail with an exception of exactly `kind`.
pub fn fail_kind_failure_reason(example: &Example, kind: &ExceptionKind) -> Option<String> {
    let result = &example.execution_result;
    if example.pending {
        return Some("was pending".to_string());
    }
    if result.status != Status::Failed {
        return Some(result.status.to_string());
    }
    match example.exception() {
        Some(exception) if exception.kind == *kind => None,
        Some(exception) => Some(format!("failed with a {}", exception.kind)),
        None => Some("failed with no exception".to_string()),
    }
}
