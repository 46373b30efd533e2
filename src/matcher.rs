//! The matcher evaluation contract.
//!
//! Every matcher follows one shape: construct with the expected value(s),
//! ask `matches` for a verdict, and on failure ask for the failure message.
//! A matcher instance is ephemeral (created per assertion, matched once,
//! message rendered once, discarded) and is never shared across threads.
//! Repeated `matches` calls on an unmodified subject yield the same verdict.

use std::path::PathBuf;

use crate::error::MatcherError;
use crate::example::{Example, ExceptionKind};
use crate::matchers::mapping::SpecMapper;
use crate::matchers::{
    ContainFiles, FailWith, FailWithMessage, MapSpecsTo, PassMatcher, PendingWith, SkippedWith,
    SkippedWithMessage,
};
use crate::pattern::MessagePattern;

/// A constructible predicate-plus-diagnostic unit, generic over the subject
/// reference it evaluates.
pub trait Matcher<S> {
    /// Computes the verdict. Takes `&mut self` so a matcher may cache the
    /// actual value it saw for message rendering.
    fn matches(&mut self, subject: S) -> bool;

    /// Renders the diagnostic for a failed match, re-deriving the reason
    /// from the same subject.
    fn failure_message(&self, subject: S) -> String;
}

/// Set-style matchers also explain a failed *negated* expectation.
pub trait NegatableMatcher<S>: Matcher<S> {
    fn failure_message_when_negated(&self, subject: S) -> String;
}

/// Construction arguments for the string-name registry surface.
///
/// The typed factory functions in [`crate::matchers`] are the primary API;
/// this tagged form exists so a registry entry can be constructed uniformly.
#[derive(Debug)]
pub enum MatcherArgs {
    None,
    /// A literal-or-pattern expected message.
    Message(MessagePattern),
    /// An exact expected message.
    Text(String),
    Exception(ExceptionKind),
    Files(Vec<PathBuf>),
    Mapping { specs: Vec<String>, file: String },
}

/// A matcher constructed through the registry: a closed enum over the
/// concrete matcher instances, grouped by the subject kind they evaluate.
#[derive(Debug)]
pub enum BuiltMatcher {
    Pass(PassMatcher),
    FailWithMessage(FailWithMessage),
    SkippedWithMessage(SkippedWithMessage),
    FailWith(FailWith),
    PendingWith(PendingWith),
    SkippedWith(SkippedWith),
    MapSpecs(MapSpecsTo),
    ContainFiles(ContainFiles),
}

impl BuiltMatcher {
    /// Canonical family name, used in dispatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            BuiltMatcher::Pass(_) => "pass",
            BuiltMatcher::FailWithMessage(_) => "fail_with_regexp",
            BuiltMatcher::SkippedWithMessage(_) => "be_skipped_with_regexp",
            BuiltMatcher::FailWith(_) => "fail_with",
            BuiltMatcher::PendingWith(_) => "be_pending_with",
            BuiltMatcher::SkippedWith(_) => "be_skipped_with",
            BuiltMatcher::MapSpecs(_) => "map_specs",
            BuiltMatcher::ContainFiles(_) => "contain_files",
        }
    }

    fn subject_mismatch(&self, subject: &'static str) -> MatcherError {
        MatcherError::SubjectMismatch {
            matcher: self.kind(),
            subject,
        }
    }

    /// Evaluates an example subject; errors if this matcher evaluates a
    /// different subject kind.
    pub fn matches_example(&mut self, example: &Example) -> Result<bool, MatcherError> {
        match self {
            BuiltMatcher::Pass(matcher) => Ok(matcher.matches(example)),
            BuiltMatcher::FailWithMessage(matcher) => Ok(matcher.matches(example)),
            BuiltMatcher::SkippedWithMessage(matcher) => Ok(matcher.matches(example)),
            BuiltMatcher::FailWith(matcher) => Ok(matcher.matches(example)),
            BuiltMatcher::PendingWith(matcher) => Ok(matcher.matches(example)),
            BuiltMatcher::SkippedWith(matcher) => Ok(matcher.matches(example)),
            _ => Err(self.subject_mismatch("example")),
        }
    }

    pub fn example_failure_message(&self, example: &Example) -> Result<String, MatcherError> {
        match self {
            BuiltMatcher::Pass(matcher) => Ok(matcher.failure_message(example)),
            BuiltMatcher::FailWithMessage(matcher) => Ok(matcher.failure_message(example)),
            BuiltMatcher::SkippedWithMessage(matcher) => Ok(matcher.failure_message(example)),
            BuiltMatcher::FailWith(matcher) => Ok(matcher.failure_message(example)),
            BuiltMatcher::PendingWith(matcher) => Ok(matcher.failure_message(example)),
            BuiltMatcher::SkippedWith(matcher) => Ok(matcher.failure_message(example)),
            _ => Err(self.subject_mismatch("example")),
        }
    }

    /// Evaluates a file-collection subject.
    pub fn matches_files(&mut self, actual: &[PathBuf]) -> Result<bool, MatcherError> {
        match self {
            BuiltMatcher::ContainFiles(matcher) => Ok(matcher.matches(actual)),
            _ => Err(self.subject_mismatch("file collection")),
        }
    }

    pub fn files_failure_message(&self, actual: &[PathBuf]) -> Result<String, MatcherError> {
        match self {
            BuiltMatcher::ContainFiles(matcher) => Ok(matcher.failure_message(actual)),
            _ => Err(self.subject_mismatch("file collection")),
        }
    }

    pub fn files_failure_message_when_negated(
        &self,
        actual: &[PathBuf],
    ) -> Result<String, MatcherError> {
        match self {
            BuiltMatcher::ContainFiles(matcher) => {
                Ok(matcher.failure_message_when_negated(actual))
            }
            _ => Err(self.subject_mismatch("file collection")),
        }
    }

    /// Evaluates a mapping subject.
    pub fn matches_mapping(&mut self, subject: &mut dyn SpecMapper) -> Result<bool, MatcherError> {
        match self {
            BuiltMatcher::MapSpecs(matcher) => Ok(matcher.matches(subject)),
            _ => Err(self.subject_mismatch("mapping")),
        }
    }

    pub fn mapping_failure_message(
        &self,
        subject: &mut dyn SpecMapper,
    ) -> Result<String, MatcherError> {
        match self {
            BuiltMatcher::MapSpecs(matcher) => Ok(matcher.failure_message(subject)),
            _ => Err(self.subject_mismatch("mapping")),
        }
    }
}
