//! Unified error type for matcher construction and dispatch.
//!
//! Matcher *evaluation* never errors: an assertion mismatch is a normal
//! `false` verdict paired with a derivable diagnostic string. `MatcherError`
//! covers only the registry surface: asking for a matcher that does not
//! exist, building one from the wrong argument shape, pairing it with the
//! wrong subject kind, or supplying an uncompilable pattern.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MatcherError {
    #[error("unknown matcher: {name}")]
    #[diagnostic(help("the registered names are listed by `MatcherRegistry::names`"))]
    UnknownMatcher { name: String },

    #[error("matcher `{matcher}` cannot be built from these arguments: expected {expected}")]
    ArgumentMismatch {
        matcher: &'static str,
        expected: &'static str,
    },

    #[error("matcher `{matcher}` does not evaluate {subject} subjects")]
    #[diagnostic(help("construct the matcher through the factory that fits the subject kind"))]
    SubjectMismatch {
        matcher: &'static str,
        subject: &'static str,
    },

    #[error("invalid message pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
