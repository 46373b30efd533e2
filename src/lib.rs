//! Verdict: matchers over the recorded outcome of executed test examples.
//!
//! A matcher inspects an example's [`ExecutionResult`](example::ExecutionResult)
//! and asserts an expected disposition (passed, failed with a message or
//! exception kind, pending or skipped with a message), plus two file-oriented
//! matchers for discovery output. Matchers evaluate already-produced result
//! records; they never execute tests themselves.
//!
//! The typed factory functions in [`matchers`] are the primary surface:
//!
//! ```
//! use verdict::{Example, Matcher};
//! use verdict::matchers::pass;
//!
//! let mut matcher = pass();
//! assert!(matcher.matches(&Example::passed()));
//! ```
//!
//! The same matchers are reachable by string name through
//! [`registry::default_registry`].

pub mod error;
pub mod example;
pub mod inspect;
pub mod matcher;
pub mod matchers;
pub mod paths;
pub mod pattern;
pub mod registry;

pub use crate::error::MatcherError;
pub use crate::example::{Example, Exception, ExceptionKind, ExecutionResult, Status};
pub use crate::matcher::{BuiltMatcher, Matcher, MatcherArgs, NegatableMatcher};
pub use crate::pattern::MessagePattern;
pub use crate::registry::{build_default_matcher_registry, default_registry, MatcherRegistry};
