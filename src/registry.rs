//! Canonical matcher registry.
//!
//! An explicit map from public matcher name to factory function. The default
//! registry is the single source of truth for the named matcher surface:
//! construct it once (or use the shared [`default_registry`]) and resolve
//! names through it, never through ad-hoc lookups.
//!
//! An alias is the *same* factory function value registered under a second
//! name, so aliased matchers cannot diverge from their targets in either
//! verdict or message.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::MatcherError;
use crate::matcher::{BuiltMatcher, MatcherArgs};
use crate::matchers;

/// Builds one matcher instance from tagged construction arguments.
pub type MatcherFactory = fn(MatcherArgs) -> Result<BuiltMatcher, MatcherError>;

/// Name-keyed matcher factories.
#[derive(Debug, Default)]
pub struct MatcherRegistry {
    factories: HashMap<&'static str, MatcherFactory>,
}

impl MatcherRegistry {
    pub fn new() -> Self {
        MatcherRegistry {
            factories: HashMap::new(),
        }
    }

    /// Registers `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, factory: MatcherFactory) {
        self.factories.insert(name, factory);
    }

    /// Binds `alias` to the factory already registered under `target`.
    pub fn alias(&mut self, alias: &'static str, target: &str) -> Result<(), MatcherError> {
        let factory = *self
            .factories
            .get(target)
            .ok_or_else(|| MatcherError::UnknownMatcher {
                name: target.to_string(),
            })?;
        self.factories.insert(alias, factory);
        Ok(())
    }

    /// Constructs the matcher registered under `name`.
    pub fn construct(&self, name: &str, args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| MatcherError::UnknownMatcher {
                name: name.to_string(),
            })?;
        factory(args)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted for deterministic listings.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

fn build_pass(args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
    match args {
        MatcherArgs::None => Ok(BuiltMatcher::Pass(matchers::pass())),
        _ => Err(MatcherError::ArgumentMismatch {
            matcher: "pass",
            expected: "no arguments",
        }),
    }
}

fn build_fail_with_regexp(args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
    match args {
        MatcherArgs::Message(pattern) => {
            Ok(BuiltMatcher::FailWithMessage(matchers::fail_with_regexp(pattern)))
        }
        _ => Err(MatcherError::ArgumentMismatch {
            matcher: "fail_with_regexp",
            expected: "an expected message",
        }),
    }
}

fn build_be_skipped_with_regexp(args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
    match args {
        MatcherArgs::Message(pattern) => Ok(BuiltMatcher::SkippedWithMessage(
            matchers::be_skipped_with_regexp(pattern),
        )),
        _ => Err(MatcherError::ArgumentMismatch {
            matcher: "be_skipped_with_regexp",
            expected: "an expected message",
        }),
    }
}

fn build_fail_with(args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
    match args {
        MatcherArgs::Exception(kind) => Ok(BuiltMatcher::FailWith(matchers::fail_with(kind))),
        _ => Err(MatcherError::ArgumentMismatch {
            matcher: "fail_with",
            expected: "an exception kind",
        }),
    }
}

fn build_be_pending_with(args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
    match args {
        MatcherArgs::Text(message) => {
            Ok(BuiltMatcher::PendingWith(matchers::be_pending_with(message)))
        }
        _ => Err(MatcherError::ArgumentMismatch {
            matcher: "be_pending_with",
            expected: "an exact expected message",
        }),
    }
}

fn build_be_skipped_with(args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
    match args {
        MatcherArgs::Text(message) => {
            Ok(BuiltMatcher::SkippedWith(matchers::be_skipped_with(message)))
        }
        _ => Err(MatcherError::ArgumentMismatch {
            matcher: "be_skipped_with",
            expected: "an exact expected message",
        }),
    }
}

fn build_map_specs(args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
    match args {
        MatcherArgs::Mapping { specs, file } => {
            Ok(BuiltMatcher::MapSpecs(matchers::map_specs(specs).to(file)))
        }
        _ => Err(MatcherError::ArgumentMismatch {
            matcher: "map_specs",
            expected: "specs and a target file",
        }),
    }
}

fn build_contain_files(args: MatcherArgs) -> Result<BuiltMatcher, MatcherError> {
    match args {
        MatcherArgs::Files(expected) => {
            Ok(BuiltMatcher::ContainFiles(matchers::contain_files(expected)))
        }
        _ => Err(MatcherError::ArgumentMismatch {
            matcher: "contain_files",
            expected: "a list of expected files",
        }),
    }
}

/// Builds a registry with all eleven public names registered.
pub fn build_default_matcher_registry() -> MatcherRegistry {
    let mut registry = MatcherRegistry::new();
    registry.register("pass", build_pass);
    registry.register("fail_with_regexp", build_fail_with_regexp);
    registry.register("be_skipped_with_regexp", build_be_skipped_with_regexp);
    registry.register("map_specs", build_map_specs);
    registry.register("fail_with", build_fail_with);
    registry.register("be_pending_with", build_be_pending_with);
    registry.register("be_skipped_with", build_be_skipped_with);
    registry.register("contain_files", build_contain_files);
    // Aliases bind the same factory value as their targets.
    registry.register("have_failed_with", build_fail_with);
    registry.register("have_passed", build_pass);
    registry.register("a_file_collection", build_contain_files);
    registry
}

static DEFAULT_REGISTRY: Lazy<MatcherRegistry> = Lazy::new(build_default_matcher_registry);

/// Shared instance of the default registry.
pub fn default_registry() -> &'static MatcherRegistry {
    &DEFAULT_REGISTRY
}
