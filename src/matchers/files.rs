//! Exact file-set matcher.
//!
//! Both expected and actual paths are expanded to their absolute normalized
//! form (see [`crate::paths`]) before comparison, so `"src/../a.rs"` and
//! `"a.rs"` name the same file. The verdict and all failure text come from
//! the shared [`ContainExactly`] primitive.

use std::path::{Path, PathBuf};

use crate::matcher::{Matcher, NegatableMatcher};
use crate::matchers::contain_exactly::ContainExactly;
use crate::paths;

/// Matches a collection of file paths that is set-equal to an expected one.
#[derive(Debug, Clone)]
pub struct ContainFiles {
    inner: ContainExactly<PathBuf>,
    base: Option<PathBuf>,
}

/// Expects the actual files to be exactly `expected`, order-independent,
/// after path normalization against the process working directory.
pub fn contain_files<I, P>(expected: I) -> ContainFiles
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let expanded = expected
        .into_iter()
        .map(|path| paths::expand(path.as_ref()))
        .collect();
    ContainFiles {
        inner: ContainExactly::new(expanded),
        base: None,
    }
}

impl ContainFiles {
    /// Like [`contain_files`], but with an explicit base directory for
    /// resolving relative paths (both expected and actual).
    pub fn with_base<I, P>(base: impl Into<PathBuf>, expected: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let base = base.into();
        let expanded = expected
            .into_iter()
            .map(|path| paths::expand_from(&base, path.as_ref()))
            .collect();
        ContainFiles {
            inner: ContainExactly::new(expanded),
            base: Some(base),
        }
    }

    fn expand(&self, path: &Path) -> PathBuf {
        match &self.base {
            Some(base) => paths::expand_from(base, path),
            None => paths::expand(path),
        }
    }
}

impl<'a, P: AsRef<Path>> Matcher<&'a [P]> for ContainFiles {
    fn matches(&mut self, actual: &[P]) -> bool {
        let files: Vec<PathBuf> = actual.iter().map(|path| self.expand(path.as_ref())).collect();
        self.inner.matches(&files)
    }

    // The divergence is cached by `matches`; the subject is not re-read.
    fn failure_message(&self, _actual: &[P]) -> String {
        self.inner.failure_message()
    }
}

impl<'a, P: AsRef<Path>> NegatableMatcher<&'a [P]> for ContainFiles {
    fn failure_message_when_negated(&self, _actual: &[P]) -> String {
        self.inner.failure_message_when_negated()
    }
}
