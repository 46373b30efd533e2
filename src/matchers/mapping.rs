//! File-mapping matcher: asserts what a discovery subject maps a file to.
//!
//! This is the one matcher with a documented side effect: before invoking the
//! subject, it primes the subject's find-order trace with the expected specs
//! followed by the target file, the seeding the discovery algorithm depends
//! on to produce deterministic output. Comparison is order-sensitive, since
//! the returned sequence reflects discovery priority.

use crate::matcher::Matcher;

/// Boundary contract for a file-to-test mapping subject.
pub trait SpecMapper {
    /// Installs the ordered trace of files the discovery algorithm will
    /// probe, ahead of a [`SpecMapper::test_files_for`] call.
    fn prime_find_order(&mut self, order: Vec<String>);

    /// Resolves the test files mapped to `file`, in discovery priority order.
    fn test_files_for(&self, file: &str) -> Vec<String>;

    /// Name shown in failure messages.
    fn name(&self) -> &str {
        "spec mapper"
    }
}

/// Builder for [`MapSpecsTo`]; call [`MapSpecs::to`] with the target file.
#[derive(Debug, Clone)]
pub struct MapSpecs {
    specs: Vec<String>,
}

/// Expects a mapping subject to map a file (named via `.to(file)`) to exactly
/// `specs`, element-for-element and in order.
pub fn map_specs<I, S>(specs: I) -> MapSpecs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MapSpecs {
        specs: specs.into_iter().map(Into::into).collect(),
    }
}

impl MapSpecs {
    /// Completes the matcher with the file whose mapping is asserted.
    pub fn to(self, file: impl Into<String>) -> MapSpecsTo {
        MapSpecsTo {
            specs: self.specs,
            file: file.into(),
            subject_name: None,
            actual: None,
        }
    }
}

/// Matches a mapping subject that resolves one file to an expected ordered
/// sequence of specs.
#[derive(Debug, Clone)]
pub struct MapSpecsTo {
    specs: Vec<String>,
    file: String,
    subject_name: Option<String>,
    actual: Option<Vec<String>>,
}

impl MapSpecsTo {
    pub fn specs(&self) -> &[String] {
        &self.specs
    }

    pub fn file(&self) -> &str {
        &self.file
    }
}

impl<'a, M: SpecMapper + ?Sized> Matcher<&'a mut M> for MapSpecsTo {
    fn matches(&mut self, subject: &mut M) -> bool {
        let mut find_order = self.specs.clone();
        find_order.push(self.file.clone());
        subject.prime_find_order(find_order);
        let actual = subject.test_files_for(&self.file);
        self.subject_name = Some(subject.name().to_string());
        let matched = actual == self.specs;
        self.actual = Some(actual);
        matched
    }

    fn failure_message(&self, _subject: &mut M) -> String {
        format!(
            "expected {} to map {:?} to {:?}\ngot {:?}",
            self.subject_name.as_deref().unwrap_or("spec mapper"),
            self.specs,
            self.file,
            self.actual.as_deref().unwrap_or(&[])
        )
    }
}
