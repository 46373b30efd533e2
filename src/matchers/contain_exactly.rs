//! Generic "contains exactly these elements" comparison primitive.
//!
//! Multiset semantics: membership *and* count, order-independent. Every
//! set-style matcher delegates its verdict and failure text here, so
//! insertions, omissions, and duplicates are all reported the same way.

use std::fmt;

/// Compares an actual collection against an expected one, remembering the
/// divergence for message rendering.
///
/// A matcher instance is meant for a single `matches` / message round; the
/// cached actual/missing/extra values belong to the most recent `matches`
/// call.
#[derive(Debug, Clone)]
pub struct ContainExactly<T> {
    expected: Vec<T>,
    actual: Vec<T>,
    missing: Vec<T>,
    extra: Vec<T>,
}

impl<T: Eq + Clone + fmt::Debug> ContainExactly<T> {
    pub fn new(expected: Vec<T>) -> Self {
        ContainExactly {
            expected,
            actual: Vec::new(),
            missing: Vec::new(),
            extra: Vec::new(),
        }
    }

    pub fn expected(&self) -> &[T] {
        &self.expected
    }

    /// True iff `actual` contains exactly the expected elements: each
    /// expected element once per expected occurrence, and nothing else.
    pub fn matches(&mut self, actual: &[T]) -> bool {
        let mut unmatched = self.expected.clone();
        let mut extra = Vec::new();
        for element in actual {
            match unmatched.iter().position(|candidate| candidate == element) {
                Some(index) => {
                    unmatched.remove(index);
                }
                None => extra.push(element.clone()),
            }
        }
        self.actual = actual.to_vec();
        self.missing = unmatched;
        self.extra = extra;
        self.missing.is_empty() && self.extra.is_empty()
    }

    /// Renders expected vs. actual, with missing/extra lines only for the
    /// divergences that occurred.
    pub fn failure_message(&self) -> String {
        let mut message = format!(
            "expected collection contained:  {:?}\nactual collection contained:    {:?}",
            self.expected, self.actual
        );
        if !self.missing.is_empty() {
            message.push_str(&format!(
                "\nthe missing elements were:      {:?}",
                self.missing
            ));
        }
        if !self.extra.is_empty() {
            message.push_str(&format!(
                "\nthe extra elements were:        {:?}",
                self.extra
            ));
        }
        message
    }

    pub fn failure_message_when_negated(&self) -> String {
        format!(
            "expected {:?} not to contain exactly {:?}",
            self.actual, self.expected
        )
    }
}
