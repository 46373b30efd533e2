//! Expected-message argument: literal text or a real pattern.
//!
//! Callers usually hand matchers a plain string; treating it as a regex would
//! silently reinterpret metacharacters, so the string form always matches as
//! literal text. A real pattern must be requested explicitly.

use std::fmt;

use regex::Regex;

use crate::error::MatcherError;

/// A message expectation, matched unanchored against the recorded message.
#[derive(Debug, Clone)]
pub enum MessagePattern {
    /// Plain text, matched as a literal substring.
    Literal(String),
    /// A compiled regular expression.
    Pattern(Regex),
}

impl MessagePattern {
    pub fn literal(text: impl Into<String>) -> Self {
        MessagePattern::Literal(text.into())
    }

    /// Compiles `source` as a regular expression.
    pub fn pattern(source: &str) -> Result<Self, MatcherError> {
        let regex = Regex::new(source).map_err(|source_err| MatcherError::InvalidPattern {
            pattern: source.to_string(),
            source: source_err,
        })?;
        Ok(MessagePattern::Pattern(regex))
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            MessagePattern::Literal(literal) => text.contains(literal.as_str()),
            MessagePattern::Pattern(regex) => regex.is_match(text),
        }
    }
}

impl From<&str> for MessagePattern {
    fn from(text: &str) -> Self {
        MessagePattern::literal(text)
    }
}

impl From<String> for MessagePattern {
    fn from(text: String) -> Self {
        MessagePattern::literal(text)
    }
}

impl From<Regex> for MessagePattern {
    fn from(regex: Regex) -> Self {
        MessagePattern::Pattern(regex)
    }
}

// Failure messages show the pattern source; literals display in their
// escaped-pattern form so the two variants read uniformly.
impl fmt::Display for MessagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessagePattern::Literal(literal) => write!(f, "{:?}", regex::escape(literal)),
            MessagePattern::Pattern(regex) => write!(f, "{:?}", regex.as_str()),
        }
    }
}
