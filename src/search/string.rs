//! Substring search terms
//!
//! Patterns match anywhere in the value, ignoring case. An empty pattern
//! matches any present value.

use super::Message;

fn contains_ignore_case(haystack: &str, pattern: &str) -> bool {
    haystack.to_lowercase().contains(&pattern.to_lowercase())
}

/// Matches when any value of a header contains the pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderTerm {
    name: String,
    pattern: String,
}

impl HeaderTerm {
    /// Match `pattern` against every value of header `name`
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// The header name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn matches<M: Message + ?Sized>(&self, message: &M) -> Result<bool, M::Error> {
        Ok(message
            .header(&self.name)?
            .iter()
            .any(|value| contains_ignore_case(value, &self.pattern)))
    }
}

/// Matches when the subject contains the pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectTerm {
    pattern: String,
}

impl SubjectTerm {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn matches<M: Message + ?Sized>(&self, message: &M) -> Result<bool, M::Error> {
        Ok(message
            .subject()?
            .is_some_and(|subject| contains_ignore_case(&subject, &self.pattern)))
    }
}

/// Matches when the body contains the pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BodyTerm {
    pattern: String,
}

impl BodyTerm {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn matches<M: Message + ?Sized>(&self, message: &M) -> Result<bool, M::Error> {
        Ok(message
            .body()?
            .is_some_and(|body| contains_ignore_case(&body, &self.pattern)))
    }
}
