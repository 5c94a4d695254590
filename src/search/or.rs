//! Logical OR of search terms

use std::hash::{Hash, Hasher};

use tracing::trace;

use super::{summed_hash, Message, SearchTerm};

/// Matches when any child term matches
///
/// Children are evaluated in construction order and evaluation stops at the
/// first match or failure. A term with no children matches nothing.
/// Equality and hashing follow [`AndTerm`](super::AndTerm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrTerm {
    terms: Vec<SearchTerm>,
}

impl OrTerm {
    /// Disjunction of exactly two terms
    pub fn new(first: impl Into<SearchTerm>, second: impl Into<SearchTerm>) -> Self {
        Self {
            terms: vec![first.into(), second.into()],
        }
    }

    /// Disjunction of any number of terms, in iteration order
    pub fn from_terms(terms: impl IntoIterator<Item = SearchTerm>) -> Self {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// A copy of the child terms
    pub fn terms(&self) -> Vec<SearchTerm> {
        self.terms.clone()
    }

    /// Borrow the child terms
    pub fn as_slice(&self) -> &[SearchTerm] {
        &self.terms
    }

    /// Evaluate the children in order, stopping at the first match
    pub fn matches<M: Message + ?Sized>(&self, message: &M) -> Result<bool, M::Error> {
        for (index, term) in self.terms.iter().enumerate() {
            if term.matches(message)? {
                trace!("OR short-circuited at term {} of {}", index + 1, self.terms.len());
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Hash for OrTerm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(summed_hash(&self.terms));
    }
}

impl From<Vec<SearchTerm>> for OrTerm {
    fn from(terms: Vec<SearchTerm>) -> Self {
        Self { terms }
    }
}

impl FromIterator<SearchTerm> for OrTerm {
    fn from_iter<I: IntoIterator<Item = SearchTerm>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}
