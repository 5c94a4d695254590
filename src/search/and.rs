//! Logical AND of search terms

use std::hash::{Hash, Hasher};

use tracing::trace;

use super::{summed_hash, Message, SearchTerm};

/// Matches when every child term matches
///
/// Children are evaluated in construction order and evaluation stops at the
/// first child that does not match (or fails), so later children are never
/// consulted once the result is known.
///
/// A term with no children matches every message. That is plain vacuous
/// truth; callers building terms from user input should decide whether an
/// empty conjunction is meaningful for them.
///
/// Equality compares children pairwise in order. The hash is the sum of the
/// children's hashes and so ignores order: `AndTerm[a, b]` and
/// `AndTerm[b, a]` hash alike while comparing unequal.
///
/// # Examples
///
/// ```
/// use nntp_mail::search::{AndTerm, BodyTerm, SearchTerm, SubjectTerm};
///
/// let subject = SearchTerm::from(SubjectTerm::new("faq"));
/// let body = SearchTerm::from(BodyTerm::new("rust"));
///
/// let term = AndTerm::new(subject.clone(), body.clone());
/// assert_eq!(term.terms(), vec![subject.clone(), body.clone()]);
/// assert_ne!(term, AndTerm::new(body, subject));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndTerm {
    terms: Vec<SearchTerm>,
}

impl AndTerm {
    /// Conjunction of exactly two terms
    pub fn new(first: impl Into<SearchTerm>, second: impl Into<SearchTerm>) -> Self {
        Self {
            terms: vec![first.into(), second.into()],
        }
    }

    /// Conjunction of any number of terms, in iteration order
    ///
    /// The term takes ownership of what the iterator yields. Pass
    /// `slice.iter().cloned()` to keep the original sequence.
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

    /// Number of child terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the term has no children (and so matches everything)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate the children in order, stopping at the first non-match
    pub fn matches<M: Message + ?Sized>(&self, message: &M) -> Result<bool, M::Error> {
        for (index, term) in self.terms.iter().enumerate() {
            if !term.matches(message)? {
                trace!("AND short-circuited at term {} of {}", index + 1, self.terms.len());
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Hash for AndTerm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(summed_hash(&self.terms));
    }
}

impl From<Vec<SearchTerm>> for AndTerm {
    fn from(terms: Vec<SearchTerm>) -> Self {
        Self { terms }
    }
}

impl From<&[SearchTerm]> for AndTerm {
    fn from(terms: &[SearchTerm]) -> Self {
        Self {
            terms: terms.to_vec(),
        }
    }
}

impl FromIterator<SearchTerm> for AndTerm {
    fn from_iter<I: IntoIterator<Item = SearchTerm>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}
