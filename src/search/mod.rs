//! Message search terms
//!
//! A [`SearchTerm`] is a node in a boolean expression tree evaluated against
//! a [`Message`]. Combinators ([`AndTerm`], [`OrTerm`], `Not`) compose leaf
//! terms that each consult exactly one capability of the message.
//!
//! ```
//! use nntp_mail::search::{HeaderTerm, Message, SearchTerm, SubjectTerm};
//! use std::convert::Infallible;
//!
//! struct Post;
//!
//! impl Message for Post {
//!     type Error = Infallible;
//!
//!     fn header(&self, name: &str) -> Result<Vec<String>, Infallible> {
//!         Ok(match name {
//!             "Subject" => vec!["Rust 2024 edition released".to_string()],
//!             "Newsgroups" => vec!["comp.lang.rust".to_string()],
//!             _ => Vec::new(),
//!         })
//!     }
//! }
//!
//! let term = SearchTerm::from(SubjectTerm::new("rust"))
//!     .and(HeaderTerm::new("Newsgroups", "comp.lang"));
//! assert!(term.matches(&Post).unwrap());
//! assert!(!(!term).matches(&Post).unwrap());
//! ```

mod and;
mod date;
mod or;
mod string;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops;

use chrono::{DateTime, Utc};

pub use self::and::AndTerm;
pub use self::date::{Comparison, SentDateTerm};
pub use self::or::OrTerm;
pub use self::string::{BodyTerm, HeaderTerm, SubjectTerm};

/// The message capabilities search terms consult
///
/// Implementations report failures through their own `Error` type; search
/// terms return those errors unchanged and stop evaluating at the first one.
pub trait Message {
    /// Error raised while reading the message
    type Error;

    /// All values of the header `name` (case-insensitive), in message order
    fn header(&self, name: &str) -> Result<Vec<String>, Self::Error>;

    /// The subject line
    ///
    /// Defaults to the first `Subject` header.
    fn subject(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.header("Subject")?.into_iter().next())
    }

    /// The message body as text
    ///
    /// Defaults to no body.
    fn body(&self) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    /// When the message was sent
    ///
    /// Defaults to the first `Date` header parsed as an RFC 5322 date-time;
    /// an unparseable date counts as absent.
    fn sent_date(&self) -> Result<Option<DateTime<Utc>>, Self::Error> {
        Ok(self
            .header("Date")?
            .first()
            .and_then(|date| DateTime::parse_from_rfc2822(date).ok())
            .map(|date| date.with_timezone(&Utc)))
    }
}

/// A boolean predicate over a [`Message`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchTerm {
    /// Every child matches
    And(AndTerm),
    /// At least one child matches
    Or(OrTerm),
    /// The child does not match
    Not(Box<SearchTerm>),
    /// A header value contains a pattern
    Header(HeaderTerm),
    /// The subject contains a pattern
    Subject(SubjectTerm),
    /// The body contains a pattern
    Body(BodyTerm),
    /// The sent date compares against a fixed date
    SentDate(SentDateTerm),
}

impl SearchTerm {
    /// Evaluate this term against `message`
    ///
    /// Errors from the message are returned unchanged.
    pub fn matches<M: Message + ?Sized>(&self, message: &M) -> Result<bool, M::Error> {
        match self {
            SearchTerm::And(term) => term.matches(message),
            SearchTerm::Or(term) => term.matches(message),
            SearchTerm::Not(term) => Ok(!term.matches(message)?),
            SearchTerm::Header(term) => term.matches(message),
            SearchTerm::Subject(term) => term.matches(message),
            SearchTerm::Body(term) => term.matches(message),
            SearchTerm::SentDate(term) => term.matches(message),
        }
    }

    /// `self AND other`
    pub fn and(self, other: impl Into<SearchTerm>) -> SearchTerm {
        SearchTerm::And(AndTerm::new(self, other))
    }

    /// `self OR other`
    pub fn or(self, other: impl Into<SearchTerm>) -> SearchTerm {
        SearchTerm::Or(OrTerm::new(self, other))
    }
}

impl ops::Not for SearchTerm {
    type Output = SearchTerm;

    fn not(self) -> SearchTerm {
        SearchTerm::Not(Box::new(self))
    }
}

impl From<AndTerm> for SearchTerm {
    fn from(term: AndTerm) -> Self {
        SearchTerm::And(term)
    }
}

impl From<OrTerm> for SearchTerm {
    fn from(term: OrTerm) -> Self {
        SearchTerm::Or(term)
    }
}

impl From<HeaderTerm> for SearchTerm {
    fn from(term: HeaderTerm) -> Self {
        SearchTerm::Header(term)
    }
}

impl From<SubjectTerm> for SearchTerm {
    fn from(term: SubjectTerm) -> Self {
        SearchTerm::Subject(term)
    }
}

impl From<BodyTerm> for SearchTerm {
    fn from(term: BodyTerm) -> Self {
        SearchTerm::Body(term)
    }
}

impl From<SentDateTerm> for SearchTerm {
    fn from(term: SentDateTerm) -> Self {
        SearchTerm::SentDate(term)
    }
}

/// Wrapping sum of each term's independent hash
///
/// The result does not depend on term order.
fn summed_hash(terms: &[SearchTerm]) -> u64 {
    terms
        .iter()
        .map(|term| {
            let mut hasher = DefaultHasher::new();
            term.hash(&mut hasher);
            hasher.finish()
        })
        .fold(0u64, u64::wrapping_add)
}
