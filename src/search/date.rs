//! Sent-date search terms

use chrono::{DateTime, Utc};

use super::Message;

/// How a message date relates to the term's date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Strictly before
    Lt,
    /// Before or at
    Le,
    /// Exactly at
    Eq,
    /// Not at
    Ne,
    /// Strictly after
    Gt,
    /// At or after
    Ge,
}

impl Comparison {
    /// Apply the comparison as `lhs <op> rhs`
    pub fn test<T: Ord>(&self, lhs: &T, rhs: &T) -> bool {
        match self {
            Comparison::Lt => lhs < rhs,
            Comparison::Le => lhs <= rhs,
            Comparison::Eq => lhs == rhs,
            Comparison::Ne => lhs != rhs,
            Comparison::Gt => lhs > rhs,
            Comparison::Ge => lhs >= rhs,
        }
    }
}

/// Matches messages whose sent date compares against a fixed date
///
/// Messages without a sent date never match.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use nntp_mail::search::{Comparison, SentDateTerm};
///
/// let cutoff = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let since = SentDateTerm::new(Comparison::Ge, cutoff);
/// assert_eq!(since.date(), cutoff);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SentDateTerm {
    comparison: Comparison,
    date: DateTime<Utc>,
}

impl SentDateTerm {
    /// Match messages sent `comparison` `date`
    pub fn new(comparison: Comparison, date: DateTime<Utc>) -> Self {
        Self { comparison, date }
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub(crate) fn matches<M: Message + ?Sized>(&self, message: &M) -> Result<bool, M::Error> {
        Ok(message
            .sent_date()?
            .is_some_and(|sent| self.comparison.test(&sent, &self.date)))
    }
}
