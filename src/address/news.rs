//! Newsgroup addresses
//!
//! A [`NewsAddress`] names a Usenet posting destination (RFC 1036 / RFC 5536
//! `Newsgroups` header element) rather than a mailbox.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::config::FoldConfig;
use crate::validation::validate_newsgroup_name;
use crate::Result;

use super::AddressKind;

/// Fold marker inserted between list elements: CRLF followed by one tab
const FOLD: &str = "\r\n\t";

/// A newsgroup address with an optional originating host
///
/// Construction removes every whitespace character from the newsgroup name,
/// so `"rec.  sport"` becomes `"rec.sport"`. Malformed names are repaired
/// rather than rejected; use [`NewsAddress::validate`] or
/// [`NewsAddress::parse_strict`] when the grammar matters.
///
/// Two addresses are equal when their newsgroups match exactly and their
/// hosts match ignoring case. A missing host only equals another missing host.
///
/// # Examples
///
/// ```
/// use nntp_mail::NewsAddress;
///
/// let a = NewsAddress::with_host("comp.lang.rust", "news.example.com");
/// let b = NewsAddress::with_host("comp.lang.rust", "NEWS.EXAMPLE.COM");
/// assert_eq!(a, b);
/// assert_ne!(a, NewsAddress::new("comp.lang.rust"));
///
/// let stripped = NewsAddress::new(" comp.lang .rust ");
/// assert_eq!(stripped.newsgroup(), "comp.lang.rust");
/// assert_eq!(stripped.to_string(), "comp.lang.rust");
/// ```
#[derive(Debug, Clone, Eq)]
pub struct NewsAddress {
    newsgroup: String,
    host: Option<String>,
}

impl NewsAddress {
    /// Create an address for `newsgroup` with no host
    pub fn new(newsgroup: impl AsRef<str>) -> Self {
        Self {
            newsgroup: strip_whitespace(newsgroup.as_ref()),
            host: None,
        }
    }

    /// Create an address for `newsgroup` originating at `host`
    ///
    /// The host is stored unchanged.
    pub fn with_host(newsgroup: impl AsRef<str>, host: impl Into<String>) -> Self {
        Self {
            newsgroup: strip_whitespace(newsgroup.as_ref()),
            host: Some(host.into()),
        }
    }

    /// Address kind, always [`AddressKind::News`]
    pub fn kind(&self) -> AddressKind {
        AddressKind::News
    }

    /// The newsgroup name
    pub fn newsgroup(&self) -> &str {
        &self.newsgroup
    }

    /// Replace the newsgroup name
    ///
    /// Unlike the constructors this stores the value as given; whitespace is
    /// not removed.
    pub fn set_newsgroup(&mut self, newsgroup: impl Into<String>) {
        self.newsgroup = newsgroup.into();
    }

    /// The originating host, if any
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Replace (or clear) the originating host
    pub fn set_host(&mut self, host: Option<impl Into<String>>) {
        self.host = host.map(Into::into);
    }

    /// Check the newsgroup name against the RFC 5536 grammar
    pub fn validate(&self) -> Result<()> {
        validate_newsgroup_name(&self.newsgroup)
    }

    /// Parse a comma separated newsgroup list
    ///
    /// Commas are pure delimiters: leading, trailing and repeated commas do
    /// not produce empty entries. Each remaining token becomes an address via
    /// [`NewsAddress::new`], so whitespace inside a token (including header
    /// folds) is removed. Names are not validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_mail::NewsAddress;
    ///
    /// let groups = NewsAddress::parse("comp.lang.rust,,alt.test, misc.misc").unwrap();
    /// let names: Vec<&str> = groups.iter().map(|g| g.newsgroup()).collect();
    /// assert_eq!(names, ["comp.lang.rust", "alt.test", "misc.misc"]);
    ///
    /// assert!(NewsAddress::parse("").unwrap().is_empty());
    /// ```
    pub fn parse(newsgroups: &str) -> Result<Vec<NewsAddress>> {
        let addresses: Vec<NewsAddress> = newsgroups
            .split(',')
            .filter(|token| !token.is_empty())
            .map(NewsAddress::new)
            .collect();

        trace!("Parsed {} newsgroup addresses", addresses.len());
        Ok(addresses)
    }

    /// Parse a comma separated newsgroup list, rejecting invalid names
    ///
    /// Tokenizes exactly like [`NewsAddress::parse`], then requires every
    /// resulting newsgroup to satisfy the RFC 5536 grammar. A token made only
    /// of whitespace yields an empty name and is rejected.
    pub fn parse_strict(newsgroups: &str) -> Result<Vec<NewsAddress>> {
        let addresses = Self::parse(newsgroups)?;
        for address in &addresses {
            address.validate()?;
        }
        Ok(addresses)
    }

    /// Join addresses into a folded, comma separated header value
    ///
    /// Returns `None` for an empty list. Uses [`FoldConfig::rfc5536`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nntp_mail::NewsAddress;
    ///
    /// let groups = [NewsAddress::new("comp.lang.rust"), NewsAddress::new("alt.test")];
    /// assert_eq!(
    ///     NewsAddress::join(&groups).as_deref(),
    ///     Some("comp.lang.rust,alt.test")
    /// );
    /// assert_eq!(NewsAddress::join(&[]), None);
    /// ```
    pub fn join(addresses: &[NewsAddress]) -> Option<String> {
        Self::join_with(addresses, &FoldConfig::rfc5536())
    }

    /// Join addresses using custom fold limits
    pub fn join_with(addresses: &[NewsAddress], config: &FoldConfig) -> Option<String> {
        fold_join(addresses.iter(), config)
    }

    /// Lower-cased host used for equality and hashing
    fn host_key(&self) -> Option<String> {
        self.host.as_deref().map(str::to_lowercase)
    }
}

/// Join newsgroup names, folding before any element that would overflow the line
///
/// `used` tracks the column since the last fold. The separator comma is
/// counted before the fold decision, and each element is checked once.
pub(crate) fn fold_join<'a>(
    addresses: impl IntoIterator<Item = &'a NewsAddress>,
    config: &FoldConfig,
) -> Option<String> {
    let mut addresses = addresses.into_iter();
    let first = addresses.next()?;

    let mut joined = first.newsgroup.clone();
    let mut used = first.newsgroup.chars().count();
    let mut folds = 0usize;

    for address in addresses {
        joined.push(',');
        used += 1;

        let group = address.newsgroup.as_str();
        let len = group.chars().count();
        if config.needs_fold(used, len) {
            joined.push_str(FOLD);
            used = config.continuation_column;
            folds += 1;
        }

        joined.push_str(group);
        used += len;
    }

    trace!("Joined newsgroup list with {} folds", folds);
    Some(joined)
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_whitespace()).collect()
}

impl fmt::Display for NewsAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.newsgroup)
    }
}

impl PartialEq for NewsAddress {
    fn eq(&self, other: &Self) -> bool {
        self.newsgroup == other.newsgroup && self.host_key() == other.host_key()
    }
}

impl Hash for NewsAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.newsgroup.hash(state);
        self.host_key().hash(state);
    }
}
