//! Message addresses
//!
//! Addresses come in transport-specific variants. Each variant reports an
//! [`AddressKind`] so list-level code can check what it was handed without
//! inspecting payloads.
//!
//! This module is organized into:
//! - `news`: newsgroup addresses, list parsing and folded serialization
//! - `internet`: RFC 5322 mailboxes

mod internet;
mod news;

use std::fmt;

use tracing::debug;

use crate::config::FoldConfig;
use crate::{MailError, Result};

pub use self::internet::InternetAddress;
pub use self::news::NewsAddress;

/// Address variant discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Newsgroup destination
    News,
    /// RFC 5322 mailbox
    Rfc822,
}

impl AddressKind {
    /// The kind's type tag (`"news"` or `"rfc822"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::News => "news",
            AddressKind::Rfc822 => "rfc822",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any supported address
///
/// # Examples
///
/// ```
/// use nntp_mail::{Address, AddressKind, InternetAddress, NewsAddress};
///
/// let news: Address = NewsAddress::new("comp.lang.rust").into();
/// let mail: Address = InternetAddress::new("user@example.com").into();
///
/// assert_eq!(news.kind(), AddressKind::News);
/// assert_eq!(mail.kind().as_str(), "rfc822");
/// assert_ne!(news, mail);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// Newsgroup address
    News(NewsAddress),
    /// Internet mailbox
    Internet(InternetAddress),
}

impl Address {
    /// The variant's type tag
    pub fn kind(&self) -> AddressKind {
        match self {
            Address::News(address) => address.kind(),
            Address::Internet(address) => address.kind(),
        }
    }

    /// Borrow the newsgroup address, if this is one
    pub fn as_news(&self) -> Option<&NewsAddress> {
        match self {
            Address::News(address) => Some(address),
            Address::Internet(_) => None,
        }
    }

    /// Borrow the mailbox address, if this is one
    pub fn as_internet(&self) -> Option<&InternetAddress> {
        match self {
            Address::Internet(address) => Some(address),
            Address::News(_) => None,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::News(address) => fmt::Display::fmt(address, f),
            Address::Internet(address) => fmt::Display::fmt(address, f),
        }
    }
}

impl From<NewsAddress> for Address {
    fn from(address: NewsAddress) -> Self {
        Address::News(address)
    }
}

impl From<InternetAddress> for Address {
    fn from(address: InternetAddress) -> Self {
        Address::Internet(address)
    }
}

/// Serialize a list of newsgroup addresses into a folded header value
///
/// Every element must be [`Address::News`]; any other variant fails with
/// [`MailError::AddressKindMismatch`] and no output is produced. An empty
/// list yields `Ok(None)`.
///
/// # Examples
///
/// ```
/// use nntp_mail::{join_addresses, Address, InternetAddress, MailError, NewsAddress};
///
/// let list: Vec<Address> = vec![
///     NewsAddress::new("comp.lang.rust").into(),
///     NewsAddress::new("alt.test").into(),
/// ];
/// assert_eq!(
///     join_addresses(&list).unwrap().as_deref(),
///     Some("comp.lang.rust,alt.test")
/// );
///
/// let mixed: Vec<Address> = vec![
///     NewsAddress::new("comp.lang.rust").into(),
///     InternetAddress::new("user@example.com").into(),
/// ];
/// assert!(matches!(
///     join_addresses(&mixed),
///     Err(MailError::AddressKindMismatch { expected: "news", found: "rfc822" })
/// ));
/// ```
pub fn join_addresses(addresses: &[Address]) -> Result<Option<String>> {
    join_addresses_with(addresses, &FoldConfig::rfc5536())
}

/// [`join_addresses`] with custom fold limits
pub fn join_addresses_with(addresses: &[Address], config: &FoldConfig) -> Result<Option<String>> {
    let groups = addresses
        .iter()
        .map(|address| {
            address.as_news().ok_or_else(|| {
                debug!("Refusing to join {} address into newsgroup list", address.kind());
                MailError::AddressKindMismatch {
                    expected: AddressKind::News.as_str(),
                    found: address.kind().as_str(),
                }
            })
        })
        .collect::<Result<Vec<&NewsAddress>>>()?;

    Ok(news::fold_join(groups, config))
}
