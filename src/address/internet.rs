//! Internet mailbox addresses

use std::fmt;
use std::hash::{Hash, Hasher};

use super::AddressKind;

/// An RFC 5322 mailbox with an optional display name
///
/// Only the pieces needed to sit alongside [`NewsAddress`](super::NewsAddress)
/// in an [`Address`](super::Address) list are modeled; the mailbox text is
/// not parsed. Mailboxes compare ignoring ASCII case and the display name is
/// not part of equality.
#[derive(Debug, Clone, Eq)]
pub struct InternetAddress {
    mailbox: String,
    personal: Option<String>,
}

impl InternetAddress {
    /// Create an address from a bare mailbox such as `user@example.com`
    pub fn new(mailbox: impl Into<String>) -> Self {
        Self {
            mailbox: mailbox.into(),
            personal: None,
        }
    }

    /// Create an address with a display name
    pub fn with_personal(mailbox: impl Into<String>, personal: impl Into<String>) -> Self {
        Self {
            mailbox: mailbox.into(),
            personal: Some(personal.into()),
        }
    }

    /// Address kind, always [`AddressKind::Rfc822`]
    pub fn kind(&self) -> AddressKind {
        AddressKind::Rfc822
    }

    /// The mailbox (`local@domain`)
    pub fn mailbox(&self) -> &str {
        &self.mailbox
    }

    /// The display name, if any
    pub fn personal(&self) -> Option<&str> {
        self.personal.as_deref()
    }
}

impl fmt::Display for InternetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.personal {
            Some(personal) => write!(f, "{} <{}>", personal, self.mailbox),
            None => f.write_str(&self.mailbox),
        }
    }
}

impl PartialEq for InternetAddress {
    fn eq(&self, other: &Self) -> bool {
        self.mailbox.eq_ignore_ascii_case(&other.mailbox)
    }
}

impl Hash for InternetAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mailbox.to_ascii_lowercase().hash(state);
    }
}
