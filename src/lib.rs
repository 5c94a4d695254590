#![doc = include_str!("../README.md")]

/// Newsgroup and mailbox addresses
pub mod address;
mod config;
mod error;
/// Composable message search terms
pub mod search;
/// RFC 5536 newsgroup name validation
pub mod validation;

pub use address::{
    join_addresses, join_addresses_with, Address, AddressKind, InternetAddress, NewsAddress,
};
pub use config::FoldConfig;
pub use error::{MailError, Result};
pub use search::{AndTerm, Message, OrTerm, SearchTerm};
