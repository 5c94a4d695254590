//! Newsgroup name validation
//!
//! Checks newsgroup names against the RFC 5536 Section 3.1.4 grammar. Plain
//! address construction never calls into this module; it backs the strict
//! parsing path only.

use crate::{MailError, Result};

/// Validates a newsgroup name (RFC 5536 Section 3.1.4)
///
/// Newsgroup names must have the format `component.component.component`:
/// - Components separated by dots (.)
/// - Each component must be non-empty
/// - Components may contain: lowercase letters, digits, +, -, _
/// - Must not start or end with a dot
///
/// # Examples
///
/// ```
/// use nntp_mail::validation::validate_newsgroup_name;
///
/// assert!(validate_newsgroup_name("comp.lang.rust").is_ok());
/// assert!(validate_newsgroup_name("de.comp.lang.c++").is_ok());
/// assert!(validate_newsgroup_name("comp..rust").is_err());     // Empty component
/// assert!(validate_newsgroup_name("Comp.Lang").is_err());      // Uppercase
/// ```
pub fn validate_newsgroup_name(newsgroup: &str) -> Result<()> {
    if newsgroup.is_empty() {
        return Err(MailError::AddressParse(
            "Newsgroup name cannot be empty".to_string(),
        ));
    }

    if newsgroup.starts_with('.') || newsgroup.ends_with('.') {
        return Err(MailError::AddressParse(format!(
            "Newsgroup name cannot start or end with a dot: {newsgroup}"
        )));
    }

    for component in newsgroup.split('.') {
        if component.is_empty() {
            return Err(MailError::AddressParse(format!(
                "Newsgroup name cannot have empty components: {newsgroup}"
            )));
        }

        if let Some(ch) = component.chars().find(|&ch| !is_component_char(ch)) {
            return Err(MailError::AddressParse(format!(
                "Invalid character '{ch}' in newsgroup name {newsgroup} (only lowercase letters, digits, +, -, _ allowed)"
            )));
        }
    }

    Ok(())
}

fn is_component_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '+' | '-' | '_')
}
