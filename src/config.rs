//! Header folding configuration

/// Line-length limits used when serializing address lists into a header value
///
/// A list is folded by inserting CRLF followed by a single tab before any
/// element that would push the current line past `max_line_length`. After a
/// fold the line is treated as already holding `continuation_column`
/// characters, the width of the tab at a conventional tab stop.
///
/// # Examples
///
/// ```
/// use nntp_mail::FoldConfig;
///
/// // RFC 5536 / RFC 5322 safe limits (default)
/// let config = FoldConfig::rfc5536();
/// assert_eq!(config.max_line_length, 76);
/// assert_eq!(config.continuation_column, 8);
///
/// // Never fold
/// let flat = FoldConfig::unfolded();
/// assert_eq!(flat.max_line_length, usize::MAX);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldConfig {
    /// Maximum column an element may end at before a fold is inserted
    pub max_line_length: usize,

    /// Column a continuation line is considered to start at
    pub continuation_column: usize,
}

impl FoldConfig {
    /// Limits that keep every physical header line under 78 columns
    pub const fn rfc5536() -> Self {
        Self {
            max_line_length: 76,
            continuation_column: 8,
        }
    }

    /// Produce a single unfolded line regardless of length
    pub const fn unfolded() -> Self {
        Self {
            max_line_length: usize::MAX,
            continuation_column: 0,
        }
    }

    /// Whether appending `next_len` more characters at column `used` needs a fold
    pub(crate) fn needs_fold(&self, used: usize, next_len: usize) -> bool {
        used.saturating_add(next_len) > self.max_line_length
    }
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self::rfc5536()
    }
}
