//! Shared primitive IDs and the book status enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-assigned book identifier.
pub type BookId = u32;
/// Caller-assigned member identifier.
pub type MemberId = u32;

/// Lending state of a single book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    /// On the shelf; may be borrowed or reserved by anyone.
    Available,
    /// Held for one member until borrowed or expired.
    Reserved,
    /// Checked out by exactly one member.
    Borrowed,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Borrowed => "Borrowed",
        };
        f.write_str(s)
    }
}
