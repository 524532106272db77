//! Book and member records.

use serde::{Deserialize, Serialize};

use crate::types::{BookId, BookStatus, MemberId};

/// Authoritative book record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable caller-assigned identifier.
    pub id: BookId,
    /// Display title.
    pub title: String,
    /// Display author.
    pub author: String,
    /// Current lending state.
    pub status: BookStatus,
    /// Reserving member; `Some` only while `status` is [`BookStatus::Reserved`].
    pub reserved_by: Option<MemberId>,
}

impl Book {
    /// Builds an [`BookStatus::Available`] book with no reservation.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            status: BookStatus::Available,
            reserved_by: None,
        }
    }

    /// True when the book is reserved for `member_id`.
    pub fn is_reserved_for(&self, member_id: MemberId) -> bool {
        self.status == BookStatus::Reserved && self.reserved_by == Some(member_id)
    }
}

/// Library member and the books they currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable caller-assigned identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Copies of each borrowed book as it was at borrow time, in borrow order.
    pub borrowed_books: Vec<Book>,
}

impl Member {
    /// Builds a member holding no books.
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed_books: Vec::new(),
        }
    }

    /// Position of `book_id` in the borrowed list, if held.
    pub fn borrowed_position(&self, book_id: BookId) -> Option<usize> {
        self.borrowed_books.iter().position(|b| b.id == book_id)
    }

    /// True when the member holds a copy of `book_id`.
    pub fn holds(&self, book_id: BookId) -> bool {
        self.borrowed_position(book_id).is_some()
    }
}
