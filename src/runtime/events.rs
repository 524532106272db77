//! Inventory event stream payloads.

use crate::types::{BookId, MemberId};

/// Events emitted after a state change has been committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    /// A book was inserted or replaced.
    BookAdded {
        /// Added book id.
        book_id: BookId,
    },
    /// A book was deleted.
    BookRemoved {
        /// Removed book id.
        book_id: BookId,
    },
    /// A member was inserted or replaced.
    MemberAdded {
        /// Added member id.
        member_id: MemberId,
    },
    /// A book was checked out.
    Borrowed {
        /// Borrowed book id.
        book_id: BookId,
        /// Borrowing member.
        member_id: MemberId,
    },
    /// A book was checked back in.
    Returned {
        /// Returned book id.
        book_id: BookId,
        /// Returning member.
        member_id: MemberId,
    },
    /// A book was held for a member.
    Reserved {
        /// Reserved book id.
        book_id: BookId,
        /// Reserving member.
        member_id: MemberId,
    },
    /// An unclaimed reservation timed out and the book is Available again.
    ReservationExpired {
        /// Released book id.
        book_id: BookId,
        /// Member whose reservation lapsed.
        member_id: MemberId,
    },
}
