use hashbrown::HashMap;
use thiserror::Error;

use crate::{
    book::{Book, Member},
    core::snapshot::InventorySnapshot,
    types::{BookId, BookStatus, MemberId},
};

/// Reasons a store operation is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No book with this id.
    #[error("book {0} not found")]
    BookNotFound(BookId),
    /// No member with this id.
    #[error("member {0} not found")]
    MemberNotFound(MemberId),
    /// The book is already checked out.
    #[error("book {0} is already borrowed")]
    AlreadyBorrowed(BookId),
    /// The book is held for a different member.
    #[error("book {book_id} is reserved by member {reserved_by}")]
    ReservedByOther {
        /// Requested book.
        book_id: BookId,
        /// Member currently holding the reservation.
        reserved_by: MemberId,
    },
    /// Reservation requires an available book.
    #[error("book {book_id} is not available for reservation (status {status})")]
    NotAvailable {
        /// Requested book.
        book_id: BookId,
        /// Status found at the time of the request.
        status: BookStatus,
    },
    /// The member does not hold a copy of the book.
    #[error("book {book_id} is not borrowed by member {member_id}")]
    NotBorrowedByMember {
        /// Book being returned.
        book_id: BookId,
        /// Member attempting the return.
        member_id: MemberId,
    },
}

impl StoreError {
    /// True for unknown book or member ids.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BookNotFound(_) | Self::MemberNotFound(_))
    }
}

/// Book and member collections with every lending transition.
///
/// Takes `&mut self` for mutations and does no locking of its own;
/// [`crate::runtime::library::Library`] wraps it in a single mutex.
#[derive(Debug, Default)]
pub struct InventoryStore {
    books: HashMap<BookId, Book>,
    members: HashMap<MemberId, Member>,
}

impl InventoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a book, forcing it to Available.
    pub fn add_book(&mut self, mut book: Book) {
        book.status = BookStatus::Available;
        book.reserved_by = None;
        self.books.insert(book.id, book);
    }

    /// Deletes a book. Returns false if it was not present.
    pub fn remove_book(&mut self, book_id: BookId) -> bool {
        self.books.remove(&book_id).is_some()
    }

    /// Inserts or replaces a member.
    pub fn add_member(&mut self, member: Member) {
        self.members.insert(member.id, member);
    }

    /// Checks a book out to a member, consuming that member's reservation if any.
    pub fn borrow_book(&mut self, book_id: BookId, member_id: MemberId) -> Result<(), StoreError> {
        let book = self.books.get_mut(&book_id).ok_or(StoreError::BookNotFound(book_id))?;
        let member = self
            .members
            .get_mut(&member_id)
            .ok_or(StoreError::MemberNotFound(member_id))?;

        match book.status {
            BookStatus::Reserved => {
                if let Some(reserved_by) = book.reserved_by.filter(|id| *id != member_id) {
                    return Err(StoreError::ReservedByOther { book_id, reserved_by });
                }
            }
            BookStatus::Borrowed => return Err(StoreError::AlreadyBorrowed(book_id)),
            BookStatus::Available => {}
        }

        // Keeps the borrowed list duplicate-free if the book was re-added while held.
        if member.holds(book_id) {
            return Err(StoreError::AlreadyBorrowed(book_id));
        }

        book.status = BookStatus::Borrowed;
        book.reserved_by = None;
        member.borrowed_books.push(book.clone());
        Ok(())
    }

    /// Takes a book back from a member and makes it Available.
    pub fn return_book(&mut self, book_id: BookId, member_id: MemberId) -> Result<(), StoreError> {
        let book = self.books.get_mut(&book_id).ok_or(StoreError::BookNotFound(book_id))?;
        let member = self
            .members
            .get_mut(&member_id)
            .ok_or(StoreError::MemberNotFound(member_id))?;

        let pos = member
            .borrowed_position(book_id)
            .ok_or(StoreError::NotBorrowedByMember { book_id, member_id })?;
        member.borrowed_books.remove(pos);

        book.status = BookStatus::Available;
        book.reserved_by = None;
        Ok(())
    }

    /// Holds an Available book for a member.
    ///
    /// Expiry is not handled here; the caller schedules it after success.
    pub fn reserve_book(&mut self, book_id: BookId, member_id: MemberId) -> Result<(), StoreError> {
        if !self.members.contains_key(&member_id) {
            return Err(StoreError::MemberNotFound(member_id));
        }
        let book = self.books.get_mut(&book_id).ok_or(StoreError::BookNotFound(book_id))?;
        if book.status != BookStatus::Available {
            return Err(StoreError::NotAvailable {
                book_id,
                status: book.status,
            });
        }

        book.status = BookStatus::Reserved;
        book.reserved_by = Some(member_id);
        Ok(())
    }

    /// Reverts a reservation only if `member_id` still holds it.
    ///
    /// Returns true when the book went back to Available. A missing book or
    /// any other state is left untouched.
    pub fn cancel_reservation_if_held(&mut self, book_id: BookId, member_id: MemberId) -> bool {
        match self.books.get_mut(&book_id) {
            Some(book) if book.is_reserved_for(member_id) => {
                book.status = BookStatus::Available;
                book.reserved_by = None;
                true
            }
            _ => false,
        }
    }

    /// Looks up one book.
    pub fn get_book(&self, book_id: BookId) -> Option<&Book> {
        self.books.get(&book_id)
    }

    /// Looks up one member.
    pub fn get_member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.get(&member_id)
    }

    /// Copies of every Available book, in no particular order.
    pub fn available_books(&self) -> Vec<Book> {
        self.books
            .values()
            .filter(|b| b.status == BookStatus::Available)
            .cloned()
            .collect()
    }

    /// Copies of a member's borrowed list; empty for an unknown member.
    pub fn borrowed_books(&self, member_id: MemberId) -> Vec<Book> {
        self.members
            .get(&member_id)
            .map(|m| m.borrowed_books.clone())
            .unwrap_or_default()
    }

    /// Copies of every book, in no particular order.
    pub fn all_books(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    /// Number of books held.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Sorted copy of both collections.
    pub fn export_snapshot(&self) -> InventorySnapshot {
        let mut books: Vec<Book> = self.books.values().cloned().collect();
        books.sort_by_key(|b| b.id);
        let mut members: Vec<Member> = self.members.values().cloned().collect();
        members.sort_by_key(|m| m.id);
        InventorySnapshot { books, members }
    }
}
