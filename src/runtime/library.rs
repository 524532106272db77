use std::sync::Arc;

use parking_lot::Mutex;
use tokio::{
    runtime::{Handle, TryCurrentError},
    sync::broadcast,
};
use tracing::{debug, info};

use crate::{
    book::{Book, Member},
    core::{
        snapshot::InventorySnapshot,
        store::{InventoryStore, StoreError},
    },
    types::{BookId, MemberId},
};

use super::{config::LibraryConfig, events::InventoryEvent, expiry::ExpiryScheduler};

/// State reachable from every handle and from pending expiry timers.
pub(crate) struct Shared {
    store: Mutex<InventoryStore>,
    events_tx: broadcast::Sender<InventoryEvent>,
}

impl Shared {
    /// Called with the store guard held so events follow commit order.
    /// `broadcast::Sender::send` never waits.
    fn emit(&self, event: InventoryEvent) {
        let _ = self.events_tx.send(event);
    }

    /// Reverts the reservation if `member_id` still holds it; otherwise a no-op.
    pub(crate) fn expire_reservation(&self, book_id: BookId, member_id: MemberId) -> bool {
        let mut store = self.store.lock();
        let reverted = store.cancel_reservation_if_held(book_id, member_id);
        if reverted {
            self.emit(InventoryEvent::ReservationExpired { book_id, member_id });
        }
        drop(store);

        if reverted {
            info!(book_id, member_id, "reservation timed out, book available again");
        } else {
            debug!(book_id, member_id, "stale reservation expiry ignored");
        }
        reverted
    }
}

/// Cloneable handle to one shared inventory.
///
/// Every operation takes the same exclusive lock over books and members for
/// its whole duration. Events are queued before the lock is released, so
/// subscribers see them in commit order; expiry timers are started after.
/// Results are always copies; nothing borrowed from inside the lock escapes.
#[derive(Clone)]
pub struct Library {
    shared: Arc<Shared>,
    expiry: ExpiryScheduler,
}

impl Library {
    /// Empty library whose expiry timers run on the current tokio runtime.
    ///
    /// Panics outside a runtime context, like `tokio::spawn`; use
    /// [`Library::try_new`] or [`Library::with_handle`] from plain threads.
    pub fn new(config: LibraryConfig) -> Self {
        Self::with_handle(Handle::current(), config)
    }

    /// Like [`Library::new`], but reports a missing runtime instead of panicking.
    pub fn try_new(config: LibraryConfig) -> Result<Self, TryCurrentError> {
        Ok(Self::with_handle(Handle::try_current()?, config))
    }

    /// Empty library whose expiry timers run on `runtime`.
    ///
    /// The constructor for synchronous callers that own a runtime elsewhere.
    pub fn with_handle(runtime: Handle, config: LibraryConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            shared: Arc::new(Shared {
                store: Mutex::new(InventoryStore::new()),
                events_tx,
            }),
            expiry: ExpiryScheduler::new(runtime, config.reservation_ttl()),
        }
    }

    /// Receives every event committed after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<InventoryEvent> {
        self.shared.events_tx.subscribe()
    }

    /// Scheduler used for reservation expiry.
    pub fn expiry(&self) -> &ExpiryScheduler {
        &self.expiry
    }

    /// Inserts or replaces a book as Available.
    pub fn add_book(&self, book: Book) {
        let book_id = book.id;
        let mut store = self.shared.store.lock();
        store.add_book(book);
        self.shared.emit(InventoryEvent::BookAdded { book_id });
        drop(store);
        debug!(book_id, "book added");
    }

    /// Deletes a book if present.
    pub fn remove_book(&self, book_id: BookId) {
        let mut store = self.shared.store.lock();
        if store.remove_book(book_id) {
            self.shared.emit(InventoryEvent::BookRemoved { book_id });
            drop(store);
            debug!(book_id, "book removed");
        }
    }

    /// Inserts or replaces a member.
    pub fn add_member(&self, member: Member) {
        let member_id = member.id;
        let mut store = self.shared.store.lock();
        store.add_member(member);
        self.shared.emit(InventoryEvent::MemberAdded { member_id });
        drop(store);
        debug!(member_id, "member added");
    }

    /// Checks a book out; see [`InventoryStore::borrow_book`].
    pub fn borrow_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), StoreError> {
        let mut store = self.shared.store.lock();
        store.borrow_book(book_id, member_id)?;
        self.shared.emit(InventoryEvent::Borrowed { book_id, member_id });
        drop(store);
        debug!(book_id, member_id, "book borrowed");
        Ok(())
    }

    /// Checks a book back in; see [`InventoryStore::return_book`].
    pub fn return_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), StoreError> {
        let mut store = self.shared.store.lock();
        store.return_book(book_id, member_id)?;
        self.shared.emit(InventoryEvent::Returned { book_id, member_id });
        drop(store);
        debug!(book_id, member_id, "book returned");
        Ok(())
    }

    /// Reserves an Available book and starts its expiry timer.
    ///
    /// The timer is never cancelled. If the reservation is consumed or
    /// replaced first, the timer still fires and finds nothing to revert.
    pub fn reserve_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), StoreError> {
        let mut store = self.shared.store.lock();
        store.reserve_book(book_id, member_id)?;
        self.shared.emit(InventoryEvent::Reserved { book_id, member_id });
        drop(store);
        debug!(book_id, member_id, "book reserved");
        self.expiry.schedule(Arc::downgrade(&self.shared), book_id, member_id);
        Ok(())
    }
    /// Copies of every Available book, unordered.
    pub fn list_available_books(&self) -> Vec<Book> {
        self.shared.store.lock().available_books()
    }

    /// Copies of the member's borrowed list; empty if the member is unknown.
    pub fn list_borrowed_books(&self, member_id: MemberId) -> Vec<Book> {
        self.shared.store.lock().borrowed_books(member_id)
    }

    /// Copies of every book with its status, unordered.
    pub fn list_all_books(&self) -> Vec<Book> {
        self.shared.store.lock().all_books()
    }

    /// Copy of one book.
    pub fn book(&self, book_id: BookId) -> Option<Book> {
        self.shared.store.lock().get_book(book_id).cloned()
    }

    /// Copy of one member.
    pub fn member(&self, member_id: MemberId) -> Option<Member> {
        self.shared.store.lock().get_member(member_id).cloned()
    }

    /// Sorted copy of all books and members, taken under one lock.
    pub fn snapshot(&self) -> InventorySnapshot {
        self.shared.store.lock().export_snapshot()
    }
}
