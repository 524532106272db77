//! Concurrent library inventory: books, members, reservations that expire.
//!
//! # Examples
//!
//! Plain state machine with [`core::store::InventoryStore`]:
//! ```
//! use library_inventory::{
//!     book::{Book, Member},
//!     core::store::{InventoryStore, StoreError},
//!     types::BookStatus,
//! };
//!
//! let mut store = InventoryStore::new();
//! store.add_book(Book::new(101, "The Go Programming Language", "Donovan"));
//! store.add_member(Member::new(7, "Alice"));
//! store.add_member(Member::new(9, "Bob"));
//!
//! store.reserve_book(101, 7).expect("reserve");
//! assert_eq!(
//!     store.borrow_book(101, 9),
//!     Err(StoreError::ReservedByOther { book_id: 101, reserved_by: 7 })
//! );
//! store.borrow_book(101, 7).expect("borrow");
//! assert_eq!(store.get_book(101).map(|b| b.status), Some(BookStatus::Borrowed));
//! ```
//!
//! Shared library with expiring reservations and the queued worker:
//! ```no_run
//! use library_inventory::{
//!     book::{Book, Member},
//!     runtime::{config::LibraryConfig, library::Library, worker::spawn_reservation_worker},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let cfg = LibraryConfig::default();
//! let library = Library::new(cfg.clone());
//! library.add_book(Book::new(101, "Introducing Go", "Doxsey"));
//! library.add_member(Member::new(1, "Alice"));
//!
//! let worker = spawn_reservation_worker(library.clone(), &cfg);
//! worker.reserve(101, 1).await.expect("reserve");
//! library.borrow_book(101, 1).expect("borrow");
//! worker.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Book and member records.
pub mod book;
/// Unsynchronized store and snapshot helpers.
pub mod core;
/// Locked handle, expiry timers, reservation worker and events.
pub mod runtime;
/// Shared primitive types and enums.
pub mod types;
