//! Unsynchronized inventory state machine and diagnostic snapshots.

/// Point-in-time copies of the whole inventory.
pub mod snapshot;
/// Authoritative book/member store and its transitions.
pub mod store;
