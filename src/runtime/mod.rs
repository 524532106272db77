//! Locked caller API, reservation expiry, and the queued reservation worker.

/// Runtime configuration.
pub mod config;
/// Event stream types emitted after state changes.
pub mod events;
/// Delayed per-reservation expiry tasks.
pub mod expiry;
/// Shared, lock-guarded inventory handle.
pub mod library;
/// Serialized asynchronous reservation pipeline.
pub mod worker;
