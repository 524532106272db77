use std::{sync::Weak, time::Duration};

use tokio::runtime::Handle;

use crate::types::{BookId, MemberId};

use super::library::Shared;

/// Starts one independent timer task per successful reservation.
///
/// Timers share nothing but the store they report back to and are never
/// cancelled; each fires exactly once.
#[derive(Debug, Clone)]
pub struct ExpiryScheduler {
    runtime: Handle,
    ttl: Duration,
}

impl ExpiryScheduler {
    /// Scheduler spawning onto `runtime` with a fixed reservation lifetime.
    pub fn new(runtime: Handle, ttl: Duration) -> Self {
        Self { runtime, ttl }
    }

    /// Delay between a reservation and its expiry check.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fire-and-forget: after the ttl, revert the reservation if still held.
    ///
    /// Holds only a weak reference, so a timer outliving every
    /// [`super::library::Library`] handle does nothing.
    pub(crate) fn schedule(&self, target: Weak<Shared>, book_id: BookId, member_id: MemberId) {
        let ttl = self.ttl;
        self.runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(shared) = target.upgrade() {
                shared.expire_reservation(book_id, member_id);
            }
        });
    }

    pub(crate) fn runtime(&self) -> &Handle {
        &self.runtime
    }
}
