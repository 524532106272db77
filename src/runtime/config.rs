use std::time::Duration;

use serde::Deserialize;

/// Tunables for [`crate::runtime::library::Library`] and the reservation worker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// How long an unclaimed reservation is held before reverting.
    pub reservation_ttl_ms: u64,
    /// Capacity of the reservation worker's request queue.
    pub reservation_queue_bound: usize,
    /// Per-subscriber buffer of the event broadcast channel.
    pub event_capacity: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            reservation_ttl_ms: 5_000,
            reservation_queue_bound: 64,
            event_capacity: 1024,
        }
    }
}

impl LibraryConfig {
    /// Reservation lifetime as a [`Duration`].
    pub fn reservation_ttl(&self) -> Duration {
        Duration::from_millis(self.reservation_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_holds_reservations_for_five_seconds() {
        assert_eq!(LibraryConfig::default().reservation_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: LibraryConfig = serde_json::from_str(r#"{ "reservation_ttl_ms": 250 }"#).expect("parse");
        assert_eq!(cfg.reservation_ttl(), Duration::from_millis(250));
        assert_eq!(cfg.reservation_queue_bound, 64);
        assert_eq!(cfg.event_capacity, 1024);
    }
}
