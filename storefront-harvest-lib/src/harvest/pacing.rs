use super::Operation;
use core::time::Duration;

/// Cooperative inter-request delays.
///
/// This is not a token bucket: the caller sleeps for a fixed amount after every
/// request, whether or not the request succeeded, before it may issue the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay after each seed request (search or category listing).
    pub seed_delay: Duration,

    /// Delay after each per-item request (detail and optional facets) and metadata request.
    pub facet_delay: Duration,

    /// Delay after an item has been fully processed, before the next item starts.
    pub item_delay: Duration,
}

impl Pacing {
    /// No delays at all; useful for tests and for local gateways.
    pub const NONE: Self = Self {
        seed_delay: Duration::ZERO,
        facet_delay: Duration::ZERO,
        item_delay: Duration::ZERO,
    };

    /// The delay to observe after an operation completes.
    #[must_use]
    pub const fn delay_for(&self, operation: Operation) -> Duration {
        if operation.is_seed() { self.seed_delay } else { self.facet_delay }
    }

    pub async fn after(&self, operation: Operation) {
        pause(self.delay_for(operation)).await;
    }

    pub async fn between_items(&self) {
        pause(self.item_delay).await;
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            seed_delay: Duration::from_secs(1),
            facet_delay: Duration::from_millis(500),
            item_delay: Duration::from_secs(2),
        }
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
