use std::{sync::Arc, time::Duration};

use crate::{clock::Clock, config::PageSettings, page_store::PageStore};

#[derive(Clone)]
pub struct AppState {
    pub pages: PageStore,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(settings: &PageSettings, clock: impl Clock) -> Self {
        Self {
            pages: PageStore::new(
                settings.max_sessions,
                idle_timeout(settings.idle_minutes),
            ),
            clock: Arc::new(clock),
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

fn idle_timeout(idle_minutes: u64) -> Duration {
    Duration::from_secs(idle_minutes.saturating_mul(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timeout_in_minutes() {
        assert_eq!(idle_timeout(0), Duration::ZERO);
        assert_eq!(idle_timeout(120), Duration::from_secs(7200));
    }

    #[test]
    fn huge_idle_timeout_saturates() {
        assert_eq!(idle_timeout(u64::MAX), Duration::from_secs(u64::MAX));
    }
}
