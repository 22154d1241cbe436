use std::{sync::Arc, time::Duration};

use moka::sync::Cache;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::domain::{PageError, PageId, PageSession};

pub type SharedPage = Arc<RwLock<PageSession>>;

/// Open pages, kept in memory until they idle out or get evicted.
#[derive(Clone)]
pub struct PageStore {
    pages: Cache<PageId, SharedPage>,
}

impl PageStore {
    pub fn new(max_sessions: u64, idle_timeout: Duration) -> Self {
        let pages = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle_timeout)
            .build();

        Self { pages }
    }

    pub fn open(&self, now: OffsetDateTime) -> Result<SharedPage, PageError> {
        let id = PageId::new();
        let page = Arc::new(RwLock::new(PageSession::open(id, now)?));
        self.pages.insert(id, page.clone());

        tracing::debug!("Opened page {}", id);
        Ok(page)
    }

    pub fn get(&self, id: PageId) -> Result<SharedPage, PageError> {
        self.pages.get(&id).ok_or(PageError::NotFound(id))
    }

    #[cfg(test)]
    pub fn close(&self, id: PageId) {
        self.pages.invalidate(&id);
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn store() -> PageStore {
        PageStore::new(100, Duration::from_secs(60))
    }

    #[tokio::test]
    async fn open_pages_get_distinct_ids() {
        let store = store();
        let first = store.open(datetime!(2024-03-04 09:00 UTC)).unwrap();
        let second = store.open(datetime!(2024-03-04 09:00 UTC)).unwrap();
        let first_id = first.read().await.id;
        let second_id = second.read().await.id;

        assert_ne!(first_id, second_id);
        assert!(store.get(first_id).is_ok());
        assert!(store.get(second_id).is_ok());
    }

    #[tokio::test]
    async fn ids_of_other_pages_cannot_be_guessed() {
        let store = store();
        let opened = store.open(datetime!(2024-03-04 09:00 UTC)).unwrap();
        let opened_id = opened.read().await.id;

        for _ in 0..100 {
            let guess = PageId::new();
            assert_ne!(guess, opened_id);
            assert!(matches!(store.get(guess), Err(PageError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn pages_are_shared_between_lookups() {
        let store = store();
        let id = store
            .open(datetime!(2024-03-04 09:00 UTC))
            .unwrap()
            .read()
            .await
            .id;

        store
            .get(id)
            .unwrap()
            .write()
            .await
            .submit("Noor".to_string(), "focus".to_string());

        let page = store.get(id).unwrap();
        assert_eq!(page.read().await.state.saved_name, "Noor");
    }

    #[test]
    fn unknown_and_closed_pages_are_not_found() {
        let store = store();
        assert!(matches!(
            store.get(PageId::new()),
            Err(PageError::NotFound(_))
        ));

        let page = store.open(datetime!(2024-03-04 09:00 UTC)).unwrap();
        let id = page.blocking_read().id;
        store.close(id);
        assert!(store.get(id).is_err());
    }
}
