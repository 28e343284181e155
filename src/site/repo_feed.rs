use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::modules::github::domain::FeedPage;
use crate::site::notifications::Notifications;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("GitHub repositories are unavailable right now: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait FeedPageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<FeedPage, FeedError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Idle,
    Loading,
    Ready(FeedPage),
    /// Stays here until [`RepoFeed::retry`] is called.
    Unavailable(String),
}

struct FeedState {
    page: u32,
    total_pages: u32,
    status: FeedStatus,
}

/// Paged view onto the public repository feed.
pub struct RepoFeed {
    source: Arc<dyn FeedPageSource>,
    notifications: Notifications,
    state: Mutex<FeedState>,
}

impl RepoFeed {
    pub fn new(source: Arc<dyn FeedPageSource>, notifications: Notifications) -> Self {
        Self {
            source,
            notifications,
            state: Mutex::new(FeedState {
                page: 1,
                total_pages: 1,
                status: FeedStatus::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn page(&self) -> u32 {
        self.lock().page
    }

    pub fn total_pages(&self) -> u32 {
        self.lock().total_pages
    }

    pub fn status(&self) -> FeedStatus {
        self.lock().status.clone()
    }

    /// Fetches the requested page.
    pub async fn load(&self) -> Result<(), FeedError> {
        let requested = {
            let mut state = self.lock();
            state.status = FeedStatus::Loading;
            state.page
        };

        let result = self.source.fetch_page(requested).await;

        let mut state = self.lock();
        if state.page != requested {
            // a newer page was asked for meanwhile
            return Ok(());
        }

        match result {
            Ok(page) => {
                state.total_pages = page.total_pages.max(1);
                state.status = FeedStatus::Ready(page);
                Ok(())
            }
            Err(e) => {
                state.status = FeedStatus::Unavailable(e.to_string());
                drop(state);
                self.notifications.error(e.to_string());
                Err(e)
            }
        }
    }

    /// No-op on the last page.
    pub async fn next_page(&self) -> Result<(), FeedError> {
        {
            let mut state = self.lock();
            if state.page >= state.total_pages {
                return Ok(());
            }
            state.page += 1;
        }
        self.load().await
    }

    /// No-op on the first page.
    pub async fn previous_page(&self) -> Result<(), FeedError> {
        {
            let mut state = self.lock();
            if state.page <= 1 {
                return Ok(());
            }
            state.page -= 1;
        }
        self.load().await
    }

    pub async fn retry(&self) -> Result<(), FeedError> {
        self.load().await
    }
}
