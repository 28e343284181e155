use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::modules::github::application::ports::incoming::use_cases::{
    GetRepoFeedError, GetRepoFeedUseCase,
};
use crate::modules::github::application::ports::outgoing::{
    RepositorySource, RepositorySourceError,
};
use crate::modules::github::domain::{describe, total_pages, DescribedRepo, FeedPage, PAGE_SIZE};

pub struct GetRepoFeedService {
    source: Arc<dyn RepositorySource>,
    owner: String,
}

impl GetRepoFeedService {
    pub fn new(source: Arc<dyn RepositorySource>, owner: impl Into<String>) -> Self {
        Self {
            source,
            owner: owner.into(),
        }
    }
}

#[async_trait]
impl GetRepoFeedUseCase for GetRepoFeedService {
    async fn execute(&self, page: u32) -> Result<FeedPage, GetRepoFeedError> {
        let page = page.max(1);

        let unavailable = |e: RepositorySourceError| {
            error!(owner = %self.owner, page, "GitHub feed request failed: {}", e);
            GetRepoFeedError::Unavailable(e.to_string())
        };

        let (mut repos, count) = futures::try_join!(
            self.source.list_repos(&self.owner, page, PAGE_SIZE),
            self.source.public_repo_count(&self.owner),
        )
        .map_err(unavailable)?;

        // past the end: serve the last page instead
        let total = total_pages(count);
        let page = if page > total {
            repos = self
                .source
                .list_repos(&self.owner, total, PAGE_SIZE)
                .await
                .map_err(unavailable)?;
            total
        } else {
            page
        };

        let repos = repos
            .into_iter()
            .map(|repo| DescribedRepo {
                summary: describe(&repo),
                repo,
            })
            .collect();

        Ok(FeedPage {
            page,
            per_page: PAGE_SIZE,
            total_pages: total,
            repos,
        })
    }
}
