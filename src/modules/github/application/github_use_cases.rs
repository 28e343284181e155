use std::sync::Arc;

use crate::modules::github::application::ports::incoming::use_cases::GetRepoFeedUseCase;

#[derive(Clone)]
pub struct GithubUseCases {
    pub get_feed: Arc<dyn GetRepoFeedUseCase + Send + Sync>,
}
