mod get_repo_feed;

pub use get_repo_feed::{GetRepoFeedError, GetRepoFeedUseCase};
