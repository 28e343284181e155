mod get_repo_feed_service;

pub use get_repo_feed_service::GetRepoFeedService;
