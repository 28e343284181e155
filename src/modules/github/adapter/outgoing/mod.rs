pub mod github_api_client;

pub use github_api_client::GithubApiClient;
