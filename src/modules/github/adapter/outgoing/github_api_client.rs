use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::modules::github::application::ports::outgoing::{
    RepositorySource, RepositorySourceError,
};
use crate::modules::github::domain::GithubRepo;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects requests without one
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct GithubUser {
    public_repos: u32,
}

/// Unauthenticated client for the public GitHub REST API.
#[derive(Clone)]
pub struct GithubApiClient {
    http: Client,
    base_url: String,
}

impl GithubApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RepositorySourceError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RepositorySourceError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn repos_url(&self, owner: &str, page: u32, per_page: u32) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}&page={}",
            self.base_url, owner, per_page, page
        )
    }

    fn user_url(&self, owner: &str) -> String {
        format!("{}/users/{}", self.base_url, owner)
    }

    async fn get(&self, url: &str) -> Result<Response, RepositorySourceError> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| RepositorySourceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RepositorySourceError::Status(response.status().as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl RepositorySource for GithubApiClient {
    async fn list_repos(
        &self,
        owner: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GithubRepo>, RepositorySourceError> {
        self.get(&self.repos_url(owner, page, per_page))
            .await?
            .json::<Vec<GithubRepo>>()
            .await
            .map_err(|e| RepositorySourceError::Decode(e.to_string()))
    }

    async fn public_repo_count(&self, owner: &str) -> Result<u32, RepositorySourceError> {
        let user = self
            .get(&self.user_url(owner))
            .await?
            .json::<GithubUser>()
            .await
            .map_err(|e| RepositorySourceError::Decode(e.to_string()))?;

        Ok(user.public_repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_url_matches_public_api() {
        let client = GithubApiClient::new(DEFAULT_API_URL).unwrap();
        assert_eq!(
            client.repos_url("rivka2211", 2, 6),
            "https://api.github.com/users/rivka2211/repos?sort=updated&per_page=6&page=2"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_ignored() {
        let client = GithubApiClient::new("http://localhost:9000/").unwrap();
        assert_eq!(
            client.user_url("someone"),
            "http://localhost:9000/users/someone"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // port 9 (discard) on loopback is closed on CI machines
        let client = GithubApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.public_repo_count("someone").await.unwrap_err();
        assert!(matches!(err, RepositorySourceError::Network(_)));
    }
}
