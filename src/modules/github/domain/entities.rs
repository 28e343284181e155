use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Repositories per feed page. Fixed.
pub const PAGE_SIZE: u32 = 6;

/// The subset of the GitHub repository payload the feed shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DescribedRepo {
    #[serde(flatten)]
    pub repo: GithubRepo,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedPage {
    pub page: u32,
    pub per_page: u32,
    /// Approximation from the owner's public repo count.
    pub total_pages: u32,
    pub repos: Vec<DescribedRepo>,
}

/// `ceil(public_repos / PAGE_SIZE)`, never below 1.
pub fn total_pages(public_repos: u32) -> u32 {
    public_repos.div_ceil(PAGE_SIZE).max(1)
}
