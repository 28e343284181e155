pub mod describer;
pub mod entities;

pub use describer::{classify, describe, RepoKind};
pub use entities::{total_pages, DescribedRepo, FeedPage, GithubRepo, PAGE_SIZE};
