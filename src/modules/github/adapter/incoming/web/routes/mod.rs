mod get_repos;

pub use get_repos::{__path_get_repos_handler, get_repos_handler};
