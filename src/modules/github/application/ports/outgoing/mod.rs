pub mod repository_source;

pub use repository_source::{RepositorySource, RepositorySourceError};
