pub mod inbox_repository;

pub use inbox_repository::{InboxRepository, InboxRepositoryError};
