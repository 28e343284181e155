use crate::modules::profile::domain::{ProfilePatch, ProfileRecord};
use crate::shared::store::SingletonStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The profile singleton: read it, or write it (creating it on first write).
pub trait ProfileRepository:
    SingletonStore<Record = ProfileRecord, Patch = ProfilePatch, Error = ProfileRepositoryError>
{
}

impl<T> ProfileRepository for T where
    T: SingletonStore<Record = ProfileRecord, Patch = ProfilePatch, Error = ProfileRepositoryError>
{
}
