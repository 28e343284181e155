use email_address::EmailAddress;
use tracing::info;

use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::modules::profile::domain::{ProfilePatch, ProfileRecord};
use crate::shared::store::PatchField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateProfileError {
    InvalidInput(String),
    RepositoryError(String),
}

impl std::fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateProfileError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            UpdateProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Writes the profile singleton, creating it on the first save.
#[derive(Debug, Clone)]
pub struct UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, patch: ProfilePatch) -> Result<ProfileRecord, UpdateProfileError>;
}

#[async_trait::async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    async fn execute(&self, patch: ProfilePatch) -> Result<ProfileRecord, UpdateProfileError> {
        // blank is allowed and falls back to the default on read
        if let PatchField::Value(email) = &patch.email {
            let email = email.trim();
            if !email.is_empty() && !EmailAddress::is_valid(email) {
                return Err(UpdateProfileError::InvalidInput(
                    "email is not a valid address".to_string(),
                ));
            }
        }

        let record = self.repository.upsert(patch).await.map_err(|e| match e {
            ProfileRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
        })?;

        info!(profile_id = %record.id, "Profile saved");
        Ok(record)
    }
}
