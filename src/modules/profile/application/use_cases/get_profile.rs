use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::modules::profile::domain::ProfileRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetProfileError {
    RepositoryError(String),
}

impl std::fmt::Display for GetProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Reads the stored profile. `None` means nobody has saved one yet.
#[derive(Debug, Clone)]
pub struct GetProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> GetProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
pub trait IGetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<ProfileRecord>, GetProfileError>;
}

#[async_trait::async_trait]
impl<R> IGetProfileUseCase for GetProfileUseCase<R>
where
    R: ProfileRepository,
{
    async fn execute(&self) -> Result<Option<ProfileRecord>, GetProfileError> {
        self.repository.fetch().await.map_err(|e| match e {
            ProfileRepositoryError::DatabaseError(msg) => GetProfileError::RepositoryError(msg),
        })
    }
}
