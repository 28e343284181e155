// src/modules/project/application/ports/outgoing/project_repository.rs

use crate::modules::project::domain::{NewProject, Project, ProjectPatch};
use crate::shared::store::RecordStore;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Any record store speaking the project vocabulary.
pub trait ProjectRepository:
    RecordStore<
    Record = Project,
    Draft = NewProject,
    Patch = ProjectPatch,
    Error = ProjectRepositoryError,
>
{
}

impl<T> ProjectRepository for T where
    T: RecordStore<
        Record = Project,
        Draft = NewProject,
        Patch = ProjectPatch,
        Error = ProjectRepositoryError,
    >
{
}
