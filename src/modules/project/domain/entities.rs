// src/modules/project/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::store::{Identified, PatchField};

//
// ──────────────────────────────────────────────────────────
// Status
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project status: {0}")]
pub struct UnknownProjectStatus(pub String);

impl FromStr for ProjectStatus {
    type Err = UnknownProjectStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "in-progress" => Ok(ProjectStatus::InProgress),
            other => Err(UnknownProjectStatus(other.to_string())),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Order as entered; duplicates are kept.
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
}

/// Patch semantics:
/// - name/description/status: Unset => keep, Value => replace
/// - technologies: Value(vec) => replace whole list (no merge)
/// - live_url/github_url/image_url: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>)]
    pub technologies: PatchField<Vec<String>>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub live_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub github_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub image_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<ProjectStatus>)]
    pub status: PatchField<ProjectStatus>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.description.is_unset()
            && self.technologies.is_unset()
            && self.live_url.is_unset()
            && self.github_url.is_unset()
            && self.image_url.is_unset()
            && self.status.is_unset()
    }

    /// Applies the patch in place. `updated_at` is left to the caller.
    pub fn apply(self, project: &mut Project) {
        self.name.apply_to(&mut project.name);
        self.description.apply_to(&mut project.description);
        self.technologies.apply_to(&mut project.technologies);
        self.live_url.apply_to_option(&mut project.live_url);
        self.github_url.apply_to_option(&mut project.github_url);
        self.image_url.apply_to_option(&mut project.image_url);
        self.status.apply_to(&mut project.status);
    }
}
