use crate::modules::profile::domain::{ProfilePatch, ProfileRecord};
use crate::modules::project::domain::{
    join_technologies, split_technologies, NewProject, Project, ProjectPatch, ProjectStatus,
};
use crate::shared::store::PatchField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

/// Raw editor input for a project. Technologies are typed as one
/// comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub live_url: String,
    pub github_url: String,
    pub image_url: String,
    pub status: ProjectStatus,
}

impl ProjectForm {
    /// Pre-fills the editor from a stored project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            technologies: join_technologies(&project.technologies),
            live_url: project.live_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            image_url: project.image_url.clone().unwrap_or_default(),
            status: project.status,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Required("name"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::Required("description"));
        }
        Ok(())
    }

    pub fn to_new_project(&self) -> Result<NewProject, FormError> {
        self.validate()?;

        Ok(NewProject {
            name: self.name.clone(),
            description: self.description.clone(),
            technologies: split_technologies(&self.technologies),
            live_url: optional(&self.live_url),
            github_url: optional(&self.github_url),
            image_url: optional(&self.image_url),
            status: self.status,
        })
    }

    /// Only the fields that differ from `current` end up set.
    pub fn to_patch(&self, current: &Project) -> Result<ProjectPatch, FormError> {
        self.validate()?;

        Ok(ProjectPatch {
            name: PatchField::changed(&current.name, self.name.clone()),
            description: PatchField::changed(&current.description, self.description.clone()),
            technologies: PatchField::changed(
                &current.technologies,
                split_technologies(&self.technologies),
            ),
            live_url: PatchField::changed_option(&current.live_url, optional(&self.live_url)),
            github_url: PatchField::changed_option(
                &current.github_url,
                optional(&self.github_url),
            ),
            image_url: PatchField::changed_option(&current.image_url, optional(&self.image_url)),
            status: PatchField::changed(&current.status, self.status),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

/// Blank inputs clear the stored value so the default shows again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar_url: String,
}

impl ProfileForm {
    pub fn from_record(record: Option<&ProfileRecord>) -> Self {
        let Some(r) = record else {
            return Self::default();
        };

        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: text(&r.name),
            title: text(&r.title),
            bio: text(&r.bio),
            email: text(&r.email),
            phone: text(&r.phone),
            location: text(&r.location),
            avatar_url: text(&r.avatar_url),
        }
    }

    pub fn to_patch(&self, current: Option<&ProfileRecord>) -> ProfilePatch {
        fn field(stored: Option<&Option<String>>, input: &str) -> PatchField<String> {
            PatchField::changed_option(stored.unwrap_or(&None), optional(input))
        }

        ProfilePatch {
            name: field(current.map(|r| &r.name), &self.name),
            title: field(current.map(|r| &r.title), &self.title),
            bio: field(current.map(|r| &r.bio), &self.bio),
            email: field(current.map(|r| &r.email), &self.email),
            phone: field(current.map(|r| &r.phone), &self.phone),
            location: field(current.map(|r| &r.location), &self.location),
            avatar_url: field(current.map(|r| &r.avatar_url), &self.avatar_url),
        }
    }
}
