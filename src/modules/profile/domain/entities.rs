use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::store::PatchField;

pub const DEFAULT_NAME: &str = "Rivka";
pub const DEFAULT_TITLE: &str = "Full Stack Developer";
pub const DEFAULT_BIO: &str = "Experienced software developer specializing in modern web and \
mobile applications, with a focus on performance and great user experience.";
pub const DEFAULT_EMAIL: &str = "rivka.dev@email.com";
pub const DEFAULT_PHONE: &str = "050-123-4567";
pub const DEFAULT_LOCATION: &str = "Israel";

/// The stored singleton. Every content field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the site renders: stored values with fixed fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar_url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            bio: DEFAULT_BIO.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            avatar_url: None,
        }
    }
}

fn or_default(value: Option<&String>, fallback: &str) -> String {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

impl Profile {
    pub fn resolve(record: Option<&ProfileRecord>) -> Self {
        let Some(r) = record else {
            return Self::default();
        };

        Self {
            name: or_default(r.name.as_ref(), DEFAULT_NAME),
            title: or_default(r.title.as_ref(), DEFAULT_TITLE),
            bio: or_default(r.bio.as_ref(), DEFAULT_BIO),
            email: or_default(r.email.as_ref(), DEFAULT_EMAIL),
            phone: or_default(r.phone.as_ref(), DEFAULT_PHONE),
            location: or_default(r.location.as_ref(), DEFAULT_LOCATION),
            avatar_url: r.avatar_url.clone().filter(|url| !url.trim().is_empty()),
        }
    }
}

/// Unset => keep, Null => clear back to the default, Value => set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub avatar_url: PatchField<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.title.is_unset()
            && self.bio.is_unset()
            && self.email.is_unset()
            && self.phone.is_unset()
            && self.location.is_unset()
            && self.avatar_url.is_unset()
    }

    pub fn apply(self, record: &mut ProfileRecord) {
        self.name.apply_to_option(&mut record.name);
        self.title.apply_to_option(&mut record.title);
        self.bio.apply_to_option(&mut record.bio);
        self.email.apply_to_option(&mut record.email);
        self.phone.apply_to_option(&mut record.phone);
        self.location.apply_to_option(&mut record.location);
        self.avatar_url.apply_to_option(&mut record.avatar_url);
    }
}
