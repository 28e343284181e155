// src/shared/store.rs
//
// Storage contracts shared by the backend repositories and the site caches.
// A backend (Postgres, in-memory, HTTP) implements one of these traits and the
// callers never learn which one they were given.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the field (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior (recommended usage):
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Applies the patch to a nullable slot.
    pub fn apply_to_option(self, slot: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *slot = None,
            PatchField::Value(v) => *slot = Some(v),
        }
    }

    /// Applies the patch to a required slot. `Null` is ignored.
    pub fn apply_to(self, slot: &mut T) {
        if let PatchField::Value(v) = self {
            *slot = v;
        }
    }
}

impl<T: PartialEq> PatchField<T> {
    /// `Value(next)` when `next` differs from `current`, `Unset` otherwise.
    pub fn changed(current: &T, next: T) -> Self {
        if *current == next {
            PatchField::Unset
        } else {
            PatchField::Value(next)
        }
    }

    /// Same as [`PatchField::changed`] for nullable fields.
    pub fn changed_option(current: &Option<T>, next: Option<T>) -> Self {
        match (current, next) {
            (Some(c), Some(n)) if *c == n => PatchField::Unset,
            (None, None) => PatchField::Unset,
            (_, Some(n)) => PatchField::Value(n),
            (Some(_), None) => PatchField::Null,
        }
    }
}

/// Records addressable by an opaque server-assigned id.
pub trait Identified {
    fn id(&self) -> Uuid;
}

/// Collection contract: list newest-first, create, update by id, delete by id.
#[async_trait]
pub trait RecordStore: Send + Sync {
    type Record: Identified + Clone + Send + Sync + 'static;
    type Draft: Send + 'static;
    type Patch: Send + 'static;
    type Error: std::error::Error + Send + Sync + 'static;

    /// All records ordered by creation time, newest first.
    async fn list(&self) -> Result<Vec<Self::Record>, Self::Error>;

    async fn create(&self, draft: Self::Draft) -> Result<Self::Record, Self::Error>;

    /// Returns the stored representation after the patch was applied.
    async fn update(&self, id: Uuid, patch: Self::Patch) -> Result<Self::Record, Self::Error>;

    async fn delete(&self, id: Uuid) -> Result<(), Self::Error>;
}

/// Singleton contract: at most one record, created on first write.
#[async_trait]
pub trait SingletonStore: Send + Sync {
    type Record: Clone + Send + Sync + 'static;
    type Patch: Send + 'static;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn fetch(&self) -> Result<Option<Self::Record>, Self::Error>;

    async fn upsert(&self, patch: Self::Patch) -> Result<Self::Record, Self::Error>;
}
