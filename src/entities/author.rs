// ✍️ Author Entity - Stable identity + validated name
//
// "Author name is a VALUE (can change), Author UUID is IDENTITY (never changes)"
//
// Two authors with the same name are still two authors.

use super::Entity;
use crate::error::{EntityKind, Field, ValidationError};
use crate::value::expect_string;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

entity_id! {
    /// Stable identity of an [`Author`]
    AuthorId
}

// ============================================================================
// AUTHOR ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Stable identity - NEVER changes
    id: AuthorId,

    name: String,

    /// When this author was registered
    created_at: DateTime<Utc>,
}

impl Author {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self::with_id(AuthorId::new(), name)
    }

    /// Used by import paths where identity already exists externally
    pub(crate) fn with_id(id: AuthorId, name: impl Into<String>) -> Self {
        Author {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Build from an untyped name; fails unless the value is a string
    pub(crate) fn from_value(id: AuthorId, name: &Value) -> Result<Self, ValidationError> {
        let name = expect_string(Field::AuthorName, name)?;
        Ok(Self::with_id(id, name))
    }

    /// Keep the registration time recorded elsewhere (document import)
    pub(crate) fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Re-validates on every assignment; the old name survives a failure
    pub(crate) fn set_name_from_value(&mut self, name: &Value) -> Result<(), ValidationError> {
        self.name = expect_string(Field::AuthorName, name)?;
        Ok(())
    }
}

impl Entity for Author {
    type Id = AuthorId;

    const KIND: EntityKind = EntityKind::Author;

    fn id(&self) -> AuthorId {
        self.id
    }
}

// ============================================================================
// TESTS
// ============================================================================
