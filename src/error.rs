// ⚠️ Error types for the contract catalog
//
// ValidationError is raised at the point of an invalid assignment
// (construction or later mutation). CatalogError adds the failures that
// only exist at the catalog boundary: unknown ids, malformed documents, I/O.

use std::fmt;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

// ============================================================================
// FIELDS
// ============================================================================

/// Every validated field in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AuthorName,
    BookTitle,
    ContractAuthor,
    ContractBook,
    ContractDate,
    ContractRoyalties,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AuthorName => "Author.name",
            Field::BookTitle => "Book.title",
            Field::ContractAuthor => "Contract.author",
            Field::ContractBook => "Contract.book",
            Field::ContractDate => "Contract.date",
            Field::ContractRoyalties => "Contract.royalties",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity kinds, used when reporting unknown ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Book,
    Contract,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Author => "Author",
            EntityKind::Book => "Book",
            EntityKind::Contract => "Contract",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A value of the wrong kind was assigned to a validated field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a string")]
    NotAString { field: Field },

    #[error("{field} must be an integer")]
    NotAnInteger { field: Field },

    /// An integer that does not fit in i64
    #[error("{field} must be an integer between {} and {}", i64::MIN, i64::MAX)]
    OutOfRange { field: Field },

    /// The reference does not name an Author registered in this catalog
    #[error("Contract.author must be an Author (got {reference})")]
    NotAnAuthor { reference: String },

    /// The reference does not name a Book registered in this catalog
    #[error("Contract.book must be a Book (got {reference})")]
    NotABook { reference: String },
}

impl ValidationError {
    /// The field whose assignment failed
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotAString { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::OutOfRange { field } => *field,
            ValidationError::NotAnAuthor { .. } => Field::ContractAuthor,
            ValidationError::NotABook { .. } => Field::ContractBook,
        }
    }
}

// ============================================================================
// CATALOG ERROR
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} already registered: {id}")]
    Duplicate { kind: EntityKind, id: String },

    /// The document shape is wrong (not an object, duplicate ids, ...)
    #[error("malformed catalog document: {0}")]
    Document(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub(crate) fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        CatalogError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// The validation failure, if that is what this error is
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CatalogError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
