// Contract Registry - Core Library
// Authors and Books joined many-to-many through Contracts.
// Exposes all modules for use in the CLI and tests

pub mod catalog;
pub mod document;
pub mod entities;
pub mod error;
pub mod logging;
mod value;

// Re-export commonly used types
pub use catalog::Catalog;
pub use document::{CatalogDocument, ImportSummary};
pub use entities::{
    Author, AuthorId, AuthorRegistry,
    Book, BookId, BookRegistry,
    Contract, ContractId, ContractRegistry,
    Entity, Registry,
};
pub use error::{CatalogError, CatalogResult, EntityKind, Field, ValidationError};
pub use logging::{default_log_level, init_logging};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
