// 📝 Contract Entity - Join between one Author and one Book
//
// Carries its own attributes (date, royalties). Holds non-owning references
// (ids) to its author and book; the catalog checks those ids are registered.
//
// - date: free-form text, no format check, duplicates allowed
// - royalties: any i64, zero and negative included

use super::{AuthorId, BookId, Entity};
use crate::error::{EntityKind, Field, ValidationError};
use crate::value::{expect_integer, expect_string};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

entity_id! {
    /// Stable identity of a [`Contract`]
    ContractId
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    id: ContractId,

    /// Foreign key to Author
    author: AuthorId,

    /// Foreign key to Book
    book: BookId,

    date: String,

    royalties: i64,

    created_at: DateTime<Utc>,
}

impl Contract {
    /// Callers must have checked that `author` and `book` are registered.
    pub(crate) fn new(
        id: ContractId,
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Self {
        Contract {
            id,
            author,
            book,
            date: date.into(),
            royalties,
            created_at: Utc::now(),
        }
    }

    /// Keep the registration time recorded elsewhere (document import)
    pub(crate) fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn royalties(&self) -> i64 {
        self.royalties
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_book(&mut self, book: BookId) {
        self.book = book;
    }

    pub(crate) fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub(crate) fn set_royalties(&mut self, royalties: i64) {
        self.royalties = royalties;
    }

    pub(crate) fn set_date_from_value(&mut self, date: &Value) -> Result<(), ValidationError> {
        self.date = expect_string(Field::ContractDate, date)?;
        Ok(())
    }

    pub(crate) fn set_royalties_from_value(
        &mut self,
        royalties: &Value,
    ) -> Result<(), ValidationError> {
        self.royalties = expect_integer(Field::ContractRoyalties, royalties)?;
        Ok(())
    }
}

impl Entity for Contract {
    type Id = ContractId;

    const KIND: EntityKind = EntityKind::Contract;

    fn id(&self) -> ContractId {
        self.id
    }
}
