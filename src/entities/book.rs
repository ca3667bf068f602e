// 📚 Book Entity - Stable identity + validated title

use super::Entity;
use crate::error::{EntityKind, Field, ValidationError};
use crate::value::expect_string;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

entity_id! {
    /// Stable identity of a [`Book`]
    BookId
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    created_at: DateTime<Utc>,
}

impl Book {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self::with_id(BookId::new(), title)
    }

    pub(crate) fn with_id(id: BookId, title: impl Into<String>) -> Self {
        Book {
            id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }

    pub(crate) fn from_value(id: BookId, title: &Value) -> Result<Self, ValidationError> {
        let title = expect_string(Field::BookTitle, title)?;
        Ok(Self::with_id(id, title))
    }

    /// Keep the registration time recorded elsewhere (document import)
    pub(crate) fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub(crate) fn set_title_from_value(&mut self, title: &Value) -> Result<(), ValidationError> {
        self.title = expect_string(Field::BookTitle, title)?;
        Ok(())
    }
}

impl Entity for Book {
    type Id = BookId;

    const KIND: EntityKind = EntityKind::Book;

    fn id(&self) -> BookId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_creation() {
        let book = Book::new("X");
        assert_eq!(book.title(), "X");
        assert_ne!(book.id(), Book::new("X").id());
    }

    #[test]
    fn test_book_title_validation() {
        let mut book = Book::new("X");

        let err = book.set_title_from_value(&json!(["X"])).unwrap_err();
        assert_eq!(err.field(), Field::BookTitle);
        assert_eq!(book.title(), "X");

        book.set_title("Y");
        assert_eq!(book.title(), "Y");

        assert!(Book::from_value(BookId::new(), &json!(false)).is_err());
    }
}
