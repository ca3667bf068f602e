// 📦 Catalog documents - JSON import/export
//
// Document shape:
//   { "authors":   [{"id"?: uuid, "name": ...}],
//     "books":     [{"id"?: uuid, "title": ...}],
//     "contracts": [{"id"?: uuid, "author": uuid, "book": uuid, "date": ..., "royalties": ...}] }
//
// Every record may also carry "created_at" (RFC 3339); exported documents
// always do, and importing them keeps those timestamps.
//
// Records go through the same validation as the value API. Import is
// append-only: records registered before a failing record stay registered.

use crate::catalog::Catalog;
use crate::entities::{Author, AuthorId, Book, BookId, Contract, ContractId, Entity};
use crate::error::{CatalogError, CatalogResult};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Serializable view of a whole catalog, in registry order
#[derive(Debug, Serialize)]
pub struct CatalogDocument<'a> {
    pub authors: &'a [Author],
    pub books: &'a [Book],
    pub contracts: &'a [Contract],
}

/// How many records an import registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub authors: usize,
    pub books: usize,
    pub contracts: usize,
}

impl Catalog {
    pub fn export(&self) -> CatalogDocument<'_> {
        CatalogDocument {
            authors: self.authors.all(),
            books: self.books.all(),
            contracts: self.contracts.all(),
        }
    }

    pub fn export_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&self.export())?)
    }

    pub fn import_file(&mut self, path: impl AsRef<Path>) -> CatalogResult<ImportSummary> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.import_str(&text)
    }

    pub fn import_str(&mut self, text: &str) -> CatalogResult<ImportSummary> {
        let document: Value = serde_json::from_str(text)?;
        self.import_value(&document)
    }

    /// Import authors, then books, then contracts. Stops at the first bad record.
    pub fn import_value(&mut self, document: &Value) -> CatalogResult<ImportSummary> {
        let root = document
            .as_object()
            .ok_or_else(|| CatalogError::Document("top-level value must be an object".into()))?;

        let mut summary = ImportSummary::default();

        for record in section(root, "authors")? {
            let record = as_record(record, "authors")?;
            let id = record_id(record, "authors", AuthorId::parse)?;
            let mut author = Author::from_value(id, field(record, "name"))?;
            if let Some(at) = record_created_at(record, "authors")? {
                author = author.with_created_at(at);
            }
            self.authors.register(author)?;
            summary.authors += 1;
        }

        for record in section(root, "books")? {
            let record = as_record(record, "books")?;
            let id = record_id(record, "books", BookId::parse)?;
            let mut book = Book::from_value(id, field(record, "title"))?;
            if let Some(at) = record_created_at(record, "books")? {
                book = book.with_created_at(at);
            }
            self.books.register(book)?;
            summary.books += 1;
        }

        for record in section(root, "contracts")? {
            let record = as_record(record, "contracts")?;
            let id = record_id(record, "contracts", ContractId::parse)?;
            let created_at = record_created_at(record, "contracts")?;
            if self.contracts.contains(id) {
                return Err(CatalogError::Duplicate {
                    kind: Contract::KIND,
                    id: id.to_string(),
                });
            }
            self.create_contract_from_values_with_id(
                id,
                field(record, "author"),
                field(record, "book"),
                field(record, "date"),
                field(record, "royalties"),
                created_at,
            )?;
            summary.contracts += 1;
        }

        info!(
            "event=catalog_imported status=ok authors={} books={} contracts={}",
            summary.authors, summary.books, summary.contracts
        );
        Ok(summary)
    }
}

/// A missing section is an empty section
fn section<'a>(root: &'a Map<String, Value>, name: &str) -> CatalogResult<&'a [Value]> {
    match root.get(name) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(CatalogError::Document(format!("`{name}` must be an array"))),
    }
}

fn as_record<'a>(value: &'a Value, section: &str) -> CatalogResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| CatalogError::Document(format!("every `{section}` entry must be an object")))
}

static NULL: Value = Value::Null;

/// Absent fields read as `null`, which fails the field's own validation
fn field<'a>(record: &'a Map<String, Value>, name: &str) -> &'a Value {
    record.get(name).unwrap_or(&NULL)
}

/// Use the record's `id` when given, otherwise mint a fresh one
fn record_id<I: Default>(
    record: &Map<String, Value>,
    section: &str,
    parse: impl Fn(&str) -> Option<I>,
) -> CatalogResult<I> {
    match record.get("id") {
        None | Some(Value::Null) => Ok(I::default()),
        Some(Value::String(text)) => parse(text.as_str()).ok_or_else(|| {
            CatalogError::Document(format!("`{section}` id `{text}` is not a UUID"))
        }),
        Some(other) => Err(CatalogError::Document(format!(
            "`{section}` id must be a string, got {other}"
        ))),
    }
}

/// Optional RFC 3339 registration time; absent means "now"
fn record_created_at(
    record: &Map<String, Value>,
    section: &str,
) -> CatalogResult<Option<DateTime<Utc>>> {
    match record.get("created_at") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => DateTime::parse_from_rfc3339(text)
            .map(|at| Some(at.with_timezone(&Utc)))
            .map_err(|err| {
                CatalogError::Document(format!(
                    "`{section}` created_at `{text}` is not an RFC 3339 timestamp: {err}"
                ))
            }),
        Some(other) => Err(CatalogError::Document(format!(
            "`{section}` created_at must be a string, got {other}"
        ))),
    }
}

// ============================================================================
// TESTS
// ============================================================================
