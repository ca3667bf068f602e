// 📖 Catalog - Authors, Books and the Contracts that join them
//
// Owns one registry per entity kind. Relationships are never stored on
// Author or Book; they are derived on demand by scanning the contract
// registry. Every operation that takes a reference to another entity
// checks the reference against this catalog's registries.

use crate::entities::{
    Author, AuthorId, AuthorRegistry, Book, BookId, BookRegistry, Contract, ContractId,
    ContractRegistry,
};
use crate::error::{CatalogResult, Field, ValidationError};
use crate::value::{describe, expect_integer, expect_string};
use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) authors: AuthorRegistry,
    pub(crate) books: BookRegistry,
    pub(crate) contracts: ContractRegistry,
}

impl Catalog {
    /// Create new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authors(&self) -> &AuthorRegistry {
        &self.authors
    }

    pub fn books(&self) -> &BookRegistry {
        &self.books
    }

    pub fn contracts(&self) -> &ContractRegistry {
        &self.contracts
    }

    // ========================================================================
    // AUTHORS
    // ========================================================================

    pub fn create_author(&mut self, name: impl Into<String>) -> AuthorId {
        let id = self.authors.append(Author::new(name));
        debug!("event=author_registered id={} total={}", id, self.authors.count());
        id
    }

    /// Create an author from an untyped name. Nothing is registered on failure.
    pub fn create_author_from_value(&mut self, name: &Value) -> Result<AuthorId, ValidationError> {
        let author = Author::from_value(AuthorId::new(), name)?;
        let id = self.authors.append(author);
        debug!("event=author_registered id={} total={}", id, self.authors.count());
        Ok(id)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id)
    }

    pub fn rename_author(&mut self, id: AuthorId, name: impl Into<String>) -> CatalogResult<()> {
        self.authors.require_mut(id)?.set_name(name);
        debug!("event=author_renamed id={}", id);
        Ok(())
    }

    pub fn set_author_name_from_value(&mut self, id: AuthorId, name: &Value) -> CatalogResult<()> {
        self.authors.require_mut(id)?.set_name_from_value(name)?;
        debug!("event=author_renamed id={}", id);
        Ok(())
    }

    /// Contracts signed by this author, in registry order
    pub fn author_contracts(&self, id: AuthorId) -> Vec<&Contract> {
        self.contracts.by_author(id)
    }

    /// Distinct books this author has contracts for, in order of first appearance
    pub fn author_books(&self, id: AuthorId) -> Vec<&Book> {
        let mut seen = HashSet::new();
        self.contracts
            .by_author(id)
            .into_iter()
            .filter(|c| seen.insert(c.book()))
            .filter_map(|c| self.books.get(c.book()))
            .collect()
    }

    /// Sign a new contract between `author` and `book`
    pub fn sign_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Result<ContractId, ValidationError> {
        self.create_contract(author, book, date, royalties)
    }

    /// Sum of royalties over this author's contracts; 0 when there are none
    pub fn total_royalties(&self, id: AuthorId) -> i128 {
        self.contracts.total_royalties(id)
    }

    // ========================================================================
    // BOOKS
    // ========================================================================

    pub fn create_book(&mut self, title: impl Into<String>) -> BookId {
        let id = self.books.append(Book::new(title));
        debug!("event=book_registered id={} total={}", id, self.books.count());
        id
    }

    pub fn create_book_from_value(&mut self, title: &Value) -> Result<BookId, ValidationError> {
        let book = Book::from_value(BookId::new(), title)?;
        let id = self.books.append(book);
        debug!("event=book_registered id={} total={}", id, self.books.count());
        Ok(id)
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn retitle_book(&mut self, id: BookId, title: impl Into<String>) -> CatalogResult<()> {
        self.books.require_mut(id)?.set_title(title);
        debug!("event=book_retitled id={}", id);
        Ok(())
    }

    pub fn set_book_title_from_value(&mut self, id: BookId, title: &Value) -> CatalogResult<()> {
        self.books.require_mut(id)?.set_title_from_value(title)?;
        debug!("event=book_retitled id={}", id);
        Ok(())
    }

    pub fn book_contracts(&self, id: BookId) -> Vec<&Contract> {
        self.contracts.by_book(id)
    }

    /// Distinct authors with contracts for this book, in order of first appearance
    pub fn book_authors(&self, id: BookId) -> Vec<&Author> {
        let mut seen = HashSet::new();
        self.contracts
            .by_book(id)
            .into_iter()
            .filter(|c| seen.insert(c.author()))
            .filter_map(|c| self.authors.get(c.author()))
            .collect()
    }

    // ========================================================================
    // CONTRACTS
    // ========================================================================

    /// Validates author, then book; the first bad reference is reported and
    /// nothing is registered.
    pub fn create_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Result<ContractId, ValidationError> {
        check_author(&self.authors, author)?;
        check_book(&self.books, book)?;

        let contract = Contract::new(ContractId::new(), author, book, date, royalties);
        Ok(self.register_contract(contract))
    }

    /// Untyped construction. Fields are checked in order author, book, date,
    /// royalties; `author` and `book` must be id strings of registered entities.
    pub fn create_contract_from_values(
        &mut self,
        author: &Value,
        book: &Value,
        date: &Value,
        royalties: &Value,
    ) -> Result<ContractId, ValidationError> {
        self.create_contract_from_values_with_id(
            ContractId::new(),
            author,
            book,
            date,
            royalties,
            None,
        )
    }

    /// `created_at` of `None` stamps the contract with the current time
    pub(crate) fn create_contract_from_values_with_id(
        &mut self,
        id: ContractId,
        author: &Value,
        book: &Value,
        date: &Value,
        royalties: &Value,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<ContractId, ValidationError> {
        let author = resolve_author(&self.authors, author)?;
        let book = resolve_book(&self.books, book)?;
        let date = expect_string(Field::ContractDate, date)?;
        let royalties = expect_integer(Field::ContractRoyalties, royalties)?;

        let mut contract = Contract::new(id, author, book, date, royalties);
        if let Some(at) = created_at {
            contract = contract.with_created_at(at);
        }
        Ok(self.register_contract(contract))
    }

    fn register_contract(&mut self, contract: Contract) -> ContractId {
        let (author, book) = (contract.author(), contract.book());
        let id = self.contracts.append(contract);
        debug!(
            "event=contract_signed id={} author={} book={} total={}",
            id,
            author,
            book,
            self.contracts.count()
        );
        id
    }

    pub fn contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.get(id)
    }

    pub fn set_contract_author(&mut self, id: ContractId, author: AuthorId) -> CatalogResult<()> {
        let contract = self.contracts.require_mut(id)?;
        check_author(&self.authors, author)?;
        contract.set_author(author);
        debug!("event=contract_updated id={} field=author", id);
        Ok(())
    }

    pub fn set_contract_author_from_value(
        &mut self,
        id: ContractId,
        author: &Value,
    ) -> CatalogResult<()> {
        let contract = self.contracts.require_mut(id)?;
        contract.set_author(resolve_author(&self.authors, author)?);
        debug!("event=contract_updated id={} field=author", id);
        Ok(())
    }

    pub fn set_contract_book(&mut self, id: ContractId, book: BookId) -> CatalogResult<()> {
        let contract = self.contracts.require_mut(id)?;
        check_book(&self.books, book)?;
        contract.set_book(book);
        debug!("event=contract_updated id={} field=book", id);
        Ok(())
    }

    pub fn set_contract_book_from_value(&mut self, id: ContractId, book: &Value) -> CatalogResult<()> {
        let contract = self.contracts.require_mut(id)?;
        contract.set_book(resolve_book(&self.books, book)?);
        debug!("event=contract_updated id={} field=book", id);
        Ok(())
    }

    pub fn set_contract_date(&mut self, id: ContractId, date: impl Into<String>) -> CatalogResult<()> {
        self.contracts.require_mut(id)?.set_date(date);
        debug!("event=contract_updated id={} field=date", id);
        Ok(())
    }

    pub fn set_contract_date_from_value(&mut self, id: ContractId, date: &Value) -> CatalogResult<()> {
        self.contracts.require_mut(id)?.set_date_from_value(date)?;
        debug!("event=contract_updated id={} field=date", id);
        Ok(())
    }

    pub fn set_contract_royalties(&mut self, id: ContractId, royalties: i64) -> CatalogResult<()> {
        self.contracts.require_mut(id)?.set_royalties(royalties);
        debug!("event=contract_updated id={} field=royalties", id);
        Ok(())
    }

    pub fn set_contract_royalties_from_value(
        &mut self,
        id: ContractId,
        royalties: &Value,
    ) -> CatalogResult<()> {
        self.contracts
            .require_mut(id)?
            .set_royalties_from_value(royalties)?;
        debug!("event=contract_updated id={} field=royalties", id);
        Ok(())
    }

    /// Every contract dated exactly `date`, in the order they were signed
    pub fn contracts_by_date(&self, date: &str) -> Vec<&Contract> {
        self.contracts.by_date(date)
    }
}

// ============================================================================
// REFERENCE CHECKS
// ============================================================================

fn check_author(authors: &AuthorRegistry, id: AuthorId) -> Result<(), ValidationError> {
    if authors.contains(id) {
        Ok(())
    } else {
        Err(ValidationError::NotAnAuthor {
            reference: id.to_string(),
        })
    }
}

fn check_book(books: &BookRegistry, id: BookId) -> Result<(), ValidationError> {
    if books.contains(id) {
        Ok(())
    } else {
        Err(ValidationError::NotABook {
            reference: id.to_string(),
        })
    }
}

/// The value must be the id string of an Author in `authors`
fn resolve_author(authors: &AuthorRegistry, value: &Value) -> Result<AuthorId, ValidationError> {
    value
        .as_str()
        .and_then(AuthorId::parse)
        .filter(|id| authors.contains(*id))
        .ok_or_else(|| ValidationError::NotAnAuthor {
            reference: describe(value),
        })
}

fn resolve_book(books: &BookRegistry, value: &Value) -> Result<BookId, ValidationError> {
    value
        .as_str()
        .and_then(BookId::parse)
        .filter(|id| books.contains(*id))
        .ok_or_else(|| ValidationError::NotABook {
            reference: describe(value),
        })
}

// ============================================================================
// TESTS
// ============================================================================
