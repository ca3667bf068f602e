// 🗂️ Append-only entity registry
//
// Stores every entity ever registered, in insertion order, never deletes.
// An id index gives direct lookup; relationship queries stay linear scans
// over insertion order.

use super::{Author, AuthorId, Book, BookId, Contract, Entity};
use crate::error::{CatalogError, CatalogResult};
use std::collections::HashMap;

pub type AuthorRegistry = Registry<Author>;
pub type BookRegistry = Registry<Book>;
pub type ContractRegistry = Registry<Contract>;

#[derive(Debug, Clone)]
pub struct Registry<E: Entity> {
    /// ALL entities (append-only, never delete)
    entries: Vec<E>,

    /// id -> position in `entries`
    index: HashMap<E::Id, usize>,
}

impl<E: Entity> Registry<E> {
    /// Create new empty registry
    pub fn new() -> Self {
        Registry {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register an entity (append-only). Rejects an id already present.
    pub(crate) fn register(&mut self, entity: E) -> CatalogResult<E::Id> {
        let id = entity.id();
        if self.index.contains_key(&id) {
            return Err(CatalogError::Duplicate { kind: E::KIND, id: id.to_string() });
        }

        Ok(self.append(entity))
    }

    /// Append an entity whose id was freshly generated
    pub(crate) fn append(&mut self, entity: E) -> E::Id {
        let id = entity.id();
        self.index.insert(id, self.entries.len());
        self.entries.push(entity);
        id
    }

    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.index.get(&id).map(|&pos| &self.entries[pos])
    }

    pub(crate) fn get_mut(&mut self, id: E::Id) -> Option<&mut E> {
        match self.index.get(&id) {
            Some(&pos) => self.entries.get_mut(pos),
            None => None,
        }
    }

    /// Like [`Registry::get_mut`] but unknown ids are an error
    pub(crate) fn require_mut(&mut self, id: E::Id) -> CatalogResult<&mut E> {
        self.get_mut(id)
            .ok_or_else(|| CatalogError::not_found(E::KIND, id))
    }

    pub fn contains(&self, id: E::Id) -> bool {
        self.index.contains_key(&id)
    }

    /// Every registered entity, in insertion order
    pub fn all(&self) -> &[E] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Entity> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E: Entity> IntoIterator for &'a Registry<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// ENTITY-SPECIFIC QUERIES
// ============================================================================

impl Registry<Contract> {
    /// Contracts signed by this author, in registry order
    pub fn by_author(&self, author: AuthorId) -> Vec<&Contract> {
        self.entries.iter().filter(|c| c.author() == author).collect()
    }

    /// Contracts for this book, in registry order
    pub fn by_book(&self, book: BookId) -> Vec<&Contract> {
        self.entries.iter().filter(|c| c.book() == book).collect()
    }

    /// Contracts whose date equals `date` exactly, in registry order
    pub fn by_date(&self, date: &str) -> Vec<&Contract> {
        self.entries.iter().filter(|c| c.date() == date).collect()
    }

    /// Sum of royalties over this author's contracts (0 when none).
    /// Widened to i128 so any number of i64 royalties sums without overflow.
    pub fn total_royalties(&self, author: AuthorId) -> i128 {
        self.by_author(author)
            .iter()
            .map(|c| i128::from(c.royalties()))
            .sum()
    }
}

// ============================================================================
// TESTS
// ============================================================================
