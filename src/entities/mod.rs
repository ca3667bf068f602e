// Entity Models
//
// Each entity has:
// - Stable identity (UUID) assigned at registration, compared by value of the id
// - Validated, mutable fields
// - An append-only registry that keeps insertion order

use crate::error::EntityKind;
use std::fmt;
use std::hash::Hash;

/// Declares a UUID-backed identity newtype
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Fresh random identity
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }

            /// Parse the hyphenated text form; `None` if it is not a UUID
            pub fn parse(text: &str) -> Option<Self> {
                ::uuid::Uuid::parse_str(text).ok().map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub mod author;
pub mod book;
pub mod contract;
pub mod registry;

pub use author::{Author, AuthorId};
pub use book::{Book, BookId};
pub use contract::{Contract, ContractId};
pub use registry::{AuthorRegistry, BookRegistry, ContractRegistry, Registry};

/// Anything that can live in a [`Registry`]
pub trait Entity {
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    const KIND: EntityKind;

    fn id(&self) -> Self::Id;
}
