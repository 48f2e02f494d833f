//! Typed ids for catalog entities
//!
//! Each id is an index into the owning catalog's arena for that entity kind.
//! The model has no deletion operation, so an id issued by a catalog stays
//! valid for that catalog's whole lifetime. Ids from different catalogs are
//! not interchangeable.

use serde::{Deserialize, Serialize};

/// Identifier of an [`crate::models::Author`] in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub(crate) usize);

/// Identifier of a [`crate::models::Magazine`] in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MagazineId(pub(crate) usize);

/// Identifier of an [`crate::models::Article`] in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub(crate) usize);

impl AuthorId {
    /// The underlying arena index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl MagazineId {
    /// The underlying arena index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl ArticleId {
    /// The underlying arena index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "author-{}", self.0)
    }
}

impl std::fmt::Display for MagazineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "magazine-{}", self.0)
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "article-{}", self.0)
    }
}
