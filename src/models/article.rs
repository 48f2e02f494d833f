//! Article model
//!
//! An article is the sole edge type of the relationship graph: it binds
//! exactly one author to exactly one magazine under a title. Authors and
//! magazines never reference each other directly, only through the set of
//! articles that mention both.

use serde::{Deserialize, Serialize};

use super::ids::{AuthorId, MagazineId};

/// A published article, linking one author and one magazine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// The author who wrote this article, fixed at construction
    author: AuthorId,

    /// The magazine this article was published in; reassignable only
    /// through [`crate::catalog::Catalog::reassign_magazine`]
    magazine: MagazineId,

    /// The article title, immutable after construction
    title: String,
}

impl Article {
    pub(crate) fn new(author: AuthorId, magazine: MagazineId, title: impl Into<String>) -> Self {
        Self { author, magazine, title: title.into() }
    }

    /// Id of the author who wrote this article
    #[must_use]
    pub const fn author(&self) -> AuthorId {
        self.author
    }

    /// Id of the magazine this article was published in
    #[must_use]
    pub const fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// The article title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
