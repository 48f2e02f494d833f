//! Data models for masthead
//!
//! Core abstractions:
//! - Author: a named writer, keeps the list of articles they wrote
//! - Magazine: a named, categorized publication, keeps the list of articles it published
//! - Article: the join record binding one author to one magazine under a title
//!
//! Entities reference each other through the typed ids in [`ids`]; the
//! [`crate::catalog::Catalog`] arena owns the entities themselves.

pub mod article;
pub mod author;
pub mod ids;
pub mod magazine;

pub use article::Article;
pub use author::Author;
pub use ids::{ArticleId, AuthorId, MagazineId};
pub use magazine::Magazine;

use thiserror::Error;

/// Errors raised when constructing an entity from invalid input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Author name was empty or pure whitespace
    #[error("author name must be a non-empty string")]
    EmptyAuthorName,

    /// Magazine name length was outside the allowed range
    #[error(
        "magazine name must be {min} to {max} characters, got {got}",
        min = magazine::NAME_MIN_CHARS,
        max = magazine::NAME_MAX_CHARS
    )]
    MagazineNameLength {
        /// Length of the rejected name, in characters
        got: usize,
    },

    /// Magazine category was empty or pure whitespace
    #[error("magazine category must be a non-empty string")]
    EmptyCategory,
}
