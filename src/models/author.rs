//! Author model
//!
//! An author is a named writer. The article list records every article the
//! author has written, in creation order; it only ever grows, since the model
//! has no deletion operation.

use serde::{Deserialize, Serialize};

use super::ids::ArticleId;
use super::ValidationError;

/// A named writer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Display name, non-empty after trimming
    name: String,

    /// Articles written by this author, in creation order
    #[serde(default)]
    articles: Vec<ArticleId>,
}

impl Author {
    /// Create a new author with the given name
    ///
    /// The name must contain at least one non-whitespace character; it is
    /// stored exactly as given, untrimmed.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self { name, articles: Vec::new() })
    }

    /// The author's name, exactly as given at construction
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of every article this author has written, in creation order
    #[must_use]
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Append an article id; called by the catalog when an article is created
    pub(crate) fn record_article(&mut self, id: ArticleId) {
        self.articles.push(id);
    }
}
