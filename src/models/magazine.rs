//! Magazine model
//!
//! A magazine is a categorized publication. Its article list records every
//! article published here, in creation order, and only ever grows.

use serde::{Deserialize, Serialize};

use super::ids::ArticleId;
use super::ValidationError;

/// Minimum magazine name length, in characters
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum magazine name length, in characters
pub const NAME_MAX_CHARS: usize = 16;

/// A categorized publication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magazine {
    /// Display name, 2 to 16 characters
    name: String,

    /// Topic category, non-empty after trimming
    category: String,

    /// Articles published in this magazine, in creation order
    #[serde(default)]
    articles: Vec<ArticleId>,
}

impl Magazine {
    /// Create a new magazine with the given name and category
    ///
    /// The name must be [`NAME_MIN_CHARS`] to [`NAME_MAX_CHARS`] characters
    /// inclusive; the category must contain at least one non-whitespace
    /// character.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let chars = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
            return Err(ValidationError::MagazineNameLength { got: chars });
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(Self { name, category, articles: Vec::new() })
    }

    /// The magazine's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The magazine's topic category
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Ids of every article published here, in creation order
    #[must_use]
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Append an article id; called by the catalog when an article is created
    pub(crate) fn record_article(&mut self, id: ArticleId) {
        self.articles.push(id);
    }
}
