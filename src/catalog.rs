//! Catalog - the arena owning every entity and every operation on the graph
//!
//! The catalog stores authors, magazines, and articles in three append-only
//! arenas and hands out typed ids into them. Creating an article is the only
//! operation that touches more than one entity: it appends the new id to both
//! the author's and the magazine's article lists, eagerly and irreversibly.
//! Every aggregate query is a linear scan over these lists; there is no
//! separate index or cache.
//!
//! # Examples
//!
//! ```
//! use masthead::catalog::Catalog;
//!
//! let mut catalog = Catalog::new();
//! let joe = catalog.add_author("Joe").unwrap();
//! let daily = catalog.add_magazine("Info Daily", "Technology").unwrap();
//! catalog.add_article(joe, daily, "Tech is the Best").unwrap();
//!
//! assert_eq!(catalog.article_titles(daily), vec!["Tech is the Best"]);
//! assert_eq!(catalog.magazines_of(joe), vec![daily]);
//! assert_eq!(catalog.topic_areas(joe), vec!["Technology"]);
//! ```

use std::collections::{HashMap, HashSet};

use log::debug;
use thiserror::Error;

use crate::models::{
    Article, ArticleId, Author, AuthorId, Magazine, MagazineId, ValidationError,
};

/// Errors raised by catalog mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Entity construction input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Author id does not belong to this catalog
    #[error("unknown author id: {0}")]
    UnknownAuthor(AuthorId),

    /// Magazine id does not belong to this catalog
    #[error("unknown magazine id: {0}")]
    UnknownMagazine(MagazineId),

    /// Article id does not belong to this catalog
    #[error("unknown article id: {0}")]
    UnknownArticle(ArticleId),
}

/// Arena owning all authors, magazines, and articles
///
/// Mutations all go through the catalog, so it is the single writer of the
/// article lists. Queries take ids; a query given an id from another catalog
/// returns an empty result, while a mutation rejects it with an error.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Construction ===

    /// Register a new author
    ///
    /// Fails if the name is empty or pure whitespace.
    pub fn add_author(&mut self, name: impl Into<String>) -> Result<AuthorId, CatalogError> {
        let author = Author::new(name)?;
        let id = AuthorId(self.authors.len());
        debug!("registering {id}: {}", author.name());
        self.authors.push(author);
        Ok(id)
    }

    /// Register a new magazine
    ///
    /// Fails if the name is not 2 to 16 characters or the category is empty.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId, CatalogError> {
        let magazine = Magazine::new(name, category)?;
        let id = MagazineId(self.magazines.len());
        debug!("registering {id}: {}", magazine.name());
        self.magazines.push(magazine);
        Ok(id)
    }

    /// Create an article by `author` published in `magazine`
    ///
    /// On success the new article's id is appended to both the author's and
    /// the magazine's article lists. Both ids are checked first, so a failed
    /// call links nothing anywhere. The title carries no content constraint;
    /// an empty title is accepted.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, CatalogError> {
        if author.0 >= self.authors.len() {
            return Err(CatalogError::UnknownAuthor(author));
        }
        if magazine.0 >= self.magazines.len() {
            return Err(CatalogError::UnknownMagazine(magazine));
        }
        let id = ArticleId(self.articles.len());
        self.articles.push(Article::new(author, magazine, title));
        self.authors[author.0].record_article(id);
        self.magazines[magazine.0].record_article(id);
        debug!("registered {id} by {author} in {magazine}");
        Ok(id)
    }

    /// Point an existing article at a different magazine
    ///
    /// Only the article's own record is updated: the previous magazine's
    /// article list still names the article, and the new magazine's list does
    /// not gain it. Callers that need the lists to agree with the field must
    /// not use this operation. An id from another catalog is rejected.
    pub fn reassign_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), CatalogError> {
        if magazine.0 >= self.magazines.len() {
            return Err(CatalogError::UnknownMagazine(magazine));
        }
        let Some(entry) = self.articles.get_mut(article.0) else {
            return Err(CatalogError::UnknownArticle(article));
        };
        debug!("reassigning {article} from {} to {magazine}", entry.magazine());
        entry.set_magazine(magazine);
        Ok(())
    }

    // === Entity access ===

    /// Look up an author by id
    #[must_use]
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id.0)
    }

    /// Look up a magazine by id
    #[must_use]
    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(id.0)
    }

    /// Look up an article by id
    #[must_use]
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id.0)
    }

    /// All authors with their ids, in registration order
    pub fn authors(&self) -> impl Iterator<Item = (AuthorId, &Author)> {
        self.authors.iter().enumerate().map(|(i, a)| (AuthorId(i), a))
    }

    /// All magazines with their ids, in registration order
    pub fn magazines(&self) -> impl Iterator<Item = (MagazineId, &Magazine)> {
        self.magazines.iter().enumerate().map(|(i, m)| (MagazineId(i), m))
    }

    /// All articles with their ids, in creation order
    pub fn articles(&self) -> impl Iterator<Item = (ArticleId, &Article)> {
        self.articles.iter().enumerate().map(|(i, a)| (ArticleId(i), a))
    }

    /// Number of registered authors
    #[must_use]
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Number of registered magazines
    #[must_use]
    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    /// Number of created articles
    #[must_use]
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Whether the catalog holds no entities at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.magazines.is_empty() && self.articles.is_empty()
    }

    // === Author queries ===

    /// Ids of every article written by `author`, in creation order
    #[must_use]
    pub fn articles_by(&self, author: AuthorId) -> Vec<ArticleId> {
        self.author(author).map_or_else(Vec::new, |a| a.article_ids().to_vec())
    }

    /// Distinct magazines `author` has published in, first-appearance order
    #[must_use]
    pub fn magazines_of(&self, author: AuthorId) -> Vec<MagazineId> {
        let Some(author) = self.author(author) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for article in self.resolve(author.article_ids()) {
            if seen.insert(article.magazine()) {
                result.push(article.magazine());
            }
        }
        result
    }

    /// Distinct categories across the magazines `author` has published in,
    /// first-appearance order
    #[must_use]
    pub fn topic_areas(&self, author: AuthorId) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for magazine in self.magazines_of(author).into_iter().filter_map(|id| self.magazine(id)) {
            if seen.insert(magazine.category()) {
                result.push(magazine.category());
            }
        }
        result
    }

    // === Magazine queries ===

    /// Ids of every article published in `magazine`, in creation order
    #[must_use]
    pub fn articles_in(&self, magazine: MagazineId) -> Vec<ArticleId> {
        self.magazine(magazine).map_or_else(Vec::new, |m| m.article_ids().to_vec())
    }

    /// Titles of every article published in `magazine`, in article-list order
    #[must_use]
    pub fn article_titles(&self, magazine: MagazineId) -> Vec<&str> {
        let Some(magazine) = self.magazine(magazine) else {
            return Vec::new();
        };
        self.resolve(magazine.article_ids()).map(Article::title).collect()
    }

    /// Distinct authors with at least one article in `magazine`,
    /// first-appearance order
    #[must_use]
    pub fn contributors(&self, magazine: MagazineId) -> Vec<AuthorId> {
        let Some(magazine) = self.magazine(magazine) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for article in self.resolve(magazine.article_ids()) {
            if seen.insert(article.author()) {
                result.push(article.author());
            }
        }
        result
    }

    /// Authors with strictly more than 2 articles in `magazine`, ordered by
    /// first appearance among qualifying authors
    #[must_use]
    pub fn contributing_authors(&self, magazine: MagazineId) -> Vec<AuthorId> {
        let Some(magazine) = self.magazine(magazine) else {
            return Vec::new();
        };
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.resolve(magazine.article_ids()) {
            *counts.entry(article.author()).or_default() += 1;
        }
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for article in self.resolve(magazine.article_ids()) {
            let author = article.author();
            if counts.get(&author).is_some_and(|&n| n > 2) && seen.insert(author) {
                result.push(author);
            }
        }
        result
    }

    /// Resolve a slice of article ids against the arena
    fn resolve<'a>(&'a self, ids: &'a [ArticleId]) -> impl Iterator<Item = &'a Article> {
        ids.iter().filter_map(|&id| self.articles.get(id.0))
    }
}
