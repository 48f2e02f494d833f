//! Output formatting for human and JSON modes
//!
//! This module provides relationship summaries that can be rendered either as
//! human-readable text or machine-parseable JSON. The reports copy what they
//! need out of the catalog, so they stay valid however the catalog grows
//! afterwards.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{AuthorId, MagazineId};

/// Output mode for the demo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of one author's side of the graph
#[derive(Debug, Serialize)]
pub struct AuthorReport {
    /// The author's name
    pub name: String,
    /// One line per article, in creation order
    pub articles: Vec<ArticleLine>,
    /// Distinct magazines the author has published in
    pub magazines: Vec<String>,
    /// Distinct categories across those magazines
    pub topic_areas: Vec<String>,
}

/// One article as seen from a report
#[derive(Debug, Serialize)]
pub struct ArticleLine {
    /// The article title
    pub title: String,
    /// Name of the magazine it was published in
    pub magazine: String,
}

/// Summary of one magazine's side of the graph
#[derive(Debug, Serialize)]
pub struct MagazineReport {
    /// The magazine's name
    pub name: String,
    /// The magazine's category
    pub category: String,
    /// Titles of every article published here, in article-list order
    pub article_titles: Vec<String>,
    /// Names of distinct authors with at least one article here
    pub contributors: Vec<String>,
    /// Names of authors with strictly more than 2 articles here
    pub contributing_authors: Vec<String>,
}

impl AuthorReport {
    /// Assemble a report for `author`, or `None` if the id is unknown
    #[must_use]
    pub fn collect(catalog: &Catalog, author: AuthorId) -> Option<Self> {
        let entity = catalog.author(author)?;
        let articles = entity
            .article_ids()
            .iter()
            .filter_map(|&id| catalog.article(id))
            .map(|article| ArticleLine {
                title: article.title().to_string(),
                magazine: catalog
                    .magazine(article.magazine())
                    .map_or_else(String::new, |m| m.name().to_string()),
            })
            .collect();
        let magazines = catalog
            .magazines_of(author)
            .into_iter()
            .filter_map(|id| catalog.magazine(id))
            .map(|m| m.name().to_string())
            .collect();
        let topic_areas =
            catalog.topic_areas(author).into_iter().map(str::to_string).collect();
        Some(Self { name: entity.name().to_string(), articles, magazines, topic_areas })
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Articles by {}:", self.name);
        for line in &self.articles {
            println!("  {} ({})", line.title, line.magazine);
        }
        println!("Magazines for {}:", self.name);
        for magazine in &self.magazines {
            println!("  {magazine}");
        }
        println!("Topic areas:");
        for topic in &self.topic_areas {
            println!("  {topic}");
        }
    }
}

impl MagazineReport {
    /// Assemble a report for `magazine`, or `None` if the id is unknown
    #[must_use]
    pub fn collect(catalog: &Catalog, magazine: MagazineId) -> Option<Self> {
        let entity = catalog.magazine(magazine)?;
        let author_names = |ids: Vec<AuthorId>| {
            ids.into_iter()
                .filter_map(|id| catalog.author(id))
                .map(|a| a.name().to_string())
                .collect()
        };
        Some(Self {
            name: entity.name().to_string(),
            category: entity.category().to_string(),
            article_titles: catalog
                .article_titles(magazine)
                .into_iter()
                .map(str::to_string)
                .collect(),
            contributors: author_names(catalog.contributors(magazine)),
            contributing_authors: author_names(catalog.contributing_authors(magazine)),
        })
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Articles in {} [{}]:", self.name, self.category);
        for title in &self.article_titles {
            println!("  {title}");
        }
        println!("Contributors to {}:", self.name);
        for name in &self.contributors {
            println!("  {name}");
        }
        if !self.contributing_authors.is_empty() {
            println!("Frequent contributors:");
            for name in &self.contributing_authors {
                println!("  {name}");
            }
        }
    }
}

fn render_json<T: Serialize>(report: &T) {
    println!("{}", serde_json::to_string_pretty(report).unwrap_or_default());
}
