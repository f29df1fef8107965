//! Content model structs for articles and their metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Frontmatter metadata from markdown files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,

    /// Publication date as written in the document (`YYYY-MM-DD` or RFC 3339)
    pub date: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// '/'-delimited category path (e.g. "Frontend/React")
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default = "default_published")]
    pub published: bool,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,
}

fn default_published() -> bool {
    true
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            description: None,
            tags: Vec::new(),
            category: None,
            author: None,
            published: true,
            featured: false,
            locale: None,
            slug: None,
        }
    }
}

/// A single article in the corpus
///
/// Immutable for the duration of one pipeline run; re-created from disk on
/// the next run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// URL slug, unique across the loaded corpus
    pub slug: String,

    /// Original frontmatter
    pub front_matter: FrontMatter,

    /// Publication date parsed from the frontmatter
    pub date: NaiveDate,

    /// Markdown body (without frontmatter)
    pub content: String,

    /// Plain-text summary derived from the body
    pub excerpt: String,

    /// Estimated minutes to read
    pub reading_time: u32,
}

impl Article {
    pub fn title(&self) -> &str {
        &self.front_matter.title
    }

    pub fn tags(&self) -> &[String] {
        &self.front_matter.tags
    }

    pub fn category(&self) -> Option<&str> {
        self.front_matter.category.as_deref()
    }

    pub fn is_published(&self) -> bool {
        self.front_matter.published
    }

    pub fn is_featured(&self) -> bool {
        self.front_matter.featured
    }

    /// Locale of this article, with articles that declare none belonging to
    /// the given default locale
    pub fn locale_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.front_matter.locale.as_deref().unwrap_or(default)
    }

    /// Projection without the body text
    pub fn metadata(&self) -> ArticleMetadata {
        ArticleMetadata {
            slug: self.slug.clone(),
            front_matter: self.front_matter.clone(),
            date: self.date,
            excerpt: self.excerpt.clone(),
            reading_time: self.reading_time,
        }
    }

    /// Short reference for per-tag/per-category article lists
    pub fn to_ref(&self) -> ArticleRef {
        ArticleRef {
            slug: self.slug.clone(),
            title: self.front_matter.title.clone(),
            date: self.date,
        }
    }
}

/// Projection of [`Article`] without `content`; used wherever full body text
/// is not needed (listing, search)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub slug: String,
    pub front_matter: FrontMatter,
    pub date: NaiveDate,
    pub excerpt: String,
    pub reading_time: u32,
}

impl ArticleMetadata {
    pub fn title(&self) -> &str {
        &self.front_matter.title
    }

    pub fn is_published(&self) -> bool {
        self.front_matter.published
    }
}

/// Ordered article list item carried by tag and category entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            slug: "rust-ownership".into(),
            front_matter: FrontMatter {
                title: "Rust Ownership".into(),
                date: "2025-01-15".into(),
                description: Some("Borrow checker notes".into()),
                tags: vec!["rust".into(), "memory".into()],
                category: Some("Systems/Rust".into()),
                ..FrontMatter::default()
            },
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            content: "Body text.".into(),
            excerpt: "Body text.".into(),
            reading_time: 1,
        }
    }

    #[test]
    fn test_frontmatter_defaults() {
        let fm = FrontMatter::default();
        assert!(fm.published);
        assert!(!fm.featured);
        assert!(fm.tags.is_empty());
        assert_eq!(fm.category, None);
    }

    #[test]
    fn test_metadata_projection_drops_content() {
        let article = sample_article();
        let metadata = article.metadata();
        assert_eq!(metadata.slug, article.slug);
        assert_eq!(metadata.title(), "Rust Ownership");
        assert_eq!(metadata.excerpt, article.excerpt);
        assert_eq!(metadata.reading_time, article.reading_time);
    }

    #[test]
    fn test_locale_fallback() {
        let mut article = sample_article();
        assert_eq!(article.locale_or("en"), "en");

        article.front_matter.locale = Some("ja".into());
        assert_eq!(article.locale_or("en"), "ja");
    }

    #[test]
    fn test_article_ref() {
        let article = sample_article();
        let r = article.to_ref();
        assert_eq!(r.slug, "rust-ownership");
        assert_eq!(r.title, "Rust Ownership");
        assert_eq!(r.date, article.date);
    }
}
