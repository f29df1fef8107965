//! Article discovery and loading from the content directory.

use crate::config::Config;
use crate::excerpt::{excerpt, reading_time};
use crate::frontmatter::parse_frontmatter;
use crate::models::Article;
use crate::slug::{slugify, unique_candidate};
use chrono::{DateTime, NaiveDate};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Loads articles from a directory of markdown documents
///
/// Discovery is recursive and deterministic: file paths are sorted before
/// parsing, so collision suffixes and date-tie ordering never depend on
/// filesystem iteration order. Documents that fail to parse are skipped
/// with a warning rather than aborting the load, and a missing content
/// root degrades to an empty collection.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
    excerpt_length: usize,
    words_per_minute: u32,
}

impl ContentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excerpt_length: 150,
            words_per_minute: 200,
        }
    }

    /// Build a loader rooted at the config's resolved content directory
    pub fn from_config(config: &Config) -> Self {
        Self {
            root: config.content_dir(),
            excerpt_length: config.excerpt_length,
            words_per_minute: config.words_per_minute,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every article under the content root, newest first
    ///
    /// Slugs resolve from explicit frontmatter, then the title, then the
    /// file stem, deduplicated with `-1`, `-2` suffixes in discovery
    /// order. Assignment happens before the published filter, so a slug
    /// never changes when drafts are toggled on or off.
    pub fn load_all(&self, include_unpublished: bool) -> Vec<Article> {
        let mut articles = Vec::new();
        let mut seen_slugs: HashSet<String> = HashSet::new();

        for path in self.discover() {
            let Some(article) = self.load_file(&path, &seen_slugs) else {
                continue;
            };
            seen_slugs.insert(article.slug.clone());
            articles.push(article);
        }

        if !include_unpublished {
            articles.retain(Article::is_published);
        }

        articles.sort_by(|a, b| b.date.cmp(&a.date));
        debug!(
            "Loaded {} articles from {}",
            articles.len(),
            self.root.display()
        );
        articles
    }

    /// Load a single published article by slug
    ///
    /// Slugs depend on the whole corpus because of collision suffixes, so
    /// this performs a full load and selects from it.
    pub fn load_by_slug(&self, slug: &str) -> Option<Article> {
        self.load_all(false).into_iter().find(|a| a.slug == slug)
    }

    fn discover(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            warn!("Content root {} is not a directory", self.root.display());
            return Vec::new();
        }

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            if entry.file_type().is_file()
                && entry.path().extension().and_then(|e| e.to_str()) == Some("md")
            {
                paths.push(entry.into_path());
            }
        }
        paths.sort();
        paths
    }

    fn load_file(&self, path: &Path, seen_slugs: &HashSet<String>) -> Option<Article> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                return None;
            }
        };

        let (front_matter, body) = match parse_frontmatter(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                return None;
            }
        };

        let date = match parse_date(&front_matter.date) {
            Some(date) => date,
            None => {
                warn!(
                    "Skipping {}: invalid date {:?}",
                    path.display(),
                    front_matter.date
                );
                return None;
            }
        };

        let base = resolve_slug_base(front_matter.slug.as_deref(), &front_matter.title, path);
        if base.is_empty() {
            warn!("Skipping {}: no usable slug source", path.display());
            return None;
        }
        let slug = unique_candidate(&base, seen_slugs);
        if slug != base && front_matter.slug.is_some() {
            warn!(
                "Explicit slug {base:?} in {} collides, using {slug:?}",
                path.display()
            );
        }

        debug!("Loaded {} as {slug}", path.display());
        Some(Article {
            slug,
            date,
            excerpt: excerpt(&body, self.excerpt_length),
            reading_time: reading_time(&body, self.words_per_minute),
            content: body,
            front_matter,
        })
    }
}

/// Articles belonging to `locale`, preserving input order
///
/// Articles without an explicit locale belong to the default locale.
pub fn filter_locale<'a>(
    articles: &'a [Article],
    locale: &str,
    default_locale: &str,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.locale_or(default_locale) == locale)
        .collect()
}

/// Published articles marked featured, preserving input order
pub fn featured(articles: &[Article]) -> Vec<&Article> {
    articles
        .iter()
        .filter(|a| a.is_published() && a.is_featured())
        .collect()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

fn resolve_slug_base(explicit: Option<&str>, title: &str, path: &Path) -> String {
    if let Some(explicit) = explicit {
        let s = slugify(explicit);
        if !s.is_empty() {
            return s;
        }
    }

    let s = slugify(title);
    if !s.is_empty() {
        return s;
    }

    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(slugify)
        .unwrap_or_default()
}
