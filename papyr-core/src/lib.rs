//! Content indexing and retrieval engine for a markdown blog.
//!
//! A directory of markdown documents with YAML frontmatter is turned into
//! queryable, ranked collections: a date-sorted article list, tag and
//! category aggregations with hierarchy and cloud views, and a weighted
//! fuzzy search index with highlightable matches. Everything is derived
//! fresh from the source files on each load; there is no persisted index.
//!
//! ```no_run
//! use papyr_core::{ContentLoader, SearchIndex, Taxonomy};
//!
//! let articles = ContentLoader::new("content").load_all(false);
//! let taxonomy = Taxonomy::new(&articles);
//! let popular_tags = taxonomy.tags_with_count();
//!
//! let index = SearchIndex::from_articles(&articles);
//! let hits = index.search("rust lifetimes", Some(10));
//! ```

pub mod cache;
pub mod config;
pub mod excerpt;
pub mod frontmatter;
pub mod loader;
pub mod models;
pub mod search;
pub mod slug;
pub mod taxonomy;

pub use cache::RefreshCache;
pub use config::{Config, ConfigError, PathsConfig, SiteConfig};
pub use excerpt::{excerpt, plain_text, reading_time};
pub use frontmatter::{parse_frontmatter, FrontmatterError};
pub use loader::{featured, filter_locale, ContentLoader};
pub use models::{Article, ArticleMetadata, ArticleRef, FrontMatter};
pub use search::{
    format_result_description, format_result_title, highlight, FieldMatch, SearchField,
    SearchIndex, SearchResult,
};
pub use slug::{generate_unique_slug, slugify, validate_slug};
pub use taxonomy::{
    breadcrumb, BreadcrumbSegment, CategoryEntry, CategoryHierarchyGroup, CategoryTreeNode,
    TagCloudEntry, TagEntry, TagSize, Taxonomy,
};
