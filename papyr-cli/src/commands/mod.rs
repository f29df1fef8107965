//! CLI command implementations.

pub mod categories;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod tags;

pub use categories::{show_categories, CategoryOptions};
pub use init::init_site;
pub use list::{list_articles, ListOptions};
pub use search::{search_articles, SearchOptions};
pub use show::show_article;
pub use tags::{show_tags, TagOptions};

use anyhow::{Context, Result};
use papyr_core::{Article, Config, ContentLoader};
use std::path::Path;

/// Load configuration and the article corpus in one step.
///
/// A missing config file falls back to defaults, so the CLI works in any
/// directory that has a `content/` folder.
pub(crate) fn load_corpus(
    config_path: &Path,
    include_unpublished: bool,
) -> Result<(Config, Vec<Article>)> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    let loader = ContentLoader::from_config(&config);
    let articles = loader.load_all(include_unpublished);
    Ok((config, articles))
}
