//! Fetch a single article in structured form.

use crate::{payload, ArticleFormat};
use anyhow::{Context, Result};
use papyr_core::{slugify, Config, ContentLoader};
use std::path::Path;

/// Fetch a single article and render it in the requested format.
pub fn show_article(config_path: &Path, slug: &str, format: ArticleFormat) -> Result<()> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    let loader = ContentLoader::from_config(&config);

    // Accept "My Title"-ish input by normalizing to slug form first.
    let normalized = slugify(slug);
    let article = loader
        .load_by_slug(&normalized)
        .with_context(|| format!("Article '{}' not found", slug))?;

    match format {
        ArticleFormat::Json => {
            let data = payload::envelope(
                "article.full",
                payload::article_to_payload(&article, &config.default_locale),
            );
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        ArticleFormat::Markdown => {
            let fm = serde_yaml::to_string(&article.front_matter).unwrap_or_default();
            println!("---\n{}---\n{}", fm, article.content);
        }
        ArticleFormat::Raw => {
            println!("{}", article.content);
        }
    }

    Ok(())
}
