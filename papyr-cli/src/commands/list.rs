//! List command implementation.

use crate::payload;
use anyhow::Result;
use papyr_core::{filter_locale, Article};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub all: bool,
    pub featured: bool,
    pub locale: Option<String>,
    pub limit: usize,
    pub json: bool,
}

/// List loaded articles, newest first.
pub fn list_articles(config_path: &Path, opts: ListOptions) -> Result<()> {
    let (config, articles) = super::load_corpus(config_path, opts.all)?;

    let mut selected: Vec<&Article> = match &opts.locale {
        Some(locale) => filter_locale(&articles, locale, &config.default_locale),
        None => articles.iter().collect(),
    };

    if opts.featured {
        selected.retain(|article| article.is_featured());
    }

    let total = selected.len();
    selected.truncate(opts.limit);

    if opts.json {
        let summaries: Vec<_> = selected
            .iter()
            .map(|article| payload::article_to_summary(article, &config.default_locale))
            .collect();

        let data = payload::envelope(
            "article.list",
            payload::ListData {
                total,
                articles: summaries,
            },
        );
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No articles found");
        return Ok(());
    }

    for article in &selected {
        print_article(article);
    }

    if total > opts.limit {
        println!("  ... and {} more articles", total - opts.limit);
    }

    Ok(())
}

fn print_article(article: &Article) {
    // Format:
    // 2025-01-15 Rust Ownership ★
    //   rust-ownership · 4 min read · Systems/Rust
    //   Excerpt text...
    let mut heading = format!("{} {}", article.date.format("%Y-%m-%d"), article.title());
    if article.is_featured() {
        heading.push_str(" ★");
    }
    if !article.is_published() {
        heading.push_str(" (draft)");
    }
    println!("{heading}");

    let mut meta = format!("  {} · {} min read", article.slug, article.reading_time);
    if let Some(category) = article.category() {
        meta.push_str(" · ");
        meta.push_str(category);
    }
    println!("{meta}");
    println!("  {}", article.excerpt);
    println!();
}
