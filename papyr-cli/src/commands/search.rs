//! Search command implementation.

use crate::payload;
use anyhow::Result;
use papyr_core::{
    filter_locale, format_result_description, format_result_title, Article, SearchIndex,
    SearchResult,
};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub limit: usize,
    pub locale: Option<String>,
    pub json: bool,
}

/// Search published articles with the weighted fuzzy index.
pub fn search_articles(config_path: &Path, query: &str, opts: SearchOptions) -> Result<()> {
    let (config, articles) = super::load_corpus(config_path, false)?;

    let selected: Vec<&Article> = match &opts.locale {
        Some(locale) => filter_locale(&articles, locale, &config.default_locale),
        None => articles.iter().collect(),
    };

    let index = SearchIndex::from_articles(selected);
    let results = index.search(query, None);

    if opts.json {
        let hits: Vec<_> = results
            .iter()
            .take(opts.limit)
            .map(payload::search_result_to_hit)
            .collect();

        let data = payload::envelope(
            "search.results",
            payload::SearchData {
                query: query.to_string(),
                limit: opts.limit,
                total: results.len(),
                results: hits,
            },
        );
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found for '{}'", query);
        return Ok(());
    }

    println!("\n🔍 Found {} results for '{}':\n", results.len(), query);

    for result in results.iter().take(opts.limit) {
        print_search_result(result);
    }

    if results.len() > opts.limit {
        println!("  ... and {} more results", results.len() - opts.limit);
    }

    Ok(())
}

fn print_search_result(result: &SearchResult) {
    // Format:
    // Advanced <mark>TypeScript</mark> Patterns (score 0.0012)
    //   advanced-typescript-patterns · 2025-03-01
    //   Deep dive into <mark>TypeScript</mark> generics...
    println!(
        "{} (score {:.4})",
        format_result_title(result),
        result.score
    );
    println!(
        "  {} · {}",
        result.item.slug,
        result.item.date.format("%Y-%m-%d")
    );
    println!("  {}", format_result_description(result));
    println!();
}
