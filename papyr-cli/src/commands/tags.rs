//! Tag listings, clouds, and relations.

use crate::payload;
use anyhow::Result;
use papyr_core::{filter_locale, Article, Taxonomy};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TagOptions {
    pub counts: bool,
    pub cloud: bool,
    pub related: Option<String>,
    pub locale: Option<String>,
    pub json: bool,
}

/// Show tag views over the published corpus.
pub fn show_tags(config_path: &Path, opts: TagOptions) -> Result<()> {
    let (config, articles) = super::load_corpus(config_path, false)?;

    let selected: Vec<&Article> = match &opts.locale {
        Some(locale) => filter_locale(&articles, locale, &config.default_locale),
        None => articles.iter().collect(),
    };
    let taxonomy = Taxonomy::new(selected);

    if let Some(target) = &opts.related {
        let related = taxonomy.related_tags(target, 5);

        if opts.json {
            let data = payload::envelope(
                "tag.related",
                payload::RelatedData {
                    target: target.clone(),
                    related,
                },
            );
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else if related.is_empty() {
            println!("No tags related to '{}'", target);
        } else {
            for tag in &related {
                println!("{tag}");
            }
        }
        return Ok(());
    }

    if opts.cloud {
        let cloud = taxonomy.tag_cloud();

        if opts.json {
            let data = payload::envelope(
                "tag.cloud",
                payload::TagCloudData {
                    total: cloud.len(),
                    tags: cloud,
                },
            );
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else if cloud.is_empty() {
            println!("No tags found");
        } else {
            for entry in &cloud {
                println!(
                    "{:>4}  {:<24} {:.2} {}",
                    entry.count,
                    entry.name,
                    entry.weight,
                    entry.size.as_str()
                );
            }
        }
        return Ok(());
    }

    if opts.counts {
        let tags = taxonomy.tags_with_count();

        if opts.json {
            let data = payload::envelope(
                "tag.counts",
                payload::TagCountsData {
                    total: tags.len(),
                    tags,
                },
            );
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else if tags.is_empty() {
            println!("No tags found");
        } else {
            for entry in &tags {
                println!("{:>4}  {}", entry.count, entry.name);
            }
        }
        return Ok(());
    }

    let tags = taxonomy.all_tags();

    if opts.json {
        let data = payload::envelope(
            "tag.list",
            payload::TagListData {
                total: tags.len(),
                tags,
            },
        );
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else if tags.is_empty() {
        println!("No tags found");
    } else {
        for tag in &tags {
            println!("{tag}");
        }
    }

    Ok(())
}
