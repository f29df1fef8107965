//! Category listings, hierarchy, and breadcrumbs.

use crate::payload;
use anyhow::Result;
use papyr_core::{breadcrumb, filter_locale, Article, CategoryTreeNode, Taxonomy};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct CategoryOptions {
    pub counts: bool,
    pub tree: bool,
    pub hierarchy: bool,
    pub breadcrumb: Option<String>,
    pub related: Option<String>,
    pub locale: Option<String>,
    pub json: bool,
}

/// Show category views over the published corpus.
pub fn show_categories(config_path: &Path, opts: CategoryOptions) -> Result<()> {
    // Breadcrumbs derive from the path string alone, no corpus needed.
    if let Some(category) = &opts.breadcrumb {
        return show_breadcrumb(category, opts.json);
    }

    let (config, articles) = super::load_corpus(config_path, false)?;

    let selected: Vec<&Article> = match &opts.locale {
        Some(locale) => filter_locale(&articles, locale, &config.default_locale),
        None => articles.iter().collect(),
    };
    let taxonomy = Taxonomy::new(selected);

    if let Some(target) = &opts.related {
        let related = taxonomy.related_categories(target);

        if opts.json {
            let data = payload::envelope(
                "category.related",
                payload::RelatedData {
                    target: target.clone(),
                    related,
                },
            );
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else if related.is_empty() {
            println!("No categories related to '{}'", target);
        } else {
            for category in &related {
                println!("{category}");
            }
        }
        return Ok(());
    }

    if opts.tree {
        let tree = taxonomy.category_tree();

        if opts.json {
            let data = payload::envelope("category.tree", payload::CategoryTreeData { tree });
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else if tree.is_empty() {
            println!("No categories found");
        } else {
            print_tree(&tree, 0);
        }
        return Ok(());
    }

    if opts.hierarchy {
        let groups = taxonomy.category_hierarchy();

        if opts.json {
            let data = payload::envelope(
                "category.hierarchy",
                payload::CategoryHierarchyData { groups },
            );
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else if groups.is_empty() {
            println!("No categories found");
        } else {
            for group in &groups {
                println!("{}:", group.parent);
                for child in &group.children {
                    println!("{:>4}  {}", child.count, child.name);
                }
            }
        }
        return Ok(());
    }

    if opts.counts {
        let categories = taxonomy.categories_with_count();

        if opts.json {
            let data = payload::envelope(
                "category.counts",
                payload::CategoryCountsData {
                    total: categories.len(),
                    categories,
                },
            );
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else if categories.is_empty() {
            println!("No categories found");
        } else {
            for entry in &categories {
                println!("{:>4}  {}", entry.count, entry.name);
            }
        }
        return Ok(());
    }

    let categories = taxonomy.all_categories();

    if opts.json {
        let data = payload::envelope(
            "category.list",
            payload::CategoryListData {
                total: categories.len(),
                categories,
            },
        );
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else if categories.is_empty() {
        println!("No categories found");
    } else {
        for category in &categories {
            println!("{category}");
        }
    }

    Ok(())
}

fn show_breadcrumb(category: &str, json: bool) -> Result<()> {
    let segments = breadcrumb(category);

    if json {
        let data = payload::envelope(
            "category.breadcrumb",
            payload::BreadcrumbData {
                category: category.to_string(),
                segments,
            },
        );
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else if segments.is_empty() {
        println!("No breadcrumb segments for '{}'", category);
    } else {
        let trail: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
        println!("{}", trail.join(" > "));
    }

    Ok(())
}

fn print_tree(nodes: &[CategoryTreeNode], depth: usize) {
    for node in nodes {
        println!("{}{} ({})", "  ".repeat(depth), node.name, node.count);
        print_tree(&node.children, depth + 1);
    }
}
