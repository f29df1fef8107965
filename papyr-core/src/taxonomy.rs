//! Tag and category aggregation over a loaded article set.

use crate::models::{Article, ArticleRef};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const RELATED_LIMIT: usize = 5;

/// A tag with the published articles carrying it
///
/// `count` always equals `articles.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub name: String,
    pub count: usize,
    pub articles: Vec<ArticleRef>,
}

/// A category with the articles filed exactly under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub count: usize,
    pub articles: Vec<ArticleRef>,
}

/// Categories grouped under their first path segment
///
/// Top-level categories collect under the `"root"` parent. A child's
/// `name` is the path remainder after the parent segment, so
/// `Frontend/React/Hooks` appears under `Frontend` as `React/Hooks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHierarchyGroup {
    pub parent: String,
    pub children: Vec<CategoryEntry>,
}

/// One step of a category breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbSegment {
    pub name: String,
    pub path: String,
}

/// A node in the category tree
///
/// `count` covers articles filed exactly at `path`. A parent that only
/// exists because deeper paths mention it carries a count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTreeNode {
    pub name: String,
    pub path: String,
    pub count: usize,
    pub children: Vec<CategoryTreeNode>,
}

/// Display size bucket for a tag cloud entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    TwoXl,
}

impl TagSize {
    /// Size token as serialized, usable as a CSS class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            TagSize::Xs => "xs",
            TagSize::Sm => "sm",
            TagSize::Base => "base",
            TagSize::Lg => "lg",
            TagSize::Xl => "xl",
            TagSize::TwoXl => "2xl",
        }
    }
}

/// A tag entry with its normalized cloud weight and size bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagCloudEntry {
    pub name: String,
    pub count: usize,
    pub articles: Vec<ArticleRef>,
    pub weight: f32,
    pub size: TagSize,
}

/// Aggregated tag and category views over a set of articles
///
/// The constructor keeps only published articles, so a taxonomy built
/// from a draft-inclusive load still reflects the public site. Input
/// order is preserved wherever articles are listed, which keeps every
/// view date-descending when the input came straight from the loader.
pub struct Taxonomy<'a> {
    articles: Vec<&'a Article>,
}

impl<'a> Taxonomy<'a> {
    pub fn new<I>(articles: I) -> Self
    where
        I: IntoIterator<Item = &'a Article>,
    {
        Self {
            articles: articles.into_iter().filter(|a| a.is_published()).collect(),
        }
    }

    /// All distinct tags, sorted alphabetically
    pub fn all_tags(&self) -> Vec<String> {
        self.tag_refs().into_keys().map(str::to_string).collect()
    }

    /// Tag entries, most used first, equal counts alphabetical
    ///
    /// A tag repeated inside one article's frontmatter counts once.
    pub fn tags_with_count(&self) -> Vec<TagEntry> {
        let mut entries: Vec<TagEntry> = self
            .tag_refs()
            .into_iter()
            .map(|(name, articles)| TagEntry {
                name: name.to_string(),
                count: articles.len(),
                articles,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    /// Articles carrying `tag`, in input order
    pub fn articles_by_tag(&self, tag: &str) -> Vec<&'a Article> {
        self.articles
            .iter()
            .filter(|a| a.tags().iter().any(|t| t == tag))
            .copied()
            .collect()
    }

    /// All distinct category paths as authored, sorted alphabetically
    pub fn all_categories(&self) -> Vec<String> {
        self.category_refs()
            .into_keys()
            .map(str::to_string)
            .collect()
    }

    /// Category entries keyed by full path, most used first
    pub fn categories_with_count(&self) -> Vec<CategoryEntry> {
        let mut entries: Vec<CategoryEntry> = self
            .category_refs()
            .into_iter()
            .map(|(name, articles)| CategoryEntry {
                name: name.to_string(),
                count: articles.len(),
                articles,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    /// Articles filed exactly under `category`, in input order
    pub fn articles_by_category(&self, category: &str) -> Vec<&'a Article> {
        self.articles
            .iter()
            .filter(|a| a.category() == Some(category))
            .copied()
            .collect()
    }

    /// Categories grouped by their first path segment
    ///
    /// Groups come back in alphabetical parent order with top-level
    /// categories under `"root"`. Children within a group are sorted by
    /// count descending, equal counts alphabetical.
    pub fn category_hierarchy(&self) -> Vec<CategoryHierarchyGroup> {
        let mut groups: BTreeMap<&str, Vec<CategoryEntry>> = BTreeMap::new();

        for (path, articles) in self.category_refs() {
            let (parent, child) = match path.split_once('/') {
                Some((parent, rest)) => (parent, rest),
                None => ("root", path),
            };
            groups.entry(parent).or_default().push(CategoryEntry {
                name: child.to_string(),
                count: articles.len(),
                articles,
            });
        }

        groups
            .into_iter()
            .map(|(parent, mut children)| {
                children.sort_by(|a, b| b.count.cmp(&a.count));
                CategoryHierarchyGroup {
                    parent: parent.to_string(),
                    children,
                }
            })
            .collect()
    }

    /// The full category hierarchy as a forest, children alphabetical
    pub fn category_tree(&self) -> Vec<CategoryTreeNode> {
        let mut roots: Vec<CategoryTreeNode> = Vec::new();
        for (path, articles) in self.category_refs() {
            insert_path(&mut roots, path, "", articles.len());
        }
        roots
    }

    /// Up to `limit` tags co-occurring with `target`, strongest overlap
    /// first, equal overlaps alphabetical
    ///
    /// An unknown tag yields an empty list.
    pub fn related_tags(&self, target: &str, limit: usize) -> Vec<String> {
        let mut overlap: BTreeMap<&str, usize> = BTreeMap::new();
        for article in &self.articles {
            if !article.tags().iter().any(|t| t == target) {
                continue;
            }
            let distinct: BTreeSet<&str> = article.tags().iter().map(String::as_str).collect();
            for other in distinct {
                if other != target {
                    *overlap.entry(other).or_insert(0) += 1;
                }
            }
        }

        let mut related: Vec<(&str, usize)> = overlap.into_iter().collect();
        related.sort_by(|a, b| b.1.cmp(&a.1));
        related
            .into_iter()
            .take(limit)
            .map(|(t, _)| t.to_string())
            .collect()
    }

    /// Up to five sibling categories of `target`, alphabetical
    ///
    /// Siblings share the parent path, so a top-level target relates to
    /// the other top-level categories.
    pub fn related_categories(&self, target: &str) -> Vec<String> {
        let parent = match target.rsplit_once('/') {
            Some((parent, _)) => parent,
            None => "",
        };

        self.category_refs()
            .into_keys()
            .filter(|candidate| {
                *candidate != target
                    && match candidate.rsplit_once('/') {
                        Some((p, _)) => p == parent,
                        None => parent.is_empty(),
                    }
            })
            .take(RELATED_LIMIT)
            .map(str::to_string)
            .collect()
    }

    /// Tag cloud entries with min-max normalized weights, alphabetical
    ///
    /// When every tag has the same count the weight is 1.0 across the
    /// board rather than dividing by zero.
    pub fn tag_cloud(&self) -> Vec<TagCloudEntry> {
        let refs = self.tag_refs();
        if refs.is_empty() {
            return Vec::new();
        }

        let max = refs.values().map(Vec::len).max().unwrap_or(0);
        let min = refs.values().map(Vec::len).min().unwrap_or(0);

        refs.into_iter()
            .map(|(name, articles)| {
                let count = articles.len();
                let weight = if max > min {
                    (count - min) as f32 / (max - min) as f32
                } else {
                    1.0
                };
                TagCloudEntry {
                    name: name.to_string(),
                    count,
                    articles,
                    weight,
                    size: size_for_weight(weight),
                }
            })
            .collect()
    }

    fn tag_refs(&self) -> BTreeMap<&'a str, Vec<ArticleRef>> {
        let mut refs: BTreeMap<&'a str, Vec<ArticleRef>> = BTreeMap::new();
        for article in &self.articles {
            let distinct: BTreeSet<&'a str> = article.tags().iter().map(String::as_str).collect();
            for tag in distinct {
                refs.entry(tag).or_default().push(article.to_ref());
            }
        }
        refs
    }

    fn category_refs(&self) -> BTreeMap<&'a str, Vec<ArticleRef>> {
        let mut refs: BTreeMap<&'a str, Vec<ArticleRef>> = BTreeMap::new();
        for article in &self.articles {
            if let Some(category) = article.category() {
                refs.entry(category).or_default().push(article.to_ref());
            }
        }
        refs
    }
}

/// Breadcrumb trail for a category path
///
/// Each step carries the segment name and the cumulative path up to
/// that segment. Empty and blank segments are dropped.
pub fn breadcrumb(category: &str) -> Vec<BreadcrumbSegment> {
    let mut trail = Vec::new();
    let mut cumulative = String::new();

    for segment in category.split('/') {
        let name = segment.trim();
        if name.is_empty() {
            continue;
        }
        if !cumulative.is_empty() {
            cumulative.push('/');
        }
        cumulative.push_str(name);
        trail.push(BreadcrumbSegment {
            name: name.to_string(),
            path: cumulative.clone(),
        });
    }
    trail
}

fn insert_path(nodes: &mut Vec<CategoryTreeNode>, remainder: &str, prefix: &str, count: usize) {
    let (name, rest) = match remainder.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (remainder, None),
    };
    let path = if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    };

    let position = match nodes.iter().position(|n| n.name == name) {
        Some(position) => position,
        None => {
            let insert_at = nodes
                .iter()
                .position(|n| n.name.as_str() > name)
                .unwrap_or(nodes.len());
            nodes.insert(
                insert_at,
                CategoryTreeNode {
                    name: name.to_string(),
                    path: path.clone(),
                    count: 0,
                    children: Vec::new(),
                },
            );
            insert_at
        }
    };

    match rest {
        Some(rest) => insert_path(&mut nodes[position].children, rest, &path, count),
        None => nodes[position].count += count,
    }
}

fn size_for_weight(weight: f32) -> TagSize {
    if weight >= 0.8 {
        TagSize::TwoXl
    } else if weight >= 0.6 {
        TagSize::Xl
    } else if weight >= 0.4 {
        TagSize::Lg
    } else if weight >= 0.2 {
        TagSize::Base
    } else if weight >= 0.1 {
        TagSize::Sm
    } else {
        TagSize::Xs
    }
}
