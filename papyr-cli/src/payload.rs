//! Shared JSON schema helpers for machine-readable command output.

use chrono::NaiveDate;
use papyr_core::{
    Article, BreadcrumbSegment, CategoryEntry, CategoryHierarchyGroup, CategoryTreeNode,
    FieldMatch, SearchResult, TagCloudEntry, TagEntry,
};
use serde::Serialize;

pub const SCHEMA_VERSION: &str = "2025-06-blog-v1";

/// Standard envelope for machine-consumable responses.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub schema_version: &'static str,
    pub kind: &'static str,
    pub data: T,
}

pub fn envelope<T>(kind: &'static str, data: T) -> Envelope<T> {
    Envelope {
        schema_version: SCHEMA_VERSION,
        kind,
        data,
    }
}

#[derive(Serialize)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub locale: String,
    pub featured: bool,
    pub excerpt: String,
    pub reading_time: u32,
}

#[derive(Serialize)]
pub struct ListData {
    pub total: usize,
    pub articles: Vec<ArticleSummary>,
}

#[derive(Serialize)]
pub struct ArticleData {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub locale: String,
    pub published: bool,
    pub featured: bool,
    pub excerpt: String,
    pub reading_time: u32,
    pub body: String,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub score: f32,
    pub matches: Vec<FieldMatch>,
}

#[derive(Serialize)]
pub struct SearchData {
    pub query: String,
    pub limit: usize,
    pub total: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct TagListData {
    pub total: usize,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct TagCountsData {
    pub total: usize,
    pub tags: Vec<TagEntry>,
}

#[derive(Serialize)]
pub struct TagCloudData {
    pub total: usize,
    pub tags: Vec<TagCloudEntry>,
}

/// Shared by `tag.related` and `category.related` responses.
#[derive(Serialize)]
pub struct RelatedData {
    pub target: String,
    pub related: Vec<String>,
}

#[derive(Serialize)]
pub struct CategoryListData {
    pub total: usize,
    pub categories: Vec<String>,
}

#[derive(Serialize)]
pub struct CategoryCountsData {
    pub total: usize,
    pub categories: Vec<CategoryEntry>,
}

#[derive(Serialize)]
pub struct CategoryHierarchyData {
    pub groups: Vec<CategoryHierarchyGroup>,
}

#[derive(Serialize)]
pub struct CategoryTreeData {
    pub tree: Vec<CategoryTreeNode>,
}

#[derive(Serialize)]
pub struct BreadcrumbData {
    pub category: String,
    pub segments: Vec<BreadcrumbSegment>,
}

pub fn article_to_summary(article: &Article, default_locale: &str) -> ArticleSummary {
    ArticleSummary {
        slug: article.slug.clone(),
        title: article.title().to_string(),
        date: format_date(article.date),
        description: article.front_matter.description.clone(),
        tags: article.tags().to_vec(),
        category: article.category().map(str::to_string),
        locale: article.locale_or(default_locale).to_string(),
        featured: article.is_featured(),
        excerpt: article.excerpt.clone(),
        reading_time: article.reading_time,
    }
}

pub fn article_to_payload(article: &Article, default_locale: &str) -> ArticleData {
    ArticleData {
        slug: article.slug.clone(),
        title: article.title().to_string(),
        date: format_date(article.date),
        description: article.front_matter.description.clone(),
        tags: article.tags().to_vec(),
        category: article.category().map(str::to_string),
        author: article.front_matter.author.clone(),
        locale: article.locale_or(default_locale).to_string(),
        published: article.is_published(),
        featured: article.is_featured(),
        excerpt: article.excerpt.clone(),
        reading_time: article.reading_time,
        body: article.content.clone(),
    }
}

pub fn search_result_to_hit(result: &SearchResult) -> SearchHit {
    SearchHit {
        slug: result.item.slug.clone(),
        title: result.item.title().to_string(),
        date: format_date(result.item.date),
        excerpt: result.item.excerpt.clone(),
        score: result.score,
        matches: result.matches.clone(),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
