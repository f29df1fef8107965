//! Weighted fuzzy search over article metadata.

use crate::models::{Article, ArticleMetadata};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Matches with a normalized distance above this are dropped
const SCORE_THRESHOLD: f32 = 0.6;

const TITLE_WEIGHT: f32 = 0.5;
const DESCRIPTION_WEIGHT: f32 = 0.3;
const EXCERPT_WEIGHT: f32 = 0.15;
const TAGS_WEIGHT: f32 = 0.05;

/// The article field a match landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Description,
    Excerpt,
    Tags,
}

/// A single field match with highlight ranges
///
/// `indices` holds inclusive character ranges into `value`, ascending
/// and non-overlapping. For the tags field, `value` is the best-matching
/// tag rather than the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub key: SearchField,
    pub value: String,
    pub indices: Vec<(usize, usize)>,
}

/// One search hit, lower `score` is better (0 exact, 1 worst)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub item: ArticleMetadata,
    pub score: f32,
    pub matches: Vec<FieldMatch>,
}

/// An in-memory search index over published article metadata
///
/// Documents keep the order they were indexed in, so feeding articles
/// newest-first makes equal-score results come back newest-first too.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    items: Vec<ArticleMetadata>,
}

impl SearchIndex {
    /// Index published metadata entries
    pub fn build<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ArticleMetadata>,
    {
        Self {
            items: items
                .into_iter()
                .filter(ArticleMetadata::is_published)
                .collect(),
        }
    }

    /// Index the published articles from `articles`
    pub fn from_articles<'a, I>(articles: I) -> Self
    where
        I: IntoIterator<Item = &'a Article>,
    {
        Self::build(articles.into_iter().map(Article::metadata))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run a fuzzy query against the index
    ///
    /// Each document field is scored independently and normalized against
    /// a self-match of the query, giving a distance where 0.0 is a perfect
    /// match and 1.0 no match at all. Field distances above the acceptance
    /// threshold are discarded, and the rest combine into a weighted
    /// document score with the title counting the most, then description,
    /// excerpt, and tags. Results are sorted best first and truncated to
    /// `limit` when one is given.
    ///
    /// An empty or whitespace-only query returns no results.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let self_score = match matcher.fuzzy_match(query, query) {
            Some(score) if score > 0 => score as f32,
            _ => return Vec::new(),
        };

        let mut results: Vec<SearchResult> = self
            .items
            .iter()
            .filter_map(|item| score_item(&matcher, item, query, self_score))
            .collect();

        results.sort_by(|a, b| a.score.total_cmp(&b.score));
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        debug!(
            "Query {query:?} matched {} of {} documents",
            results.len(),
            self.items.len()
        );
        results
    }
}

fn score_item(
    matcher: &SkimMatcherV2,
    item: &ArticleMetadata,
    query: &str,
    self_score: f32,
) -> Option<SearchResult> {
    let mut matches: Vec<(f32, f32, FieldMatch)> = Vec::new();

    if let Some((distance, indices)) = field_match(matcher, item.title(), query, self_score) {
        matches.push((
            distance,
            TITLE_WEIGHT,
            FieldMatch {
                key: SearchField::Title,
                value: item.title().to_string(),
                indices,
            },
        ));
    }

    if let Some(description) = &item.front_matter.description {
        if let Some((distance, indices)) = field_match(matcher, description, query, self_score) {
            matches.push((
                distance,
                DESCRIPTION_WEIGHT,
                FieldMatch {
                    key: SearchField::Description,
                    value: description.clone(),
                    indices,
                },
            ));
        }
    }

    if let Some((distance, indices)) = field_match(matcher, &item.excerpt, query, self_score) {
        matches.push((
            distance,
            EXCERPT_WEIGHT,
            FieldMatch {
                key: SearchField::Excerpt,
                value: item.excerpt.clone(),
                indices,
            },
        ));
    }

    if let Some((tag, distance, indices)) =
        best_tag_match(matcher, &item.front_matter.tags, query, self_score)
    {
        matches.push((
            distance,
            TAGS_WEIGHT,
            FieldMatch {
                key: SearchField::Tags,
                value: tag,
                indices,
            },
        ));
    }

    if matches.is_empty() {
        return None;
    }

    let score = matches
        .iter()
        .map(|(distance, weight, _)| distance.max(f32::EPSILON).powf(*weight))
        .product();

    Some(SearchResult {
        item: item.clone(),
        score,
        matches: matches.into_iter().map(|(_, _, m)| m).collect(),
    })
}

/// Score one field, returning its distance and coalesced highlight ranges
fn field_match(
    matcher: &SkimMatcherV2,
    text: &str,
    query: &str,
    self_score: f32,
) -> Option<(f32, Vec<(usize, usize)>)> {
    let (score, indices) = matcher.fuzzy_indices(text, query)?;
    let distance = 1.0 - (score as f32 / self_score).clamp(0.0, 1.0);
    if distance > SCORE_THRESHOLD {
        return None;
    }
    Some((distance, coalesce_indices(&indices)))
}

fn best_tag_match(
    matcher: &SkimMatcherV2,
    tags: &[String],
    query: &str,
    self_score: f32,
) -> Option<(String, f32, Vec<(usize, usize)>)> {
    let mut best: Option<(String, f32, Vec<(usize, usize)>)> = None;
    for tag in tags {
        if let Some((distance, indices)) = field_match(matcher, tag, query, self_score) {
            let better = match &best {
                Some((_, best_distance, _)) => distance < *best_distance,
                None => true,
            };
            if better {
                best = Some((tag.clone(), distance, indices));
            }
        }
    }
    best
}

/// Collapse sorted character indices into inclusive (start, end) ranges
fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &index in indices {
        match ranges.last_mut() {
            Some((_, end)) if index == *end + 1 => *end = index,
            Some((_, end)) if index <= *end => {}
            _ => ranges.push((index, index)),
        }
    }
    ranges
}

/// Wrap the inclusive character ranges of `text` in `<mark>` tags
///
/// Ranges must be sorted and non-overlapping, as produced by search
/// matches. Out-of-bounds ranges are ignored, and a range reaching the
/// end of the text still gets its closing tag.
pub fn highlight(text: &str, ranges: &[(usize, usize)]) -> String {
    let mut out = String::with_capacity(text.len() + ranges.len() * 13);
    let mut remaining = ranges.iter().peekable();
    let mut open = false;

    for (i, c) in text.chars().enumerate() {
        if !open {
            if let Some((start, _)) = remaining.peek() {
                if i == *start {
                    out.push_str("<mark>");
                    open = true;
                }
            }
        }
        out.push(c);
        if open {
            if let Some((_, end)) = remaining.peek() {
                if i == *end {
                    out.push_str("</mark>");
                    open = false;
                    remaining.next();
                }
            }
        }
    }
    if open {
        out.push_str("</mark>");
    }
    out
}

/// The result's title with any title match highlighted
pub fn format_result_title(result: &SearchResult) -> String {
    match result
        .matches
        .iter()
        .find(|m| m.key == SearchField::Title)
    {
        Some(m) => highlight(&m.value, &m.indices),
        None => result.item.title().to_string(),
    }
}

/// A display description for the result
///
/// Prefers a highlighted description match, then a highlighted excerpt
/// match, then the plain description, then the plain excerpt.
pub fn format_result_description(result: &SearchResult) -> String {
    if let Some(m) = result
        .matches
        .iter()
        .find(|m| m.key == SearchField::Description)
    {
        return highlight(&m.value, &m.indices);
    }
    if let Some(m) = result
        .matches
        .iter()
        .find(|m| m.key == SearchField::Excerpt)
    {
        return highlight(&m.value, &m.indices);
    }
    match &result.item.front_matter.description {
        Some(description) => description.clone(),
        None => result.item.excerpt.clone(),
    }
}
