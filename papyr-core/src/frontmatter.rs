//! Frontmatter parsing from markdown documents.

use crate::models::FrontMatter;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Document has no frontmatter block")]
    MissingFrontmatter,
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n?(.*)$").unwrap())
}

/// Parse frontmatter from a raw markdown document
///
/// Returns a tuple of (frontmatter, markdown_body). Documents without a
/// frontmatter block, or whose frontmatter lacks `title` or `date`, are
/// rejected so the loader can skip them with a diagnostic.
///
/// # Example
///
/// ```
/// use papyr_core::frontmatter::parse_frontmatter;
///
/// let content = "---\ntitle: My Post\ndate: 2025-01-01\n---\n# Hello World\n";
///
/// let (fm, body) = parse_frontmatter(content).unwrap();
/// assert_eq!(fm.title, "My Post");
/// assert_eq!(fm.date, "2025-01-01");
/// assert!(body.trim().starts_with("# Hello World"));
/// ```
pub fn parse_frontmatter(content: &str) -> Result<(FrontMatter, String), FrontmatterError> {
    let re = frontmatter_regex();

    let Some(captures) = re.captures(content) else {
        return Err(FrontmatterError::MissingFrontmatter);
    };

    let yaml = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

    let front_matter: FrontMatter = match serde_yaml::from_str(yaml) {
        Ok(fm) => fm,
        Err(e) => {
            let err_msg = e.to_string();
            for field in ["title", "date"] {
                if err_msg.contains(&format!("missing field `{field}`")) {
                    return Err(FrontmatterError::MissingField(field.to_string()));
                }
            }
            return Err(FrontmatterError::YamlError(e));
        }
    };

    // serde accepts empty strings for required fields; reject those too
    if front_matter.title.trim().is_empty() {
        return Err(FrontmatterError::MissingField("title".to_string()));
    }
    if front_matter.date.trim().is_empty() {
        return Err(FrontmatterError::MissingField("date".to_string()));
    }

    Ok((front_matter, body.to_string()))
}
