//! Plain-text extraction from markdown, excerpts, and reading time.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Reduce markdown to whitespace-normalized plain text
///
/// Code blocks, inline code, and raw HTML are dropped. Everything else
/// keeps its visible text with markdown syntax removed.
pub fn plain_text(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut text = String::new();
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(t) => {
                if !in_code_block {
                    text.push_str(&t);
                    text.push(' ');
                }
            }
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build an excerpt of at most `max_chars` characters of plain text
///
/// Content that fits is returned untouched. Longer content is cut at the
/// last word boundary before the limit and suffixed with `...`, so the
/// excerpt never ends mid-word.
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let text = plain_text(markdown);

    if text.chars().count() <= max_chars {
        return text;
    }

    let mut truncated: String = text.chars().take(max_chars).collect();
    if let Some(pos) = truncated.rfind(' ') {
        truncated.truncate(pos);
    }
    let mut result = truncated.trim_end().to_string();
    result.push_str("...");
    result
}

/// Estimate reading time in whole minutes
///
/// Whitespace-separated words of the raw body are divided by
/// `words_per_minute`, rounding up, so any body with at least one word
/// reads as a minute or more. An empty body is zero minutes.
pub fn reading_time(body: &str, words_per_minute: u32) -> u32 {
    let rate = words_per_minute.max(1);
    let words = body.split_whitespace().count() as u32;
    words.div_ceil(rate)
}
