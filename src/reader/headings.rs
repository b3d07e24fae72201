//! Heading extraction from an article body
//!
//! Runs once per article page; the resulting list is the tracker's
//! anchor set for the page's lifetime.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;
use std::collections::HashSet;

/// A heading anchor in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Navigation/scroll anchor key, unique within the document
    pub id: String,
    /// Heading text with inline markup flattened
    pub text: String,
    /// Heading level, 1–6
    pub level: u8,
}

/// Derive an anchor id from heading text: lowercase, punctuation
/// stripped, whitespace to hyphens, edge hyphens trimmed.
///
/// "Hello, World!" → "hello-world". May be empty for all-punctuation
/// text; the caller falls back to a positional id.
pub fn derive_heading_id(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Extract all headings from a markdown body, in document order.
///
/// An explicit id attribute (`## Title {#custom}`) is never renamed.
/// Derived ids that come out empty, or would collide with an id already
/// assigned, fall back to the positional `heading-<index>`.
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let parser = Parser::new_ext(markdown, Options::all());

    let mut headings: Vec<Heading> = Vec::new();
    let mut taken: HashSet<String> = HashSet::new();
    let mut in_heading = false;
    let mut level: u8 = 0;
    let mut explicit_id: Option<String> = None;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level: l, id, .. }) => {
                in_heading = true;
                level = l as u8;
                explicit_id = id.map(|s| s.to_string());
                text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                in_heading = false;
                let text = std::mem::take(&mut text).trim().to_string();
                let index = headings.len();
                let id = match explicit_id.take() {
                    Some(id) => id,
                    None => {
                        let derived = derive_heading_id(&text);
                        if derived.is_empty() || taken.contains(&derived) {
                            format!("heading-{}", index)
                        } else {
                            derived
                        }
                    }
                };
                taken.insert(id.clone());
                headings.push(Heading { id, text, level });
            }
            Event::Text(t) => {
                if in_heading {
                    text.push_str(&t);
                }
            }
            Event::Code(code) => {
                if in_heading {
                    text.push_str(&code);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_heading {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}
