//! Article: a single piece of writing parsed from a content file

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for an article
///
/// Derived solely from the source filename stem (`my-post.mdx` → `my-post`),
/// so it is stable across scans. Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a content filename (strips `.md` / `.mdx`)
    pub fn from_filename(name: &str) -> Self {
        let stem = name
            .strip_suffix(".mdx")
            .or_else(|| name.strip_suffix(".md"))
            .unwrap_or(name);
        Self(stem.to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An article parsed from a content file
///
/// Metadata comes from the frontmatter block; `body` is the remaining
/// markup, opaque to everything except rendering and heading extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier, derived from the source filename
    pub slug: Slug,
    /// Article title (empty when the frontmatter omits it)
    pub title: String,
    /// The date string exactly as written in the frontmatter, for display
    pub raw_date: String,
    /// Parsed publication date. `None` when the date is missing or
    /// malformed; `Option`'s derived order puts `None` first, so such
    /// articles sort earliest in every date ordering.
    pub published: Option<NaiveDate>,
    /// Optional author name
    pub author: Option<String>,
    /// Optional estimated read time in minutes
    pub read_time: Option<u32>,
    /// Keywords in display order. Not deduplicated; repeats are preserved.
    pub keywords: Vec<String>,
    /// Optional cover image URL
    pub image: Option<String>,
    /// Optional cover image caption
    pub image_caption: Option<String>,
    /// Raw markup body
    pub body: String,
}

/// Parse a frontmatter date string into a `NaiveDate`, tolerantly.
///
/// Accepted formats, in order: `2024-03-01`, RFC 3339 (date part),
/// `2024/03/01`, `March 1, 2024`. Anything else yields `None` — a
/// malformed date must never take the article down.
pub fn published_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y/%m/%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%B %d, %Y") {
        return Some(d);
    }
    None
}
