//! YAML frontmatter parsing for content files
//!
//! A content file opens with a frontmatter block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Orchestrating AI Agents
//! date: 2024-03-01
//! keywords: [ai agents, workflow orchestration]
//! ---
//! body...
//! ```

use serde::Deserialize;

/// Metadata fields recognized in a frontmatter block.
///
/// Keys follow the content-file format (`readTime`, `imageCaption` are
/// camelCase on disk). Every field is optional; `keywords` defaults to
/// an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "readTime")]
    pub read_time: Option<u32>,
    pub keywords: Vec<String>,
    pub image: Option<String>,
    #[serde(rename = "imageCaption")]
    pub image_caption: Option<String>,
}

/// Split a content file into its frontmatter block and body.
///
/// Returns `None` when the file has no leading `---` block; the caller
/// treats the whole file as body with defaulted metadata.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let trimmed = content.trim_start();
    let after_open = trimmed.strip_prefix("---")?;

    let end = after_open.find("\n---")?;
    let yaml = &after_open[..end];

    // Body starts after the remainder of the closing delimiter line
    let rest = &after_open[end + "\n---".len()..];
    let body = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => "",
    };
    Some((yaml, body))
}

/// Parse a frontmatter block into typed metadata.
pub fn parse(yaml: &str) -> Result<Frontmatter, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
