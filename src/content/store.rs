//! ContentStore: the scanned posts directory
//!
//! Reads every `.md` / `.mdx` file in a directory into an [`Article`].
//! Enumeration order is the filename sort, so downstream tie-breaks
//! (which all use stable sorts) are deterministic across platforms.

use super::article::{published_date, Article, Slug};
use super::frontmatter::{self, Frontmatter};
use dashmap::DashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while reading the content directory
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read content directory '{path}': {source}")]
    Dir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;

/// All articles parsed from a posts directory.
///
/// Individual files that cannot be read or parsed are skipped with a
/// warning — a broken post must never take the whole site down. Only a
/// missing/unreadable directory is an error.
#[derive(Debug, Default)]
pub struct ContentStore {
    /// Articles in enumeration order
    articles: Vec<Article>,
    /// Slug → position in `articles`
    by_slug: DashMap<Slug, usize>,
}

impl ContentStore {
    /// Scan a posts directory into a store.
    pub fn scan(dir: impl AsRef<Path>) -> ContentResult<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|source| ContentError::Dir {
            path: dir.display().to_string(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| name.ends_with(".md") || name.ends_with(".mdx"))
            .collect();
        names.sort();

        let mut store = Self::default();
        for name in names {
            let path = dir.join(&name);
            let content = match std::fs::read_to_string(&path) {
                Ok(c) => c,
                Err(e) => {
                    warn!("skipping unreadable post '{}': {}", name, e);
                    continue;
                }
            };
            let slug = Slug::from_filename(&name);
            if store.by_slug.contains_key(&slug) {
                warn!("skipping '{}': slug '{}' already taken", name, slug);
                continue;
            }
            let article = match parse_article(slug, &content) {
                Ok(a) => a,
                Err(e) => {
                    warn!("skipping '{}': bad frontmatter: {}", name, e);
                    continue;
                }
            };
            store.by_slug.insert(article.slug.clone(), store.articles.len());
            store.articles.push(article);
        }

        debug!(
            "scanned {} article(s) from {}",
            store.articles.len(),
            dir.display()
        );
        Ok(store)
    }

    /// All articles in enumeration order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up an article by slug.
    pub fn get(&self, slug: &Slug) -> Option<&Article> {
        self.by_slug.get(slug).map(|idx| &self.articles[*idx])
    }

    /// Number of articles in the store.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the store holds no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Parse one content file into an article.
///
/// A file with no frontmatter block is still an article: metadata
/// defaults, the whole file becomes the body.
fn parse_article(slug: Slug, content: &str) -> Result<Article, serde_yaml::Error> {
    let (fm, body) = match frontmatter::split(content) {
        Some((yaml, body)) => (frontmatter::parse(yaml)?, body),
        None => (Frontmatter::default(), content),
    };

    let raw_date = fm.date.unwrap_or_default();
    let published = published_date(&raw_date);

    Ok(Article {
        slug,
        title: fm.title.unwrap_or_default(),
        raw_date,
        published,
        author: fm.author,
        read_time: fm.read_time,
        keywords: fm.keywords,
        image: fm.image,
        image_caption: fm.image_caption,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn post(title: &str, date: &str, keywords: &[&str]) -> String {
        format!(
            "---\ntitle: {}\ndate: {}\nkeywords: [{}]\n---\n\nBody of {}.\n",
            title,
            date,
            keywords.join(", "),
            title
        )
    }

    #[test]
    fn scan_orders_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "b-second.md", &post("Second", "2024-02-01", &["b"]));
        write_post(dir.path(), "a-first.md", &post("First", "2024-01-01", &["a"]));
        write_post(dir.path(), "c-third.mdx", &post("Third", "2024-03-01", &["c"]));

        let store = ContentStore::scan(dir.path()).unwrap();
        let slugs: Vec<_> = store.articles().iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a-first", "b-second", "c-third"]);
    }

    #[test]
    fn scan_ignores_non_markdown() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "real.md", &post("Real", "2024-01-01", &[]));
        write_post(dir.path(), "notes.txt", "not a post");
        write_post(dir.path(), "style.css", "body {}");

        let store = ContentStore::scan(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn scan_skips_duplicate_slug() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "same.md", &post("Kept", "2024-01-01", &[]));
        write_post(dir.path(), "same.mdx", &post("Dropped", "2024-01-02", &[]));

        let store = ContentStore::scan(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
        // Filename order: .md sorts before .mdx, so the .md copy wins
        assert_eq!(store.articles()[0].title, "Kept");
    }

    #[test]
    fn scan_skips_bad_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "bad.md", "---\ntitle: [unclosed\n---\nbody");
        write_post(dir.path(), "good.md", &post("Good", "2024-01-01", &[]));

        let store = ContentStore::scan(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.articles()[0].title, "Good");
    }

    #[test]
    fn file_without_frontmatter_is_all_body() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "plain.md", "Just prose, no metadata.");

        let store = ContentStore::scan(dir.path()).unwrap();
        let article = store.get(&Slug::from("plain")).unwrap();
        assert_eq!(article.title, "");
        assert!(article.published.is_none());
        assert_eq!(article.body, "Just prose, no metadata.");
    }

    #[test]
    fn get_by_slug() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "findable.md", &post("Findable", "2024-01-01", &[]));

        let store = ContentStore::scan(dir.path()).unwrap();
        assert!(store.get(&Slug::from("findable")).is_some());
        assert!(store.get(&Slug::from("missing")).is_none());
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(ContentStore::scan("/no/such/dir/folio").is_err());
    }
}
