//! Index queries: search, label filter, pagination

use super::types::IndexPage;
use crate::content::Article;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query over the article index.
///
/// Search and label filters conjoin. Pages are 1-indexed; requesting a
/// page beyond range yields an empty item set rather than clamping —
/// callers are expected to clamp (and to reset to page 1 whenever a
/// filter changes).
#[derive(Debug, Clone)]
pub struct IndexQuery {
    /// Case-insensitive substring match on title or any keyword
    pub search: Option<String>,
    /// Exact case-insensitive match of at least one keyword
    pub label: Option<String>,
    /// 1-indexed page number
    pub page: usize,
    /// Articles per page
    pub page_size: usize,
}

impl Default for IndexQuery {
    fn default() -> Self {
        Self {
            search: None,
            label: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl IndexQuery {
    /// Create a query matching all articles, page 1, default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by free-text search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter by exact keyword label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Select a page (1-indexed)
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Override the page size (minimum 1)
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Execute the query against the article list.
    pub fn execute(&self, articles: &[Article]) -> IndexPage {
        let page_size = self.page_size.max(1);
        let filtered: Vec<&Article> = articles.iter().filter(|a| self.matches(a)).collect();

        let total_count = filtered.len();
        let total_pages = total_count.div_ceil(page_size);

        // Page 0 and pages past the end both land here: empty, no error
        let items = match self.page.checked_sub(1).map(|p| p * page_size) {
            Some(start) if start < total_count => filtered
                [start..(start + page_size).min(total_count)]
                .iter()
                .map(|a| (*a).clone())
                .collect(),
            _ => Vec::new(),
        };

        IndexPage {
            items,
            page: self.page,
            page_size,
            total_pages,
            total_count,
        }
    }

    /// Check whether an article passes both filters
    fn matches(&self, article: &Article) -> bool {
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            if !term.is_empty() {
                let in_title = article.title.to_lowercase().contains(&term);
                let in_keywords = article
                    .keywords
                    .iter()
                    .any(|k| k.to_lowercase().contains(&term));
                if !in_title && !in_keywords {
                    return false;
                }
            }
        }

        if let Some(ref label) = self.label {
            if !label.is_empty() {
                let label = label.to_lowercase();
                if !article.keywords.iter().any(|k| k.to_lowercase() == label) {
                    return false;
                }
            }
        }

        true
    }
}
