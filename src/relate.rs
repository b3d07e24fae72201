//! Related-article ranking by shared keywords
//!
//! Two articles are related when their keyword lists overlap. The count
//! is taken over the target's entries (repeats included, case-sensitive),
//! so a keyword the target lists twice contributes twice when the other
//! article carries it.

use crate::content::{Article, Slug};
use serde::Serialize;

/// A ranked relationship to another article. Derived per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedArticle {
    pub slug: Slug,
    pub title: String,
    /// Number of the target's keyword entries found in this article
    pub shared_keywords: usize,
}

/// Rank `others` by keyword overlap with `target`.
///
/// Zero-overlap articles and the target itself are excluded. The result
/// is the full ranked list, descending by shared count, stable with
/// respect to the input order on ties — display truncation is the
/// presentation layer's job.
pub fn related_articles(target: &Article, others: &[Article]) -> Vec<RelatedArticle> {
    let mut related: Vec<RelatedArticle> = others
        .iter()
        .filter(|other| other.slug != target.slug)
        .filter_map(|other| {
            let shared = shared_keyword_count(target, other);
            (shared > 0).then(|| RelatedArticle {
                slug: other.slug.clone(),
                title: other.title.clone(),
                shared_keywords: shared,
            })
        })
        .collect();

    // Vec::sort_by is stable, so ties keep enumeration order
    related.sort_by(|a, b| b.shared_keywords.cmp(&a.shared_keywords));
    related
}

/// Count the target's keyword entries that occur in `other`'s list.
fn shared_keyword_count(target: &Article, other: &Article) -> usize {
    target
        .keywords
        .iter()
        .filter(|k| other.keywords.contains(k))
        .count()
}
