//! Previous/next navigation in publication order
//!
//! Articles are ordered ascending by publication date. Missing or
//! malformed dates sort earliest (`None < Some` on
//! [`Article::published`]); articles sharing a date keep enumeration
//! order via the stable sort.

use crate::content::{Article, Slug};
use serde::Serialize;

/// A link to a neighboring article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationLink {
    pub slug: Slug,
    pub title: String,
}

impl NavigationLink {
    fn from_article(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
        }
    }
}

/// The neighbors of one article in date-ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub previous: Option<NavigationLink>,
    pub next: Option<NavigationLink>,
}

/// Locate `target`'s predecessor and successor.
///
/// An absent slug yields `{None, None}` rather than an error — it
/// reflects a data-consistency issue in the caller's list, not a fault.
pub fn neighbors(target: &Slug, articles: &[Article]) -> Neighbors {
    let mut ordered: Vec<&Article> = articles.iter().collect();
    ordered.sort_by_key(|a| a.published);

    let Some(idx) = ordered.iter().position(|a| &a.slug == target) else {
        return Neighbors::default();
    };

    Neighbors {
        previous: idx
            .checked_sub(1)
            .map(|i| NavigationLink::from_article(ordered[i])),
        next: ordered
            .get(idx + 1)
            .map(|a| NavigationLink::from_article(a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(slug: &str, date: &str) -> Article {
        Article {
            slug: Slug::from(slug),
            title: slug.to_uppercase(),
            raw_date: date.to_string(),
            published: crate::content::published_date(date),
            author: None,
            read_time: None,
            keywords: Vec::new(),
            image: None,
            image_caption: None,
            body: String::new(),
        }
    }

    fn timeline() -> Vec<Article> {
        vec![
            article("middle", "2024-02-01"),
            article("oldest", "2024-01-01"),
            article("newest", "2024-03-01"),
        ]
    }

    #[test]
    fn first_has_no_previous() {
        let nav = neighbors(&Slug::from("oldest"), &timeline());
        assert!(nav.previous.is_none());
        assert_eq!(nav.next.unwrap().slug.as_str(), "middle");
    }

    #[test]
    fn last_has_no_next() {
        let nav = neighbors(&Slug::from("newest"), &timeline());
        assert_eq!(nav.previous.unwrap().slug.as_str(), "middle");
        assert!(nav.next.is_none());
    }

    #[test]
    fn interior_links_are_mutual() {
        // previous(next(x)) == x for every interior article
        let articles = timeline();
        let nav = neighbors(&Slug::from("middle"), &articles);
        let next = nav.next.unwrap();
        let back = neighbors(&next.slug, &articles);
        assert_eq!(back.previous.unwrap().slug.as_str(), "middle");
    }

    #[test]
    fn absent_slug_yields_no_neighbors() {
        let nav = neighbors(&Slug::from("ghost"), &timeline());
        assert_eq!(nav, Neighbors::default());
    }

    #[test]
    fn undated_articles_sort_earliest() {
        let articles = vec![article("dated", "2024-01-01"), article("undated", "nope")];
        let nav = neighbors(&Slug::from("undated"), &articles);
        assert!(nav.previous.is_none());
        assert_eq!(nav.next.unwrap().slug.as_str(), "dated");
    }

    #[test]
    fn date_ties_keep_enumeration_order() {
        let articles = vec![article("first", "2024-01-01"), article("second", "2024-01-01")];
        let nav = neighbors(&Slug::from("first"), &articles);
        assert!(nav.previous.is_none());
        assert_eq!(nav.next.unwrap().slug.as_str(), "second");
    }
}
