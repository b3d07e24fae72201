//! Folio: content engine for a static personal writing site
//!
//! Scans a posts directory of markdown files with YAML frontmatter and
//! computes everything the site's pages need: related articles by
//! shared keywords, previous/next navigation in publication order,
//! index search/filter/pagination, topic categories, and client-side
//! reading state (scroll progress, active section) behind a viewport
//! trait.
//!
//! # Core Concepts
//!
//! - **Articles**: one per content file, identified by a filename-derived slug
//! - **Engines**: pure functions over the article list; UI state stays with the caller
//! - **Site**: a thin presentation layer writing static pages to disk
//!
//! # Example
//!
//! ```
//! use folio::IndexQuery;
//!
//! let page = IndexQuery::new().with_search("ai").execute(&[]);
//! assert_eq!(page.total_count, 0);
//! ```

mod content;
pub mod navigate;
pub mod query;
pub mod reader;
pub mod relate;
pub mod render;
pub mod site;
pub mod topics;

pub use content::{
    published_date, Article, ContentError, ContentResult, ContentStore, Frontmatter, Slug,
};
pub use navigate::{neighbors, NavigationLink, Neighbors};
pub use query::{page_window, IndexPage, IndexQuery, DEFAULT_PAGE_SIZE};
pub use reader::{
    extract_headings, scroll_target, Heading, ReadingState, ScrollTracker, SettleTimer, Viewport,
};
pub use relate::{related_articles, RelatedArticle};
pub use site::{SiteBuilder, SiteError, SiteResult, MAX_RELATED_DISPLAY};
pub use topics::{topic_categories, TopicCategory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
