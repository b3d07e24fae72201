//! Index queries over the article list
//!
//! Search, label filtering, and pagination for the site's index page.
//! Queries are pure functions over the store's article slice; UI state
//! (current term, selected label, page) stays with the caller.

mod index;
mod types;

pub use index::{IndexQuery, DEFAULT_PAGE_SIZE};
pub use types::{page_window, IndexPage};
