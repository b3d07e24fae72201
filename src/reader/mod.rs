//! Client-side reading state: headings, scroll progress, active section
//!
//! The DOM-coupled pieces (element positions, scroll offsets) sit behind
//! the [`Viewport`] trait; everything else is pure computation over the
//! extracted heading list.

mod headings;
mod tracker;

pub use headings::{derive_heading_id, extract_headings, Heading};
pub use tracker::{
    scroll_target, ReadingState, ScrollTracker, SettleTimer, Viewport, ACTIVE_TRIGGER_OFFSET,
    HEADER_OFFSET, HEADING_SETTLE_DELAY,
};
