//! Reading-state tracking for an article page
//!
//! The tracker owns two pieces of derived state, recomputed on every
//! scroll event: overall reading progress and the currently active
//! section. All viewport measurement goes through the [`Viewport`]
//! trait so the computation runs against a mock in tests.

use super::headings::Heading;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A heading becomes active once its top edge crosses this distance
/// from the viewport top, scrolling down.
pub const ACTIVE_TRIGGER_OFFSET: f64 = 150.0;

/// Fixed header height compensated when jumping to a section.
pub const HEADER_OFFSET: f64 = 80.0;

/// Delay before heading extraction, letting asynchronous content
/// rendering finish after navigation.
pub const HEADING_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Measurement capability of the rendered document.
///
/// `heading_top`/`heading_offset` return `None` when the anchor is no
/// longer present; the active-section scan skips such headings silently.
pub trait Viewport {
    /// Current scroll position from the document top
    fn scroll_top(&self) -> f64;
    /// Visible viewport height
    fn viewport_height(&self) -> f64;
    /// Full document height
    fn document_height(&self) -> f64;
    /// Top edge of the heading's element, relative to the viewport top
    fn heading_top(&self, id: &str) -> Option<f64>;
    /// Absolute document offset of the heading's element
    fn heading_offset(&self, id: &str) -> Option<f64>;
}

/// Derived reading state for the current scroll position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingState {
    /// 0–100 progress through the document
    pub progress: f64,
    /// Id of the active section's heading, `None` until one has
    /// crossed the trigger offset
    pub active_section: Option<String>,
}

/// Scroll tracker for one article page.
///
/// Dormant unless the current route is an article page (see
/// [`ScrollTracker::is_article_route`]); headings are extracted once
/// after the settle delay and stay fixed for the page's lifetime.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    headings: Vec<Heading>,
    state: ReadingState,
}

impl ScrollTracker {
    pub fn new(headings: Vec<Heading>) -> Self {
        Self {
            headings,
            state: ReadingState::default(),
        }
    }

    /// The tracking subsystem only runs on article pages.
    pub fn is_article_route(path: &str) -> bool {
        path.contains("/articles/")
    }

    /// The heading anchor set, in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Last computed state.
    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    /// Recompute progress and active section for the current scroll
    /// position. The active section is the last heading in document
    /// order whose top edge sits at or above the trigger offset.
    pub fn on_scroll(&mut self, viewport: &dyn Viewport) -> &ReadingState {
        let scrollable = viewport.document_height() - viewport.viewport_height();
        let progress = if scrollable > 0.0 {
            (viewport.scroll_top() / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let mut active = None;
        for heading in &self.headings {
            if let Some(top) = viewport.heading_top(&heading.id) {
                if top <= ACTIVE_TRIGGER_OFFSET {
                    active = Some(heading.id.clone());
                }
            }
        }

        self.state = ReadingState {
            progress,
            active_section: active,
        };
        &self.state
    }
}

/// Scroll position that brings a heading into view below the fixed
/// header. `None` when the anchor is gone.
pub fn scroll_target(viewport: &dyn Viewport, id: &str) -> Option<f64> {
    viewport.heading_offset(id).map(|offset| offset - HEADER_OFFSET)
}

/// One-shot timer for the post-navigation heading extraction.
///
/// Aborted on cancel or drop, so a tracker torn down before the delay
/// elapses never runs a stale extraction. Re-extraction is NOT triggered
/// by content mutation after the initial delay; content that settles
/// later than the delay is missed.
#[derive(Debug)]
pub struct SettleTimer {
    handle: JoinHandle<()>,
}

impl SettleTimer {
    /// Start a timer with the standard settle delay.
    pub fn start<F>(callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::with_delay(HEADING_SETTLE_DELAY, callback)
    }

    /// Start a timer with an explicit delay.
    pub fn with_delay<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self { handle }
    }

    /// Cancel the timer; the callback will not run.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for SettleTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Fixed-geometry viewport: headings live at absolute offsets,
    /// `heading_top` derives from the scroll position.
    struct MockViewport {
        scroll_top: f64,
        viewport_height: f64,
        document_height: f64,
        offsets: HashMap<String, f64>,
    }

    impl MockViewport {
        fn new(document_height: f64, offsets: &[(&str, f64)]) -> Self {
            Self {
                scroll_top: 0.0,
                viewport_height: 600.0,
                document_height,
                offsets: offsets
                    .iter()
                    .map(|(id, off)| (id.to_string(), *off))
                    .collect(),
            }
        }

        fn scrolled_to(mut self, top: f64) -> Self {
            self.scroll_top = top;
            self
        }
    }

    impl Viewport for MockViewport {
        fn scroll_top(&self) -> f64 {
            self.scroll_top
        }
        fn viewport_height(&self) -> f64 {
            self.viewport_height
        }
        fn document_height(&self) -> f64 {
            self.document_height
        }
        fn heading_top(&self, id: &str) -> Option<f64> {
            self.offsets.get(id).map(|off| off - self.scroll_top)
        }
        fn heading_offset(&self, id: &str) -> Option<f64> {
            self.offsets.get(id).copied()
        }
    }

    fn heading(id: &str) -> Heading {
        Heading {
            id: id.to_string(),
            text: id.to_string(),
            level: 2,
        }
    }

    fn tracker(ids: &[&str]) -> ScrollTracker {
        ScrollTracker::new(ids.iter().map(|id| heading(id)).collect())
    }

    #[test]
    fn progress_is_zero_at_top_and_full_at_bottom() {
        let mut t = tracker(&[]);
        // document 2600, viewport 600 → 2000 scrollable
        let state = t.on_scroll(&MockViewport::new(2600.0, &[]));
        assert_eq!(state.progress, 0.0);

        let state = t.on_scroll(&MockViewport::new(2600.0, &[]).scrolled_to(2000.0));
        assert_eq!(state.progress, 100.0);
    }

    #[test]
    fn progress_is_monotonic_in_scroll_position() {
        let mut t = tracker(&[]);
        let mut last = -1.0;
        for top in [0.0, 250.0, 500.0, 1500.0, 2000.0, 2500.0] {
            let state = t.on_scroll(&MockViewport::new(2600.0, &[]).scrolled_to(top));
            assert!(state.progress >= last);
            assert!(state.progress <= 100.0);
            last = state.progress;
        }
    }

    #[test]
    fn unscrollable_document_reads_zero() {
        let mut t = tracker(&[]);
        let state = t.on_scroll(&MockViewport::new(400.0, &[]));
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn no_section_active_before_first_crossing() {
        let mut t = tracker(&["intro", "middle"]);
        let vp = MockViewport::new(3000.0, &[("intro", 400.0), ("middle", 1200.0)]);
        let state = t.on_scroll(&vp);
        assert_eq!(state.active_section, None);
    }

    #[test]
    fn last_crossed_heading_wins() {
        let mut t = tracker(&["intro", "middle", "end"]);
        let offsets = [("intro", 400.0), ("middle", 1200.0), ("end", 2200.0)];

        // intro at top 100 (crossed), middle at 900, end at 1900
        let state = t.on_scroll(&MockViewport::new(3000.0, &offsets).scrolled_to(300.0));
        assert_eq!(state.active_section.as_deref(), Some("intro"));

        // middle at top 100 as well — both crossed, later one wins
        let state = t.on_scroll(&MockViewport::new(3000.0, &offsets).scrolled_to(1100.0));
        assert_eq!(state.active_section.as_deref(), Some("middle"));
    }

    #[test]
    fn exact_trigger_offset_counts_as_crossed() {
        let mut t = tracker(&["intro"]);
        let vp = MockViewport::new(3000.0, &[("intro", ACTIVE_TRIGGER_OFFSET)]);
        let state = t.on_scroll(&vp);
        assert_eq!(state.active_section.as_deref(), Some("intro"));
    }

    #[test]
    fn missing_anchor_is_skipped() {
        // "gone" is in the heading list but absent from the document
        let mut t = tracker(&["intro", "gone"]);
        let state = t
            .on_scroll(&MockViewport::new(3000.0, &[("intro", 400.0)]).scrolled_to(300.0));
        assert_eq!(state.active_section.as_deref(), Some("intro"));
    }

    #[test]
    fn route_gate_matches_article_pages_only() {
        assert!(ScrollTracker::is_article_route("/articles/ai-agents"));
        assert!(!ScrollTracker::is_article_route("/"));
        assert!(!ScrollTracker::is_article_route("/about"));
    }

    #[test]
    fn scroll_target_compensates_for_the_header() {
        let vp = MockViewport::new(3000.0, &[("intro", 400.0)]);
        assert_eq!(scroll_target(&vp, "intro"), Some(400.0 - HEADER_OFFSET));
        assert_eq!(scroll_target(&vp, "gone"), None);
    }

    #[tokio::test]
    async fn settle_timer_fires_after_the_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let _timer = SettleTimer::with_delay(Duration::from_millis(10), move || {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn dropped_timer_never_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let timer = SettleTimer::with_delay(Duration::from_millis(10), move || {
            flag.store(true, Ordering::SeqCst);
        });
        drop(timer);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn cancelled_timer_never_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let timer = SettleTimer::with_delay(Duration::from_millis(10), move || {
            flag.store(true, Ordering::SeqCst);
        });
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
