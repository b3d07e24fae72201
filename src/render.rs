//! Markdown body rendering
//!
//! The body is opaque to the engines; this is the one place it turns
//! into displayable HTML.

use crate::reader::Heading;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Render a markdown body to an HTML fragment.
pub fn markdown_to_html(body: &str) -> String {
    let parser = Parser::new_ext(body, Options::all());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render an article body with heading anchors.
///
/// `headings` is the extracted list for this body; its ids are assigned
/// to the heading tags in document order so contents-outline links
/// resolve. Headings carrying an explicit id keep it (the extracted
/// list already does).
pub fn article_html(body: &str, headings: &[Heading]) -> String {
    let mut next = headings.iter();
    let events = Parser::new_ext(body, Options::all()).map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            classes,
            attrs,
            ..
        }) => {
            let id = next.next().map(|h| CowStr::from(h.id.clone()));
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            })
        }
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}
