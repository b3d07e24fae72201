//! Static site builder
//!
//! Writes the rendered site to an output directory: paginated index
//! pages, one page per article, and the about page. Display policies
//! live here (the engines return full result sets): related articles
//! cap at [`MAX_RELATED_DISPLAY`], index cards show at most
//! [`MAX_KEYWORD_BADGES`] keyword badges, and the index runs newest
//! first.

use crate::content::{Article, ContentStore};
use crate::navigate::neighbors;
use crate::query::{page_window, IndexPage, IndexQuery, DEFAULT_PAGE_SIZE};
use crate::reader::extract_headings;
use crate::relate::related_articles;
use crate::render;
use crate::topics::topic_categories;
use pulldown_cmark_escape::escape_html;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Related articles shown on an article page
pub const MAX_RELATED_DISPLAY: usize = 4;

/// Keyword badges shown on an index card
pub const MAX_KEYWORD_BADGES: usize = 3;

/// Errors that can occur while writing the site
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("cannot write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for site builds
pub type SiteResult<T> = Result<T, SiteError>;

/// Builds a static site from a scanned content store.
pub struct SiteBuilder {
    out_dir: PathBuf,
    site_title: String,
    about_markdown: String,
    page_size: usize,
}

impl SiteBuilder {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            site_title: "Research Articles".to_string(),
            about_markdown: "A personal research log.".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the site title shown on the index header
    pub fn site_title(mut self, title: impl Into<String>) -> Self {
        self.site_title = title.into();
        self
    }

    /// Override the about page body (markdown)
    pub fn about_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.about_markdown = markdown.into();
        self
    }

    /// Override the index page size
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Write the whole site. Returns the number of pages written.
    pub fn build(&self, store: &ContentStore) -> SiteResult<usize> {
        let mut written = 0;

        // The index runs newest first; undated articles end up last
        let mut newest_first: Vec<Article> = store.articles().to_vec();
        newest_first.sort_by(|a, b| b.published.cmp(&a.published));

        let first = IndexQuery::new().page_size(self.page_size).execute(&newest_first);
        let total_pages = first.total_pages.max(1);
        for page_no in 1..=total_pages {
            let page = IndexQuery::new()
                .page_size(self.page_size)
                .page(page_no)
                .execute(&newest_first);
            let path = match page_no {
                1 => self.out_dir.join("index.html"),
                n => self.out_dir.join("page").join(n.to_string()).join("index.html"),
            };
            write_page(&path, &self.index_page(&page, total_pages))?;
            written += 1;
        }

        for article in store.articles() {
            let path = self
                .out_dir
                .join("articles")
                .join(article.slug.as_str())
                .join("index.html");
            write_page(&path, &self.article_page(article, store.articles()))?;
            written += 1;
        }

        write_page(&self.out_dir.join("about").join("index.html"), &self.about_page())?;
        written += 1;

        info!(
            "site build wrote {} page(s) to {}",
            written,
            self.out_dir.display()
        );
        Ok(written)
    }

    fn index_page(&self, page: &IndexPage, total_pages: usize) -> String {
        let mut cards = String::new();
        if page.items.is_empty() {
            cards.push_str("<p>No articles found.</p>\n");
        }
        for article in &page.items {
            let badges: String = article
                .keywords
                .iter()
                .take(MAX_KEYWORD_BADGES)
                .map(|k| format!(r#"<span class="badge">{}</span>"#, escape(k)))
                .collect();
            let topics: String = topic_categories(&article.keywords)
                .iter()
                .map(|t| format!(r#"<span class="topic">{}</span>"#, t))
                .collect();
            cards.push_str(&format!(
                "<article class=\"card\">\n\
                 <h2><a href=\"/articles/{slug}/\">{title}</a></h2>\n\
                 <div class=\"labels\">{badges}</div>\n\
                 <div class=\"meta\">{topics}<span class=\"date\">{date}</span></div>\n\
                 </article>\n",
                slug = escape(article.slug.as_str()),
                title = escape(&article.title),
                badges = badges,
                topics = topics,
                date = escape(&article.raw_date),
            ));
        }

        let mut pager = String::new();
        if total_pages > 1 {
            for n in page_window(page.page, total_pages) {
                let href = if n == 1 {
                    "/".to_string()
                } else {
                    format!("/page/{}/", n)
                };
                let class = if n == page.page { "page current" } else { "page" };
                pager.push_str(&format!(r#"<a class="{}" href="{}">{}</a>"#, class, href, n));
            }
            if let Some((from, to)) = page.item_range() {
                pager.push_str(&format!(
                    "<span class=\"range\">Showing {}-{} of {} articles</span>",
                    from, to, page.total_count
                ));
            }
        }

        self.shell(
            &self.site_title,
            &format!(
                "<h1>{}</h1>\n{}<nav class=\"pager\">{}</nav>\n",
                escape(&self.site_title),
                cards,
                pager
            ),
        )
    }

    fn article_page(&self, article: &Article, all: &[Article]) -> String {
        let headings = extract_headings(&article.body);
        let body_html = render::article_html(&article.body, &headings);

        let mut meta: Vec<String> = Vec::new();
        if !article.raw_date.is_empty() {
            meta.push(escape(&article.raw_date));
        }
        if let Some(ref author) = article.author {
            meta.push(escape(author));
        }
        if let Some(minutes) = article.read_time {
            meta.push(format!("{} min read", minutes));
        }

        let badges: String = article
            .keywords
            .iter()
            .map(|k| format!(r#"<span class="badge">{}</span>"#, escape(k)))
            .collect();

        let mut contents = String::new();
        if !headings.is_empty() {
            contents.push_str("<nav class=\"contents\">");
            for h in &headings {
                contents.push_str(&format!(
                    r##"<a class="level-{}" href="#{}">{}</a>"##,
                    h.level,
                    escape(&h.id),
                    escape(&h.text)
                ));
            }
            contents.push_str("</nav>\n");
        }

        let figure = match article.image {
            Some(ref src) => {
                let caption = article
                    .image_caption
                    .as_ref()
                    .map(|c| format!("<figcaption>{}</figcaption>", escape(c)))
                    .unwrap_or_default();
                format!(
                    "<figure><img src=\"{}\" alt=\"{}\">{}</figure>\n",
                    escape(src),
                    escape(&article.title),
                    caption
                )
            }
            None => String::new(),
        };

        let nav = neighbors(&article.slug, all);
        let mut pager = String::new();
        if let Some(prev) = nav.previous {
            pager.push_str(&format!(
                "<a class=\"previous\" href=\"/articles/{}/\">&larr; {}</a>",
                escape(prev.slug.as_str()),
                escape(&prev.title)
            ));
        }
        if let Some(next) = nav.next {
            pager.push_str(&format!(
                "<a class=\"next\" href=\"/articles/{}/\">{} &rarr;</a>",
                escape(next.slug.as_str()),
                escape(&next.title)
            ));
        }

        let mut related_html = String::new();
        let mut related = related_articles(article, all);
        related.truncate(MAX_RELATED_DISPLAY);
        if !related.is_empty() {
            related_html.push_str("<section class=\"related\"><h2>Related Articles</h2>\n");
            for r in &related {
                let noun = if r.shared_keywords == 1 { "topic" } else { "topics" };
                related_html.push_str(&format!(
                    "<a href=\"/articles/{}/\"><strong>{}</strong> <span>{} shared {}</span></a>\n",
                    escape(r.slug.as_str()),
                    escape(&r.title),
                    r.shared_keywords,
                    noun
                ));
            }
            related_html.push_str("</section>\n");
        }

        self.shell(
            &article.title,
            &format!(
                "{contents}<article>\n<h1>{title}</h1>\n\
                 <div class=\"meta\">{meta}</div>\n\
                 <div class=\"labels\">{badges}</div>\n\
                 {figure}<div class=\"article-content\">\n{body}</div>\n</article>\n\
                 <nav class=\"sequence\">{pager}</nav>\n{related}",
                contents = contents,
                title = escape(&article.title),
                meta = meta.join(" &bull; "),
                badges = badges,
                figure = figure,
                body = body_html,
                pager = pager,
                related = related_html,
            ),
        )
    }

    fn about_page(&self) -> String {
        self.shell(
            "About",
            &format!(
                "<h1>About</h1>\n<div class=\"prose\">\n{}</div>\n",
                render::markdown_to_html(&self.about_markdown)
            ),
        )
    }

    fn shell(&self, title: &str, main: &str) -> String {
        format!(
            "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n</head>\n<body>\n\
             <header><nav><a href=\"/\">Articles</a> <a href=\"/about/\">About</a></nav></header>\n\
             <main>\n{main}</main>\n</body>\n</html>\n",
            title = escape(title),
            main = main,
        )
    }
}

fn write_page(path: &Path, html: &str) -> SiteResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SiteError::Write {
            path: parent.display().to_string(),
            source,
        })?;
    }
    std::fs::write(path, html).map_err(|source| SiteError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn escape(s: &str) -> String {
    let mut out = String::new();
    let _ = escape_html(&mut out, s);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Slug;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<b>&\"quoted\"</b>"), "&lt;b&gt;&amp;&quot;quoted&quot;&lt;/b&gt;");
    }

    #[test]
    fn article_page_truncates_related_to_four() {
        let make = |slug: &str| Article {
            slug: Slug::from(slug),
            title: slug.to_string(),
            raw_date: String::new(),
            published: None,
            author: None,
            read_time: None,
            keywords: vec!["shared".to_string()],
            image: None,
            image_caption: None,
            body: String::new(),
        };

        let target = make("target");
        let all: Vec<Article> = ["target", "r1", "r2", "r3", "r4", "r5"]
            .iter()
            .map(|s| make(s))
            .collect();

        let html = SiteBuilder::new("/tmp/unused").article_page(&target, &all);
        for shown in ["r1", "r2", "r3", "r4"] {
            assert!(html.contains(&format!("/articles/{}/", shown)));
        }
        assert!(!html.contains("/articles/r5/"));
    }
}
