//! Folio CLI — scan a posts directory, query it, build the site.
//!
//! Usage:
//!   folio build [--content DIR] [--out DIR]
//!   folio list [--content DIR] [--json]
//!   folio show <slug> [--content DIR] [--json]
//!   folio search <term> [--label LABEL] [--page N] [--per-page N]

use clap::{Parser, Subcommand};
use folio::{
    neighbors, page_window, related_articles, topic_categories, ContentStore, IndexQuery,
    SiteBuilder, Slug, DEFAULT_PAGE_SIZE, MAX_RELATED_DISPLAY,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Content engine and static site builder for a personal writing site"
)]
struct Cli {
    /// Path to the posts directory
    #[arg(long, global = true, default_value = "posts")]
    content: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output directory
        #[arg(long, default_value = "public")]
        out: PathBuf,
    },
    /// List all articles
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one article: metadata, topics, related, neighbors
    Show {
        /// Slug of the article
        slug: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search the article index
    Search {
        /// Free-text search term
        term: String,
        /// Exact keyword label filter
        #[arg(long)]
        label: Option<String>,
        /// 1-indexed page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Articles per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: usize,
    },
}

fn open_store(content: &PathBuf) -> Result<ContentStore, String> {
    ContentStore::scan(content).map_err(|e| format!("Failed to scan content: {}", e))
}

fn cmd_build(store: &ContentStore, out: &PathBuf) -> i32 {
    match SiteBuilder::new(out).build(store) {
        Ok(pages) => {
            println!("Wrote {} page(s) to {}", pages, out.display());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_list(store: &ContentStore, json: bool) -> i32 {
    if json {
        let summaries: Vec<_> = store
            .articles()
            .iter()
            .map(|a| {
                serde_json::json!({
                    "slug": a.slug,
                    "title": a.title,
                    "date": a.raw_date,
                    "keywords": a.keywords,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries).unwrap_or_default());
        return 0;
    }

    if store.is_empty() {
        println!("No articles found.");
        return 0;
    }
    println!("{:<28}  {:<12}  {}", "SLUG", "DATE", "TITLE");
    println!("{}", "-".repeat(72));
    for article in store.articles() {
        println!(
            "{:<28}  {:<12}  {}",
            article.slug,
            article.raw_date,
            article.title
        );
    }
    0
}

fn cmd_show(store: &ContentStore, slug: &str, json: bool) -> i32 {
    let slug = Slug::from(slug);
    let Some(article) = store.get(&slug) else {
        eprintln!("Error: article '{}' not found", slug);
        return 1;
    };

    let mut related = related_articles(article, store.articles());
    related.truncate(MAX_RELATED_DISPLAY);
    let nav = neighbors(&slug, store.articles());
    let topics = topic_categories(&article.keywords);

    if json {
        let out = serde_json::json!({
            "slug": article.slug,
            "title": article.title,
            "date": article.raw_date,
            "author": article.author,
            "readTime": article.read_time,
            "keywords": article.keywords,
            "topics": topics,
            "related": related,
            "previous": nav.previous,
            "next": nav.next,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return 0;
    }

    println!("{}", article.title);
    println!("{}", "-".repeat(article.title.len().max(8)));
    if !article.raw_date.is_empty() {
        println!("Date:     {}", article.raw_date);
    }
    if let Some(ref author) = article.author {
        println!("Author:   {}", author);
    }
    if let Some(minutes) = article.read_time {
        println!("Read:     {} min", minutes);
    }
    if !article.keywords.is_empty() {
        println!("Keywords: {}", article.keywords.join(", "));
    }
    let topic_labels: Vec<_> = topics.iter().map(|t| t.label()).collect();
    println!("Topics:   {}", topic_labels.join(", "));

    if let Some(prev) = nav.previous {
        println!("Previous: {} ({})", prev.title, prev.slug);
    }
    if let Some(next) = nav.next {
        println!("Next:     {} ({})", next.title, next.slug);
    }

    if !related.is_empty() {
        println!("Related:");
        for r in &related {
            let noun = if r.shared_keywords == 1 { "topic" } else { "topics" };
            println!("  {} ({} shared {})", r.title, r.shared_keywords, noun);
        }
    }
    0
}

fn cmd_search(
    store: &ContentStore,
    term: &str,
    label: Option<&str>,
    page: usize,
    per_page: usize,
) -> i32 {
    let mut query = IndexQuery::new()
        .with_search(term)
        .page(page)
        .page_size(per_page);
    if let Some(label) = label {
        query = query.with_label(label);
    }

    let result = query.execute(store.articles());
    if result.total_count == 0 {
        println!("No articles found matching your search.");
        return 0;
    }

    for article in &result.items {
        println!("{:<28}  {:<12}  {}", article.slug, article.raw_date, article.title);
    }

    match result.item_range() {
        Some((from, to)) => {
            println!("Showing {}-{} of {} articles", from, to, result.total_count)
        }
        None => println!(
            "Page {} is out of range ({} page(s) available)",
            page, result.total_pages
        ),
    }

    if result.total_pages > 1 {
        let window: Vec<String> = page_window(result.page, result.total_pages)
            .into_iter()
            .map(|n| {
                if n == result.page {
                    format!("[{}]", n)
                } else {
                    n.to_string()
                }
            })
            .collect();
        println!("Pages: {}", window.join(" "));
    }
    0
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    let store = match open_store(&cli.content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Build { out } => cmd_build(&store, &out),
        Commands::List { json } => cmd_list(&store, json),
        Commands::Show { slug, json } => cmd_show(&store, &slug, json),
        Commands::Search {
            term,
            label,
            page,
            per_page,
        } => cmd_search(&store, &term, label.as_deref(), page, per_page),
    };
    std::process::exit(code);
}
