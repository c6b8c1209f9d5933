//! Corpus loading
//!
//! Turns a directory of HTML pages into a [`LinkGraph`]. Every `*.html` file
//! directly inside the directory is a page named by its file name; its
//! outbound links are the `href` targets of its anchor tags that name another
//! page of the corpus.

use std::collections::BTreeSet;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use walkdir::WalkDir;

use crate::error::Result;
use crate::graph::{GraphBuilder, LinkGraph};

lazy_static! {
    static ref ANCHOR_HREF: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("valid anchor regex");
}

const PAGE_EXTENSION: &str = ".html";

/// Extract the `href` targets of all anchor tags in an HTML document
pub fn parse_links(html: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Load every page in `dir` and link them into a graph
///
/// Links from a page to itself and links to files outside the corpus are
/// dropped. Symlinked pages are followed; subdirectories are not searched.
pub fn crawl(dir: impl AsRef<Path>) -> Result<LinkGraph> {
    let dir = dir.as_ref();
    let mut documents: Vec<(String, BTreeSet<String>)> = Vec::new();

    let walker = WalkDir::new(dir).follow_links(true).min_depth(1).max_depth(1);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(PAGE_EXTENSION) {
            continue;
        }

        let bytes = std::fs::read(entry.path())?;
        let html = String::from_utf8_lossy(&bytes);
        documents.push((name, parse_links(&html)));
    }
    documents.sort_by(|a, b| a.0.cmp(&b.0));

    let mut builder = GraphBuilder::with_capacity(documents.len());
    for (name, _) in &documents {
        builder.get_or_create_page(name);
    }

    for (name, links) in &documents {
        let from = builder.get_or_create_page(name);
        for link in links {
            if link == name {
                continue;
            }
            match builder.get_page_id(link) {
                Some(to) => builder.add_link(from, to),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(page = %name, link = %link, "dropping link outside corpus");
                }
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        corpus = %dir.display(),
        pages = builder.page_count(),
        links = builder.link_count(),
        "corpus loaded"
    );

    Ok(LinkGraph::from_builder(&builder))
}
