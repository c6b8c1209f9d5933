//! Compressed Sparse Row (CSR) link graph
//!
//! CSR is optimized for iteration over outbound links, which is exactly what
//! both the random surfer and power iteration need.

use super::builder::GraphBuilder;
use crate::error::Result;
use rustc_hash::FxHashMap;

/// An immutable directed link graph in Compressed Sparse Row format
///
/// Page `i`'s outbound links are stored sorted at
/// `col_idx[row_ptr[i]..row_ptr[i + 1]]`.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    /// Number of pages
    pub num_pages: usize,
    /// Row pointers: page i's links are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target pages) for each link
    pub col_idx: Vec<u32>,
    /// Out-degree for each page
    pub out_degree: Vec<u32>,
    /// Page names, indexed by page ID
    pub pages: Vec<String>,
    page_index: FxHashMap<String, u32>,
}

impl LinkGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_pages = builder.page_count();
        let mut row_ptr = Vec::with_capacity(num_pages + 1);
        let mut col_idx = Vec::with_capacity(builder.link_count());
        let mut out_degree = Vec::with_capacity(num_pages);
        let mut pages = Vec::with_capacity(num_pages);
        let mut page_index =
            FxHashMap::with_capacity_and_hasher(num_pages, Default::default());

        row_ptr.push(0);

        for (id, node) in builder.pages() {
            pages.push(node.name.clone());
            page_index.insert(node.name.clone(), id);

            // Sorted for deterministic iteration and binary-searchable rows
            let mut links: Vec<u32> = node.links.iter().copied().collect();
            links.sort_unstable();

            out_degree.push(links.len() as u32);
            col_idx.extend(links);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_pages,
            row_ptr,
            col_idx,
            out_degree,
            pages,
            page_index,
        }
    }

    /// Build directly from a page -> outbound links mapping
    ///
    /// See [`GraphBuilder::from_adjacency`] for the accepted shapes.
    pub fn from_adjacency<I, P, L, S>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: AsRef<str>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let builder = GraphBuilder::from_adjacency(adjacency)?;
        Ok(Self::from_builder(&builder))
    }

    /// Iterate over the outbound links of a page
    pub fn neighbors(&self, page: u32) -> impl Iterator<Item = u32> + '_ {
        self.links(page).iter().copied()
    }

    /// Sorted slice of a page's outbound links
    pub fn links(&self, page: u32) -> &[u32] {
        let start = self.row_ptr[page as usize];
        let end = self.row_ptr[page as usize + 1];
        &self.col_idx[start..end]
    }

    /// Check whether `from` links to `to`
    pub fn links_to(&self, from: u32, to: u32) -> bool {
        self.links(from).binary_search(&to).is_ok()
    }

    /// Get the out-degree of a page
    pub fn degree(&self, page: u32) -> u32 {
        self.out_degree[page as usize]
    }

    /// Get the name of a page
    pub fn page_name(&self, page: u32) -> &str {
        &self.pages[page as usize]
    }

    /// Get a page ID by name
    pub fn page_id(&self, name: &str) -> Option<u32> {
        self.page_index.get(name).copied()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_pages == 0
    }

    /// Number of pages
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// Total number of directed links
    pub fn num_links(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling pages (pages with no outbound links)
    pub fn dangling_pages(&self) -> Vec<u32> {
        (0..self.num_pages as u32)
            .filter(|&p| self.out_degree[p as usize] == 0)
            .collect()
    }
}

impl Default for LinkGraph {
    fn default() -> Self {
        Self {
            num_pages: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            out_degree: Vec::new(),
            pages: Vec::new(),
            page_index: FxHashMap::default(),
        }
    }
}
