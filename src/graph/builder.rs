//! Graph builder with efficient link handling
//!
//! This module provides a mutable, directed link graph builder that uses
//! FxHashMap for O(1) page lookups during construction.

use crate::error::{RankError, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// A page in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The page identifier
    pub name: String,
    /// Outbound links: target page IDs
    pub links: FxHashSet<u32>,
}

impl BuilderNode {
    /// Create a new page with no links
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: FxHashSet::default(),
        }
    }
}

/// A mutable link graph builder optimized for incremental construction
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps page name -> page ID
    name_to_id: FxHashMap<String, u32>,
    /// Page storage
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            name_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(page_capacity: usize) -> Self {
        Self {
            name_to_id: FxHashMap::with_capacity_and_hasher(page_capacity, Default::default()),
            nodes: Vec::with_capacity(page_capacity),
        }
    }

    /// Get or create a page with the given name, returning its ID
    pub fn get_or_create_page(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.name_to_id.insert(name.to_string(), id);
        self.nodes.push(BuilderNode::new(name));
        id
    }

    /// Add a directed link `from -> to`
    ///
    /// Links form a set: adding the same link twice has no further effect.
    pub fn add_link(&mut self, from: u32, to: u32) {
        if (to as usize) >= self.nodes.len() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.links.insert(to);
        }
    }

    /// Build from a page -> outbound links mapping
    ///
    /// Pages are registered in sorted name order so IDs do not depend on the
    /// iteration order of the input map. Every link target must itself be a
    /// page of the mapping.
    pub fn from_adjacency<I, P, L, S>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: AsRef<str>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, Vec<String>)> = adjacency
            .into_iter()
            .map(|(page, links)| {
                let links = links.into_iter().map(|l| l.as_ref().to_string()).collect();
                (page.as_ref().to_string(), links)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut builder = Self::with_capacity(entries.len());
        for (page, _) in &entries {
            builder.get_or_create_page(page);
        }

        for (page, links) in &entries {
            let from = builder.name_to_id[page.as_str()];
            for target in links {
                let to = builder
                    .get_page_id(target)
                    .ok_or_else(|| RankError::UnknownPage(target.clone()))?;
                builder.add_link(from, to);
            }
        }

        Ok(builder)
    }

    /// Get the number of pages in the graph
    pub fn page_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of directed links
    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(|n| n.links.len()).sum()
    }

    /// Get a page by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a page ID by name
    pub fn get_page_id(&self, name: &str) -> Option<u32> {
        self.name_to_id.get(name).copied()
    }

    /// Get the name for a page ID
    pub fn page_name(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.name.as_str())
    }

    /// Iterate over all pages
    pub fn pages(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_graph_builder_basic() {
        let mut builder = GraphBuilder::new();

        let id_a = builder.get_or_create_page("a.html");
        let id_b = builder.get_or_create_page("b.html");
        let id_c = builder.get_or_create_page("a.html"); // duplicate

        assert_eq!(id_a, id_c);
        assert_ne!(id_a, id_b);
        assert_eq!(builder.page_count(), 2);
    }

    #[test]
    fn test_links_are_directed_and_deduplicated() {
        let mut builder = GraphBuilder::new();

        let a = builder.get_or_create_page("a");
        let b = builder.get_or_create_page("b");

        builder.add_link(a, b);
        builder.add_link(a, b);

        assert_eq!(builder.link_count(), 1);
        assert!(builder.get_node(a).unwrap().links.contains(&b));
        assert!(builder.get_node(b).unwrap().links.is_empty());
    }

    #[test]
    fn test_link_to_missing_page_ignored() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_page("a");

        builder.add_link(a, 7);

        assert_eq!(builder.link_count(), 0);
    }

    #[test]
    fn test_from_adjacency_sorted_ids() {
        let mut adjacency: HashMap<String, HashSet<String>> = HashMap::new();
        adjacency.insert("c".into(), HashSet::from(["a".to_string()]));
        adjacency.insert("a".into(), HashSet::from(["b".to_string(), "c".to_string()]));
        adjacency.insert("b".into(), HashSet::new());

        let builder = GraphBuilder::from_adjacency(&adjacency).unwrap();

        assert_eq!(builder.page_name(0), Some("a"));
        assert_eq!(builder.page_name(1), Some("b"));
        assert_eq!(builder.page_name(2), Some("c"));
        assert_eq!(builder.link_count(), 3);
    }

    #[test]
    fn test_from_adjacency_rejects_unknown_target() {
        let adjacency = vec![("a", vec!["missing"])];

        let err = GraphBuilder::from_adjacency(adjacency).unwrap_err();

        assert!(matches!(err, RankError::UnknownPage(ref p) if p == "missing"));
    }
}
