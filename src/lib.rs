//! # rapid-pagerank
//!
//! PageRank for small, fully known link graphs. Two independent estimators
//! share one random-surfer transition model:
//!
//! - [`sample_pagerank`]: a random walk whose visit frequencies estimate rank
//! - [`iterate_pagerank`]: power iteration of the PageRank recurrence
//!
//! Both treat a page without outbound links as linking to every page, so no
//! probability mass leaks out of the graph.
//!
//! ```rust,ignore
//! use rapid_pagerank::{iterate_pagerank, sample_pagerank, LinkGraph};
//!
//! let graph = LinkGraph::from_adjacency(vec![("a", vec!["b"]), ("b", vec!["a"])])?;
//! let sampled = sample_pagerank(&graph, 0.85, 10_000)?;
//! let exact = iterate_pagerank(&graph, 0.85)?;
//! for (page, rank) in exact.ranked() {
//!     println!("{page}: {rank:.4}");
//! }
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod observer;
pub mod pagerank;

pub use config::RankConfig;
pub use error::{RankError, Result};
pub use graph::{GraphBuilder, LinkGraph};
pub use observer::{DeltaHistory, NoopObserver, RankObserver};
pub use pagerank::{
    iterate_pagerank, sample_pagerank, transition_model, Distribution, IterativePageRank,
    PageRankResult, SampleResult, SamplingPageRank,
};
