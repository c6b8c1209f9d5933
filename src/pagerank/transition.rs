//! Random-surfer transition model
//!
//! From any page the surfer follows one of the page's links with probability
//! `damping`, or jumps to a uniformly chosen page otherwise. A page without
//! links is treated as linking to every page, itself included.

use super::{check_inputs, Distribution};
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

/// Fill `out` with the next-page distribution for `page`, indexed by page ID
///
/// `out` is resized to the page count so one buffer can be reused across
/// calls. The caller guarantees that `page` is a valid ID of a non-empty graph.
pub fn transition_probabilities(graph: &LinkGraph, page: u32, damping: f64, out: &mut Vec<f64>) {
    let n = graph.num_pages();
    out.clear();

    let degree = graph.degree(page);
    if degree == 0 {
        // (1 - d) / N + d / N: every page is a link target
        out.resize(n, 1.0 / n as f64);
        return;
    }

    out.resize(n, (1.0 - damping) / n as f64);
    let follow = damping / degree as f64;
    for target in graph.neighbors(page) {
        out[target as usize] += follow;
    }
}

/// Probability distribution over which page the surfer visits after `page`
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    check_inputs(graph, damping)?;
    let id = graph
        .page_id(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;

    let mut probabilities = Vec::with_capacity(graph.num_pages());
    transition_probabilities(graph, id, damping, &mut probabilities);
    Ok(Distribution::from_scores(graph, &probabilities))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_corpus() -> LinkGraph {
        // 1.html -> 2.html; 2.html -> 1.html, 3.html; 3.html -> 2.html, 5.html;
        // 4.html -> 2.html; 5.html dangling
        LinkGraph::from_adjacency(vec![
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "5.html"]),
            ("4.html", vec!["2.html"]),
            ("5.html", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_linked_pages_get_follow_share() {
        let graph = build_corpus();
        let dist = transition_model(&graph, "2.html", 0.85).unwrap();

        let base = 0.15 / 5.0;
        let linked = base + 0.85 / 2.0;
        assert!((dist.get("1.html").unwrap() - linked).abs() < 1e-12);
        assert!((dist.get("3.html").unwrap() - linked).abs() < 1e-12);
        assert!((dist.get("2.html").unwrap() - base).abs() < 1e-12);
        assert!((dist.get("4.html").unwrap() - base).abs() < 1e-12);
        assert!((dist.get("5.html").unwrap() - base).abs() < 1e-12);
    }

    #[test]
    fn test_sums_to_one_with_all_keys() {
        let graph = build_corpus();
        for page in &graph.pages {
            let dist = transition_model(&graph, page, 0.85).unwrap();
            assert_eq!(dist.len(), graph.num_pages());
            assert!((dist.total() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dangling_page_is_uniform() {
        let graph = build_corpus();
        let dist = transition_model(&graph, "5.html", 0.85).unwrap();

        for (_, p) in dist.iter() {
            assert!((p - 0.2).abs() < 1e-12);
        }
        assert!((dist.get("5.html").unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_self_link_counts_as_link() {
        let graph = LinkGraph::from_adjacency(vec![("a", vec!["a"]), ("b", vec!["a"])]).unwrap();
        let dist = transition_model(&graph, "a", 0.5).unwrap();

        assert!((dist.get("a").unwrap() - 0.75).abs() < 1e-12);
        assert!((dist.get("b").unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_buffer_reuse() {
        let graph = build_corpus();
        let mut buf = vec![9.0; 17];

        transition_probabilities(&graph, 0, 0.85, &mut buf);

        assert_eq!(buf.len(), 5);
        assert!((buf.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_page_rejected() {
        let graph = build_corpus();
        let err = transition_model(&graph, "6.html", 0.85).unwrap_err();
        assert!(matches!(err, RankError::UnknownPage(ref p) if p == "6.html"));
    }

    #[test]
    fn test_invalid_damping_rejected() {
        let graph = build_corpus();
        assert!(matches!(
            transition_model(&graph, "1.html", 1.5),
            Err(RankError::InvalidDampingFactor(_))
        ));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let graph = LinkGraph::default();
        assert!(matches!(
            transition_model(&graph, "1.html", 0.85),
            Err(RankError::EmptyGraph)
        ));
    }
}
