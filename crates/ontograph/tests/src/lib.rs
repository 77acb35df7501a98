//! Shared fixtures for the ontograph end-to-end and property suites.
//!
//! `term`, `hp_edges` and `part_of_edges` mirror the unit test fixtures of
//! `ontograph-graph` (`src/fixtures.rs`). Keep both copies in sync.

use ontograph_graph::{GraphEdge, RelationType, TermId};
use std::collections::{BTreeMap, BTreeSet};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness. Honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub fn term(value: &str) -> TermId {
    TermId::of(value).unwrap()
}

/// The ten-node HP hierarchy rooted at `HP:1`. `HP:0110` has two parents.
pub fn hp_edges() -> Vec<GraphEdge<TermId>> {
    [
        ("HP:01", "HP:1"),
        ("HP:02", "HP:1"),
        ("HP:03", "HP:1"),
        ("HP:010", "HP:01"),
        ("HP:011", "HP:01"),
        ("HP:0110", "HP:010"),
        ("HP:0110", "HP:011"),
        ("HP:020", "HP:02"),
        ("HP:021", "HP:02"),
        ("HP:022", "HP:02"),
    ]
    .into_iter()
    .map(|(s, o)| GraphEdge::is_a(term(s), term(o)))
    .collect()
}

/// Anatomy terms attached to the HP hierarchy with part-of edges.
pub fn part_of_edges() -> Vec<GraphEdge<TermId>> {
    [
        ("UBERON:1", "HP:011"),
        ("UBERON:2", "HP:0110"),
        ("UBERON:3", "HP:1"),
    ]
    .into_iter()
    .map(|(s, o)| GraphEdge::new(term(s), term(o), RelationType::part_of()))
    .collect()
}

pub fn set(values: &[&str]) -> BTreeSet<TermId> {
    values.iter().map(|v| term(v)).collect()
}

/// Reference closure computed straight from the edge list.
///
/// With `upwards` the walk goes from subjects to objects (ancestors),
/// otherwise from objects to subjects (descendants). The start node is not
/// part of the result unless it lies on a cycle.
pub fn naive_closure<T: Ord + Clone>(
    edges: &[GraphEdge<T>],
    hierarchy: &RelationType,
    start: &T,
    upwards: bool,
) -> BTreeSet<T> {
    let mut next: BTreeMap<&T, Vec<&T>> = BTreeMap::new();
    for edge in edges.iter().filter(|e| &e.relation_type == hierarchy) {
        let (from, to) = if upwards {
            (&edge.subject, &edge.object)
        } else {
            (&edge.object, &edge.subject)
        };
        next.entry(from).or_default().push(to);
    }

    let mut found = BTreeSet::new();
    let mut pending = vec![start];
    while let Some(node) = pending.pop() {
        for &neighbor in next.get(node).into_iter().flatten() {
            if found.insert(neighbor.clone()) {
                pending.push(neighbor);
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_closure_of_fixture() {
        let edges = hp_edges();
        let is_a = RelationType::is_a();
        assert_eq!(
            naive_closure(&edges, &is_a, &term("HP:0110"), true),
            set(&["HP:010", "HP:011", "HP:01", "HP:1"])
        );
        assert_eq!(
            naive_closure(&edges, &is_a, &term("HP:02"), false),
            set(&["HP:020", "HP:021", "HP:022"])
        );
        assert!(naive_closure(&edges, &RelationType::part_of(), &term("HP:1"), false).is_empty());
    }
}
