use crate::error::{GraphError, Result};
use ontograph_types::{GraphEdge, RelationType};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Position of `node` in the sorted node universe.
pub(crate) fn index_of<T: Ord + Display>(nodes: &[T], node: &T) -> Result<usize> {
    nodes
        .binary_search(node)
        .map_err(|_| GraphError::NodeNotFound(node.to_string()))
}

/// Distinct relation types of `edges`, in first-seen order.
pub fn distinct_relation_types<T>(edges: &[GraphEdge<T>]) -> Vec<RelationType> {
    let mut types: Vec<RelationType> = Vec::new();
    for edge in edges {
        if !types.contains(&edge.relation_type) {
            types.push(edge.relation_type.clone());
        }
    }
    types
}

/// Find the single node that is a parent in the `hierarchy` relation but never a child.
///
/// Useful when a loader does not declare the root of the ontology.
pub fn find_root<T>(edges: &[GraphEdge<T>], hierarchy: &RelationType) -> Result<T>
where
    T: Ord + Clone + Display,
{
    let mut subjects = BTreeSet::new();
    let mut objects = BTreeSet::new();
    for edge in edges.iter().filter(|e| &e.relation_type == hierarchy) {
        subjects.insert(&edge.subject);
        objects.insert(&edge.object);
    }

    let candidates: Vec<&T> = objects.difference(&subjects).copied().collect();
    match candidates.as_slice() {
        [root] => Ok((*root).clone()),
        [] => Err(GraphError::NoRootCandidate(hierarchy.to_string())),
        _ => Err(GraphError::MultipleRootCandidates(
            candidates.iter().map(|c| c.to_string()).collect(),
        )),
    }
}
