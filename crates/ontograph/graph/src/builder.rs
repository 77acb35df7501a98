use crate::csr_graph::{CsrOntologyGraph, ValuePredicate};
use crate::error::Result;
use crate::util::{distinct_relation_types, index_of};
use ontograph_csr::{BitValue, CsrRowBuilder, RelationCodec, StaticCsrArray};
use ontograph_types::{GraphEdge, RelationType};
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds a [`CsrOntologyGraph`] whose matrix values are of type `E`.
///
/// Pick `E` wide enough for the relation types of the input: every
/// propagating relation type needs two bits, every other one a single bit.
#[derive(Clone, Debug)]
pub struct CsrOntologyGraphBuilder<E> {
    hierarchy_relation: RelationType,
    _value: PhantomData<E>,
}

impl<E: BitValue> CsrOntologyGraphBuilder<E> {
    /// A builder using is-a as the hierarchy relation.
    pub fn new() -> Self {
        Self {
            hierarchy_relation: RelationType::is_a(),
            _value: PhantomData,
        }
    }

    /// Set the relation that defines parents and children.
    ///
    /// The relation must propagate. `None` and non-propagating relations are
    /// ignored and the current hierarchy relation is kept.
    pub fn hierarchy_relation(mut self, relation: Option<RelationType>) -> Self {
        match relation {
            Some(relation) if relation.propagates => self.hierarchy_relation = relation,
            Some(relation) => warn!(
                rejected = %relation,
                current = %self.hierarchy_relation,
                "Hierarchy relation must propagate, keeping the current one"
            ),
            None => warn!(
                current = %self.hierarchy_relation,
                "Hierarchy relation must not be empty, keeping the current one"
            ),
        }
        self
    }

    pub fn current_hierarchy_relation(&self) -> &RelationType {
        &self.hierarchy_relation
    }

    /// Build the graph from the complete edge list.
    ///
    /// Fails if the relation types do not fit into `E`.
    pub fn build<T>(&self, root: T, edges: &[GraphEdge<T>]) -> Result<CsrOntologyGraph<T, E>>
    where
        T: Ord + Clone + Display,
    {
        let relation_types = distinct_relation_types(edges);
        let codec = RelationCodec::for_width::<E>(&relation_types)?;
        let parent_slot = codec.calculate_bit_index(&self.hierarchy_relation, false);
        let child_slot = codec.calculate_bit_index(&self.hierarchy_relation, true);
        if parent_slot.is_none() {
            warn!(
                hierarchy = %self.hierarchy_relation,
                "Hierarchy relation does not occur in the edges, the graph has no parents or children"
            );
        }

        debug!(edges = edges.len(), "Sorting graph nodes");
        let nodes = sorted_nodes(edges);

        let width = E::WIDTH;
        debug!(
            nodes = nodes.len(),
            relation_types = relation_types.len(),
            width = %width,
            "Building the adjacency matrix"
        );
        let adjacency = build_adjacency::<T, E>(&nodes, edges, &codec)?;

        debug!(entries = adjacency.nnz(), "Assembling the ontology graph");
        let is_parent_of = hierarchy_predicate::<E>(parent_slot);
        let is_child_of = hierarchy_predicate::<E>(child_slot);
        let graph = CsrOntologyGraph::new(root, nodes, adjacency, is_parent_of, is_child_of)?;

        info!(
            nodes = graph.nodes().len(),
            entries = graph.adjacency_matrix().nnz(),
            hierarchy = %self.hierarchy_relation,
            "Built ontology graph"
        );
        Ok(graph)
    }
}

impl<E: BitValue> Default for CsrOntologyGraphBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_nodes<T: Ord + Clone>(edges: &[GraphEdge<T>]) -> Vec<T> {
    let mut nodes: Vec<T> = edges
        .iter()
        .flat_map(|e| [e.subject.clone(), e.object.clone()])
        .collect();
    nodes.sort_unstable();
    nodes.dedup();
    nodes
}

fn build_adjacency<T, E>(
    nodes: &[T],
    edges: &[GraphEdge<T>],
    codec: &RelationCodec,
) -> Result<StaticCsrArray<E>>
where
    T: Ord + Display,
    E: BitValue,
{
    let mut adjacent: Vec<Vec<&GraphEdge<T>>> = vec![Vec::new(); nodes.len()];
    for edge in edges {
        adjacent[index_of(nodes, &edge.subject)?].push(edge);
        adjacent[index_of(nodes, &edge.object)?].push(edge);
    }

    let mut indptr = Vec::with_capacity(nodes.len() + 1);
    let mut indices = Vec::new();
    let mut data = Vec::new();
    indptr.push(0);

    let mut row = CsrRowBuilder::<E>::new();
    for (node, row_edges) in nodes.iter().zip(&adjacent) {
        for edge in row_edges {
            let inverted = edge.object == *node;
            let neighbor = if inverted { &edge.subject } else { &edge.object };
            let col = index_of(nodes, neighbor)?;
            if let Some(slot) = codec.calculate_bit_index(&edge.relation_type, inverted) {
                row.set_nth_bit_in_col(col, slot)?;
            }
        }
        indices.extend_from_slice(row.col_indices());
        data.extend_from_slice(row.values());
        indptr.push(indices.len());
        row.clear();
    }

    Ok(StaticCsrArray::new(indptr, indices, data)?)
}

/// Test a single slot, resolved once at build time. `None` never matches.
fn hierarchy_predicate<E: BitValue>(slot: Option<u32>) -> ValuePredicate<E> {
    Arc::new(move |value: &E| match slot {
        Some(slot) => matches!(value.is_set(slot), Ok(true)),
        None => false,
    })
}
