//! Property tests: traversals over random DAGs match the transitive closure
//! of the edge list, never repeat a node and honour `include_source`.
//!
//! Edges always point from a higher node id (child) to a lower one (parent),
//! so every generated graph is acyclic. Diamonds are common.

use ontograph_graph::{CsrOntologyGraphBuilder, GraphEdge, NodeIter, OntologyGraph, RelationType};
use ontograph_tests::naive_closure;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Random acyclic edge list over up to 40 nodes, mixing is-a and part-of edges.
fn arb_dag() -> impl Strategy<Value = Vec<GraphEdge<u32>>> {
    prop::collection::vec((0u32..40, 0u32..40, any::<bool>()), 1..120).prop_filter_map(
        "needs at least one non-loop edge",
        |pairs| {
            let edges: Vec<GraphEdge<u32>> = pairs
                .into_iter()
                .filter(|(a, b, _)| a != b)
                .map(|(a, b, is_a)| {
                    let relation = if is_a {
                        RelationType::is_a()
                    } else {
                        RelationType::part_of()
                    };
                    GraphEdge::new(a.max(b), a.min(b), relation)
                })
                .collect();
            (!edges.is_empty()).then_some(edges)
        },
    )
}

fn arb_hierarchy() -> impl Strategy<Value = RelationType> {
    prop_oneof![Just(RelationType::is_a()), Just(RelationType::part_of())]
}

/// Collect while checking that no node is yielded twice.
fn distinct(iter: NodeIter<'_, u32>) -> Result<BTreeSet<u32>, TestCaseError> {
    let items: Vec<u32> = iter.copied().collect();
    let set: BTreeSet<u32> = items.iter().copied().collect();
    prop_assert_eq!(items.len(), set.len(), "duplicate nodes in {:?}", items);
    Ok(set)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Descendants and ancestors are exactly the transitive closure, without duplicates.
    #[test]
    fn traversals_cover_the_closure_once(edges in arb_dag(), hierarchy in arb_hierarchy()) {
        let g = CsrOntologyGraphBuilder::<u8>::new()
            .hierarchy_relation(Some(hierarchy.clone()))
            .build(0, &edges)
            .unwrap();

        for node in g.iter() {
            let descendants = distinct(g.descendants(node, false).unwrap())?;
            prop_assert_eq!(descendants, naive_closure(&edges, &hierarchy, node, false));

            let ancestors = distinct(g.ancestors(node, false).unwrap())?;
            prop_assert_eq!(ancestors, naive_closure(&edges, &hierarchy, node, true));
        }
    }

    /// Direct children and parents match the hierarchy edges touching the node.
    #[test]
    fn one_hop_matches_edges(edges in arb_dag(), hierarchy in arb_hierarchy()) {
        let g = CsrOntologyGraphBuilder::<u8>::new()
            .hierarchy_relation(Some(hierarchy.clone()))
            .build(0, &edges)
            .unwrap();

        for node in g.iter() {
            let expected_children: BTreeSet<u32> = edges
                .iter()
                .filter(|e| e.relation_type == hierarchy && e.object == *node)
                .map(|e| e.subject)
                .collect();
            let expected_parents: BTreeSet<u32> = edges
                .iter()
                .filter(|e| e.relation_type == hierarchy && e.subject == *node)
                .map(|e| e.object)
                .collect();
            prop_assert_eq!(distinct(g.children(node, false).unwrap())?, expected_children);
            prop_assert_eq!(distinct(g.parents(node, false).unwrap())?, expected_parents);
        }
    }

    /// `include_source = true` adds exactly the source, yielded first.
    #[test]
    fn include_source_adds_only_the_source(edges in arb_dag()) {
        let g = CsrOntologyGraphBuilder::<u8>::new().build(0, &edges).unwrap();

        for node in g.iter() {
            let queries: [fn(&dyn OntologyGraph<u32>, &u32, bool) -> Vec<u32>; 4] = [
                |g, n, s| g.children(n, s).unwrap().copied().collect(),
                |g, n, s| g.parents(n, s).unwrap().copied().collect(),
                |g, n, s| g.descendants(n, s).unwrap().copied().collect(),
                |g, n, s| g.ancestors(n, s).unwrap().copied().collect(),
            ];
            for query in queries {
                let without = query(&g, node, false);
                let with = query(&g, node, true);
                prop_assert_eq!(with.first(), Some(node));
                prop_assert_eq!(with.len(), without.len() + 1);
                let mut expected: BTreeSet<u32> = without.into_iter().collect();
                expected.insert(*node);
                prop_assert_eq!(with.into_iter().collect::<BTreeSet<u32>>(), expected);
            }
        }
    }

    /// A leaf is a node without children.
    #[test]
    fn leaf_iff_no_children(edges in arb_dag(), hierarchy in arb_hierarchy()) {
        let g = CsrOntologyGraphBuilder::<u8>::new()
            .hierarchy_relation(Some(hierarchy))
            .build(0, &edges)
            .unwrap();

        for node in g.iter() {
            let no_children = g.children(node, false).unwrap().next().is_none();
            prop_assert_eq!(g.is_leaf(node).unwrap(), no_children);
        }
    }

    /// The graph holds every edge endpoint once, in ascending order.
    #[test]
    fn size_is_number_of_distinct_endpoints(edges in arb_dag()) {
        let g = CsrOntologyGraphBuilder::<u16>::new().build(0, &edges).unwrap();
        let endpoints: BTreeSet<u32> = edges
            .iter()
            .flat_map(|e| [e.subject, e.object])
            .collect();

        prop_assert_eq!(g.size(), endpoints.len());
        let nodes: Vec<u32> = g.iter().copied().collect();
        prop_assert_eq!(nodes, endpoints.into_iter().collect::<Vec<u32>>());
    }

    /// Relationship checks agree with the traversals they are defined by.
    #[test]
    fn relationship_checks_agree_with_traversals(edges in arb_dag(), a in 0u32..40, b in 0u32..40) {
        let g = CsrOntologyGraphBuilder::<u8>::new().build(0, &edges).unwrap();
        prop_assume!(g.contains(&b));

        let ancestors = g.ancestor_set(&b).unwrap();
        let descendants = g.descendant_set(&b).unwrap();
        prop_assert_eq!(g.is_ancestor_of(&a, &b).unwrap(), ancestors.contains(&a));
        prop_assert_eq!(g.is_descendant_of(&a, &b).unwrap(), descendants.contains(&a));
        prop_assert_eq!(g.exists_path(&a, &b).unwrap(), descendants.contains(&a));
        if g.contains(&a) {
            prop_assert_eq!(g.exists_path(&a, &b).unwrap(), g.ancestor_set(&a).unwrap().contains(&b));
        }
    }

    /// A subgraph answers descendant queries like the full graph.
    #[test]
    fn subgraph_preserves_descendants(edges in arb_dag(), pick in any::<prop::sample::Index>()) {
        let g = CsrOntologyGraphBuilder::<u8>::new().build(0, &edges).unwrap();
        let nodes: Vec<u32> = g.iter().copied().collect();
        let sub_root = nodes[pick.index(nodes.len())];
        let sub = g.extract_subgraph(&sub_root).unwrap();

        let mut expected = g.descendant_set(&sub_root).unwrap();
        expected.insert(sub_root);
        prop_assert_eq!(sub.iter().copied().collect::<BTreeSet<u32>>(), expected.clone());
        for node in &expected {
            prop_assert_eq!(sub.descendant_set(node).unwrap(), g.descendant_set(node).unwrap());
        }
        prop_assert!(sub.is_leaf(&sub_root).unwrap() == g.is_leaf(&sub_root).unwrap());
    }
}
