use crate::builder::CsrOntologyGraphBuilder;
use crate::error::Result;
use crate::graph::OntologyGraph;
use crate::util::distinct_relation_types;
use ontograph_csr::{BitValue, CodecError, RelationCodec, ValueWidth};
use ontograph_types::{GraphEdge, RelationType};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Graph construction settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Width of the packed matrix values.
    #[serde(default)]
    pub width: ValueWidth,
    /// Relation that defines parents and children.
    #[serde(default = "RelationType::is_a")]
    pub hierarchy_relation: RelationType,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: ValueWidth::W8,
            hierarchy_relation: RelationType::is_a(),
        }
    }
}

impl GraphConfig {
    /// 8-bit values: up to four propagating relation types.
    pub fn compact() -> Self {
        Self::default()
    }

    /// 64-bit values: up to 32 propagating relation types.
    pub fn wide() -> Self {
        Self {
            width: ValueWidth::W64,
            ..Self::default()
        }
    }

    /// The narrowest width that holds every relation type of `edges`.
    pub fn fitted<T>(edges: &[GraphEdge<T>]) -> Result<Self> {
        let relation_types = distinct_relation_types(edges);
        let width = match ValueWidth::required_for(&relation_types) {
            Some(width) => width,
            None => {
                let codec = RelationCodec::new(&relation_types);
                return Err(CodecError::InsufficientWidth {
                    relation_types: codec.relation_type_count(),
                    required_max_idx: codec.max_idx().unwrap_or_default(),
                    available_slots: ValueWidth::W64.bits(),
                }
                .into());
            }
        };
        Ok(Self {
            width,
            ..Self::default()
        })
    }

    pub fn with_hierarchy_relation(mut self, relation: RelationType) -> Self {
        self.hierarchy_relation = relation;
        self
    }
}

/// Build a graph with the value width chosen at runtime.
pub fn build_graph<T>(
    config: &GraphConfig,
    root: T,
    edges: &[GraphEdge<T>],
) -> Result<Box<dyn OntologyGraph<T> + Send + Sync>>
where
    T: Ord + Clone + Display + Send + Sync + 'static,
{
    match config.width {
        ValueWidth::W8 => build_boxed::<T, u8>(config, root, edges),
        ValueWidth::W16 => build_boxed::<T, u16>(config, root, edges),
        ValueWidth::W32 => build_boxed::<T, u32>(config, root, edges),
        ValueWidth::W64 => build_boxed::<T, u64>(config, root, edges),
    }
}

fn build_boxed<T, E>(
    config: &GraphConfig,
    root: T,
    edges: &[GraphEdge<T>],
) -> Result<Box<dyn OntologyGraph<T> + Send + Sync>>
where
    T: Ord + Clone + Display + Send + Sync + 'static,
    E: BitValue,
{
    let graph = CsrOntologyGraphBuilder::<E>::new()
        .hierarchy_relation(Some(config.hierarchy_relation.clone()))
        .build(root, edges)?;
    Ok(Box::new(graph))
}
