use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed relation between two ontology concepts.
///
/// Propagating relations (is-a, part-of) form transitive hierarchies and are
/// stored in both directions. Non-propagating relations are stored once,
/// regardless of direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationType {
    /// Stable identifier, e.g. `is_a` or `BFO:0000050`.
    pub id: String,
    /// Human readable label.
    pub label: String,
    /// Whether the relation is transitively closable.
    pub propagates: bool,
}

impl RelationType {
    pub fn new(id: impl Into<String>, label: impl Into<String>, propagates: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            propagates,
        }
    }

    /// The subclass relation. Default hierarchy of every ontology graph.
    pub fn is_a() -> Self {
        Self::new("is_a", "is a", true)
    }

    /// The parthood relation (`BFO:0000050`).
    pub fn part_of() -> Self {
        Self::new("BFO:0000050", "part of", true)
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.label)
    }
}
