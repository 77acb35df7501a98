use crate::relation::RelationType;
use serde::{Deserialize, Serialize};

/// A `(subject, object, relation type)` triple, e.g. `HP:01 is_a HP:1`.
///
/// For hierarchy relations the subject is the child and the object is the parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge<T> {
    pub subject: T,
    pub object: T,
    pub relation_type: RelationType,
}

impl<T> GraphEdge<T> {
    pub fn new(subject: T, object: T, relation_type: RelationType) -> Self {
        Self {
            subject,
            object,
            relation_type,
        }
    }

    /// Shorthand for an is-a edge from `subject` (child) to `object` (parent).
    pub fn is_a(subject: T, object: T) -> Self {
        Self::new(subject, object, RelationType::is_a())
    }
}
