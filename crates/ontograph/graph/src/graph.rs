use crate::error::Result;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Lazy sequence of graph nodes borrowed from the graph.
pub type NodeIter<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// Read-only query surface of an ontology.
///
/// Parents and children follow the hierarchy relation chosen when the graph
/// was built. Every traversal is lazy and yields each node at most once.
/// Passing a node that is not part of the graph fails with
/// [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound).
pub trait OntologyGraph<T>
where
    T: Ord + Clone + Display,
{
    /// The declared root of the hierarchy.
    fn root(&self) -> &T;

    /// Number of nodes.
    fn size(&self) -> usize;

    /// Every node once, in ascending order.
    fn iter(&self) -> NodeIter<'_, T>;

    fn contains(&self, node: &T) -> bool;

    /// Direct children of `source`.
    fn children(&self, source: &T, include_source: bool) -> Result<NodeIter<'_, T>>;

    /// All nodes reachable from `source` through child links.
    fn descendants(&self, source: &T, include_source: bool) -> Result<NodeIter<'_, T>>;

    /// Direct parents of `source`.
    fn parents(&self, source: &T, include_source: bool) -> Result<NodeIter<'_, T>>;

    /// All nodes reachable from `source` through parent links.
    fn ancestors(&self, source: &T, include_source: bool) -> Result<NodeIter<'_, T>>;

    /// `true` if `source` has no children.
    fn is_leaf(&self, source: &T) -> Result<bool>;

    /// `true` if `subject` is a direct parent of `object`.
    fn is_parent_of(&self, subject: &T, object: &T) -> Result<bool> {
        Ok(self.parents(object, false)?.any(|n| n == subject))
    }

    /// `true` if `subject` is a direct child of `object`.
    fn is_child_of(&self, subject: &T, object: &T) -> Result<bool> {
        Ok(self.children(object, false)?.any(|n| n == subject))
    }

    fn is_ancestor_of(&self, subject: &T, object: &T) -> Result<bool> {
        Ok(self.ancestors(object, false)?.any(|n| n == subject))
    }

    fn is_descendant_of(&self, subject: &T, object: &T) -> Result<bool> {
        Ok(self.descendants(object, false)?.any(|n| n == subject))
    }

    /// `true` if `object` can be reached from `subject` by following parent links.
    ///
    /// Evaluated from the `object` side, so an unknown `subject` yields `false`.
    fn exists_path(&self, subject: &T, object: &T) -> Result<bool> {
        self.is_descendant_of(subject, object)
    }

    fn ancestor_set(&self, source: &T) -> Result<BTreeSet<T>> {
        Ok(self.ancestors(source, false)?.cloned().collect())
    }

    fn descendant_set(&self, source: &T) -> Result<BTreeSet<T>> {
        Ok(self.descendants(source, false)?.cloned().collect())
    }
}
