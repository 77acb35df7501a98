use crate::error::{GraphError, Result};
use crate::graph::{NodeIter, OntologyGraph};
use crate::traversal::{TraversingIter, WithSource};
use crate::util::index_of;
use ontograph_csr::{BitValue, CsrError, StaticCsrArray};
use std::fmt::{self, Display};
use std::sync::Arc;
use tracing::warn;

/// Decides whether a matrix value carries one particular relation fact.
pub type ValuePredicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Ontology graph backed by a square CSR adjacency matrix.
///
/// Row and column `i` both stand for `nodes[i]`. Parents are the columns whose
/// value satisfies `is_parent_of`, children the columns that satisfy
/// `is_child_of`. All state is immutable, so the graph can be shared between
/// threads and queried concurrently.
#[derive(Clone)]
pub struct CsrOntologyGraph<T, E> {
    root: T,
    nodes: Vec<T>,
    adjacency: StaticCsrArray<E>,
    is_parent_of: ValuePredicate<E>,
    is_child_of: ValuePredicate<E>,
}

impl<T, E> CsrOntologyGraph<T, E>
where
    T: Ord + Clone + Display,
    E: BitValue,
{
    /// Wrap a prebuilt adjacency matrix.
    ///
    /// `nodes` must be strictly ascending and the matrix must have one row per
    /// node with every column index pointing at a node.
    pub fn new(
        root: T,
        nodes: Vec<T>,
        adjacency: StaticCsrArray<E>,
        is_parent_of: ValuePredicate<E>,
        is_child_of: ValuePredicate<E>,
    ) -> Result<Self> {
        check_sorted(&nodes)?;
        if adjacency.row_count() != nodes.len() {
            return Err(CsrError::Malformed(format!(
                "{} rows for {} nodes",
                adjacency.row_count(),
                nodes.len()
            ))
            .into());
        }
        if let Some(col) = adjacency.indices().iter().find(|c| **c >= nodes.len()) {
            return Err(CsrError::Malformed(format!(
                "column {} is out of range for {} nodes",
                col,
                nodes.len()
            ))
            .into());
        }
        if nodes.binary_search(&root).is_err() {
            warn!(root = %root, "Root is not a node of the graph");
        }
        Ok(Self {
            root,
            nodes,
            adjacency,
            is_parent_of,
            is_child_of,
        })
    }

    /// The sorted node universe.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn adjacency_matrix(&self) -> &StaticCsrArray<E> {
        &self.adjacency
    }

    /// Restrict the graph to `sub_root` and its descendants.
    ///
    /// Entries pointing outside the subgraph are dropped. The remaining
    /// columns are renumbered to the new node order, values are kept as is.
    pub fn extract_subgraph(&self, sub_root: &T) -> Result<Self> {
        let root_idx = index_of(&self.nodes, sub_root)?;
        let mut keep: Vec<usize> =
            TraversingIter::new(&self.adjacency, &*self.is_child_of, root_idx)?.collect();
        keep.push(root_idx);
        keep.sort_unstable();

        let mut indptr = Vec::with_capacity(keep.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        indptr.push(0);
        for &row in &keep {
            let (cols, values) = self.adjacency.row(row)?;
            for (col, value) in cols.iter().zip(values) {
                if let Ok(new_col) = keep.binary_search(col) {
                    indices.push(new_col);
                    data.push(*value);
                }
            }
            indptr.push(indices.len());
        }

        let nodes = keep.iter().map(|&i| self.nodes[i].clone()).collect();
        let adjacency = StaticCsrArray::new(indptr, indices, data)?;
        Self::new(
            sub_root.clone(),
            nodes,
            adjacency,
            Arc::clone(&self.is_parent_of),
            Arc::clone(&self.is_child_of),
        )
    }

    fn one_hop<'a>(
        &'a self,
        source: &T,
        predicate: &'a ValuePredicate<E>,
        include_source: bool,
    ) -> Result<NodeIter<'a, T>> {
        let idx = index_of(&self.nodes, source)?;
        let nodes = &self.nodes;
        let cols = self
            .adjacency
            .col_indices_of_val(idx, &**predicate)?
            .map(move |col| &nodes[col]);
        Ok(self.with_source(idx, include_source, cols))
    }

    fn transitive<'a>(
        &'a self,
        source: &T,
        predicate: &'a ValuePredicate<E>,
        include_source: bool,
    ) -> Result<NodeIter<'a, T>> {
        let idx = index_of(&self.nodes, source)?;
        let nodes = &self.nodes;
        let walk =
            TraversingIter::new(&self.adjacency, &**predicate, idx)?.map(move |i| &nodes[i]);
        Ok(self.with_source(idx, include_source, walk))
    }

    fn with_source<'a, I>(&'a self, idx: usize, include_source: bool, inner: I) -> NodeIter<'a, T>
    where
        I: Iterator<Item = &'a T> + 'a,
    {
        let source = include_source.then(|| &self.nodes[idx]);
        Box::new(WithSource::new(source, inner))
    }
}

impl<T, E> OntologyGraph<T> for CsrOntologyGraph<T, E>
where
    T: Ord + Clone + Display,
    E: BitValue,
{
    fn root(&self) -> &T {
        &self.root
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn iter(&self) -> NodeIter<'_, T> {
        Box::new(self.nodes.iter())
    }

    fn contains(&self, node: &T) -> bool {
        self.nodes.binary_search(node).is_ok()
    }

    fn children(&self, source: &T, include_source: bool) -> Result<NodeIter<'_, T>> {
        self.one_hop(source, &self.is_child_of, include_source)
    }

    fn descendants(&self, source: &T, include_source: bool) -> Result<NodeIter<'_, T>> {
        self.transitive(source, &self.is_child_of, include_source)
    }

    fn parents(&self, source: &T, include_source: bool) -> Result<NodeIter<'_, T>> {
        self.one_hop(source, &self.is_parent_of, include_source)
    }

    fn ancestors(&self, source: &T, include_source: bool) -> Result<NodeIter<'_, T>> {
        self.transitive(source, &self.is_parent_of, include_source)
    }

    fn is_leaf(&self, source: &T) -> Result<bool> {
        Ok(self.children(source, false)?.next().is_none())
    }
}

impl<T: fmt::Debug, E> fmt::Debug for CsrOntologyGraph<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsrOntologyGraph")
            .field("root", &self.root)
            .field("nodes", &self.nodes.len())
            .field("entries", &self.adjacency.nnz())
            .finish()
    }
}

fn check_sorted<T: Ord + Display>(nodes: &[T]) -> Result<()> {
    if let Some(i) = nodes.windows(2).position(|w| w[1] <= w[0]) {
        return Err(GraphError::NodesNotSorted {
            position: i + 1,
            item: nodes[i + 1].to_string(),
            previous_position: i,
            previous: nodes[i].to_string(),
        });
    }
    Ok(())
}
