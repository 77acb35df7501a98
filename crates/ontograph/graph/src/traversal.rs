use ontograph_csr::{CsrError, StaticCsrArray};
use std::collections::HashSet;

/// Depth-first walk over the adjacency matrix, following the columns whose
/// value satisfies `predicate`.
///
/// Yields row indices. The start row is never yielded and every other
/// reachable row is yielded exactly once, even when it is reachable over
/// several paths or through a cycle.
pub struct TraversingIter<'a, E> {
    adjacency: &'a StaticCsrArray<E>,
    predicate: &'a (dyn Fn(&E) -> bool + Send + Sync),
    seen: HashSet<usize>,
    stack: Vec<usize>,
}

impl<'a, E> TraversingIter<'a, E> {
    /// Start a walk at row `source`.
    ///
    /// Fails with [`CsrError::RowOutOfRange`] if `source` is not a row of
    /// `adjacency`.
    pub fn new(
        adjacency: &'a StaticCsrArray<E>,
        predicate: &'a (dyn Fn(&E) -> bool + Send + Sync),
        source: usize,
    ) -> Result<Self, CsrError> {
        let mut iter = Self {
            adjacency,
            predicate,
            seen: HashSet::new(),
            stack: Vec::new(),
        };
        iter.seen.insert(source);
        for col in adjacency.col_indices_of_val(source, predicate)? {
            iter.visit(col);
        }
        Ok(iter)
    }

    fn visit(&mut self, row: usize) {
        if self.seen.insert(row) {
            self.stack.push(row);
        }
    }

    fn expand(&mut self, row: usize) {
        let adjacency = self.adjacency;
        let predicate = self.predicate;
        // Columns of a rectangular matrix may have no row of their own.
        if let Ok(cols) = adjacency.col_indices_of_val(row, predicate) {
            for col in cols {
                self.visit(col);
            }
        }
    }
}

impl<E> Iterator for TraversingIter<'_, E> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let row = self.stack.pop()?;
        self.expand(row);
        Some(row)
    }
}

/// Yields `source` (if any) before delegating to `inner`.
pub struct WithSource<'a, T, I> {
    source: Option<&'a T>,
    inner: I,
}

impl<'a, T, I> WithSource<'a, T, I>
where
    I: Iterator<Item = &'a T>,
{
    pub fn new(source: Option<&'a T>, inner: I) -> Self {
        Self { source, inner }
    }
}

impl<'a, T, I> Iterator for WithSource<'a, T, I>
where
    I: Iterator<Item = &'a T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.source.take() {
            Some(source) => Some(source),
            None => self.inner.next(),
        }
    }
}
