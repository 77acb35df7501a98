use crate::error::CsrError;
use std::iter::FusedIterator;

/// Read-only adjacency matrix in compressed sparse row format.
///
/// Row `r` stores its non-zero columns in `indices[indptr[r]..indptr[r + 1]]`
/// and the matching values in `data[indptr[r]..indptr[r + 1]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticCsrArray<E> {
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<E>,
}

impl<E> StaticCsrArray<E> {
    /// Assemble the array, checking that the three vectors describe a valid CSR layout.
    pub fn new(indptr: Vec<usize>, indices: Vec<usize>, data: Vec<E>) -> Result<Self, CsrError> {
        check_structure(&indptr, indices.len(), data.len())?;
        Ok(Self {
            indptr,
            indices,
            data,
        })
    }

    /// Assemble the array from signed row pointers and column indices, e.g. a
    /// matrix prepared outside of this crate.
    ///
    /// Every entry of `indptr` and `indices` must be non-negative.
    pub fn from_signed(indptr: &[i64], indices: &[i64], data: Vec<E>) -> Result<Self, CsrError> {
        let indptr = to_unsigned("indptr", indptr)?;
        let indices = to_unsigned("indices", indices)?;
        Self::new(indptr, indices, data)
    }

    pub fn row_count(&self) -> usize {
        self.indptr.len() - 1
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn data(&self) -> &[E] {
        &self.data
    }

    /// Column indices and values of one row.
    pub fn row(&self, row: usize) -> Result<(&[usize], &[E]), CsrError> {
        self.check_row(row)?;
        let (start, end) = (self.indptr[row], self.indptr[row + 1]);
        Ok((&self.indices[start..end], &self.data[start..end]))
    }

    /// Lazily yield the columns of `row` whose value satisfies `predicate`.
    ///
    /// Columns come in the stored (ascending) order. An empty row yields an
    /// exhausted iterator.
    pub fn col_indices_of_val<P>(&self, row: usize, predicate: P) -> Result<ColIndices<'_, E, P>, CsrError>
    where
        P: Fn(&E) -> bool,
    {
        let (indices, data) = self.row(row)?;
        Ok(ColIndices {
            indices,
            data,
            pos: 0,
            predicate,
        })
    }

    fn check_row(&self, row: usize) -> Result<(), CsrError> {
        if row >= self.row_count() {
            return Err(CsrError::RowOutOfRange {
                row,
                row_count: self.row_count(),
            });
        }
        Ok(())
    }
}

fn to_unsigned(array: &'static str, values: &[i64]) -> Result<Vec<usize>, CsrError> {
    let negative: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v < 0)
        .map(|(i, _)| i)
        .collect();
    if !negative.is_empty() {
        return Err(CsrError::NegativeEntries {
            array,
            positions: negative,
        });
    }
    values
        .iter()
        .map(|&v| {
            usize::try_from(v)
                .map_err(|_| CsrError::Malformed(format!("{} entry {} does not fit usize", array, v)))
        })
        .collect()
}

fn check_structure(indptr: &[usize], n_indices: usize, n_data: usize) -> Result<(), CsrError> {
    let (first, last) = match (indptr.first(), indptr.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            return Err(CsrError::Malformed(
                "indptr must contain at least one entry".into(),
            ))
        }
    };
    if first != 0 {
        return Err(CsrError::Malformed(format!(
            "indptr must start at 0 but starts at {}",
            first
        )));
    }
    if let Some(i) = indptr.windows(2).position(|w| w[1] < w[0]) {
        return Err(CsrError::Malformed(format!(
            "indptr must be non-decreasing but #{} ({}) < #{} ({})",
            i + 1,
            indptr[i + 1],
            i,
            indptr[i]
        )));
    }
    if last != n_indices {
        return Err(CsrError::Malformed(format!(
            "indptr ends at {} but there are {} column indices",
            last, n_indices
        )));
    }
    if n_indices != n_data {
        return Err(CsrError::Malformed(format!(
            "{} column indices but {} data values",
            n_indices, n_data
        )));
    }
    Ok(())
}

/// Lazy, forward-only scan over the columns of one row, filtered by a value predicate.
pub struct ColIndices<'a, E, P> {
    indices: &'a [usize],
    data: &'a [E],
    pos: usize,
    predicate: P,
}

impl<E, P> Iterator for ColIndices<'_, E, P>
where
    P: Fn(&E) -> bool,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.indices.len() {
            let j = self.pos;
            self.pos += 1;
            if (self.predicate)(&self.data[j]) {
                return Some(self.indices[j]);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.indices.len() - self.pos))
    }
}

impl<E, P> FusedIterator for ColIndices<'_, E, P> where P: Fn(&E) -> bool {}
