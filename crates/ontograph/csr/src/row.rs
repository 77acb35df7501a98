use crate::bits::BitValue;
use crate::error::CodecError;

/// Accumulates one sparse row of the adjacency matrix.
///
/// Columns are kept sorted; the builder is cleared and reused for every row.
#[derive(Clone, Debug)]
pub struct CsrRowBuilder<E> {
    cols: Vec<usize>,
    values: Vec<E>,
}

impl<E: BitValue> CsrRowBuilder<E> {
    pub fn new() -> Self {
        Self {
            cols: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Set slot `n` of the value stored in column `col`, creating an empty
    /// value first if the column is not yet present.
    ///
    /// The row is left unchanged if `n` is out of range.
    pub fn set_nth_bit_in_col(&mut self, col: usize, n: u32) -> Result<(), CodecError> {
        match self.cols.binary_search(&col) {
            Ok(pos) => {
                self.values[pos] = self.values[pos].set(n)?;
            }
            Err(pos) => {
                let value = E::empty().set(n)?;
                self.cols.insert(pos, col);
                self.values.insert(pos, value);
            }
        }
        Ok(())
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.cols
    }

    pub fn values(&self) -> &[E] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    pub fn clear(&mut self) {
        self.cols.clear();
        self.values.clear();
    }
}

impl<E: BitValue> Default for CsrRowBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
