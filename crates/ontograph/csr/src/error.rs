/// Errors from the bit-value and relation codecs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("slot {slot} is out of range [0, {max_idx}]")]
    SlotOutOfRange { slot: u32, max_idx: u32 },
    #[error(
        "unable to encode {relation_types} relation types: highest slot {required_max_idx} \
         exceeds the {available_slots} available slots"
    )]
    InsufficientWidth {
        relation_types: usize,
        required_max_idx: u32,
        available_slots: u32,
    },
}

/// Errors from the static CSR array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsrError {
    #[error(
        "Expected array of non-negative integers but the following indices were negative: {}",
        join_positions(.positions)
    )]
    NegativeEntries {
        array: &'static str,
        positions: Vec<usize>,
    },
    #[error("Row index must be in range [0, {}] but got {row}", last_row(.row_count))]
    RowOutOfRange { row: usize, row_count: usize },
    #[error("malformed CSR array: {0}")]
    Malformed(String),
}

fn last_row(row_count: &usize) -> i64 {
    *row_count as i64 - 1
}

fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
