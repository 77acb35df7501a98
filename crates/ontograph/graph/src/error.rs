use ontograph_csr::{CodecError, CsrError};

/// Errors from building or querying an ontology graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Item not found in the graph: {0}")]
    NodeNotFound(String),
    #[error("Unsorted sequence. Item #{position} ({item}) was less than #{previous_position} ({previous})")]
    NodesNotSorted {
        position: usize,
        item: String,
        previous_position: usize,
        previous: String,
    },
    #[error("no root candidate for hierarchy relation {0}")]
    NoRootCandidate(String),
    #[error("multiple root candidates: {}", .0.join(", "))]
    MultipleRootCandidates(Vec<String>),
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("CSR error: {0}")]
    Csr(#[from] CsrError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
