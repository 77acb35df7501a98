#![deny(unsafe_code)]
//! # ontograph-types
//!
//! Shared vocabulary of the ontology graph: the identifiers of graph nodes,
//! the relation types that connect them, and the edges handed over by
//! ontology loaders.
//!
//! ## Key Types
//!
//! - [`TermId`] — `PREFIX:ID` identifier of an ontology concept
//! - [`RelationType`] — A typed relation with a `propagates` flag
//! - [`GraphEdge`] — A `(subject, object, relation type)` triple

pub mod edge;
pub mod relation;
pub mod term_id;

pub use edge::GraphEdge;
pub use relation::RelationType;
pub use term_id::{TermId, TermIdError};
