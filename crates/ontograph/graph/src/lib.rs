#![deny(unsafe_code)]
//! # ontograph-graph
//!
//! In-memory ontology graph on top of the CSR adjacency matrix of
//! `ontograph-csr`.
//!
//! ## Architecture
//!
//! ```text
//! GraphEdge[] ─► CsrOntologyGraphBuilder
//!                   1. relation types ─► RelationCodec (width check)
//!                   2. sorted, deduplicated nodes
//!                   3. edges bucketed per row
//!                   4. rows ─► StaticCsrArray
//!                   5. hierarchy predicates
//!                        │
//!                        ▼
//!                CsrOntologyGraph ─► OntologyGraph queries
//! ```
//!
//! One matrix serves every query. Parents follow the forward bit of the
//! hierarchy relation, children the inverse bit. Transitive queries walk the
//! matrix lazily and depth-first, yielding each node once.
//!
//! ## Key Types
//!
//! - [`OntologyGraph`] — Query surface (children, parents, descendants, ancestors, leaves)
//! - [`CsrOntologyGraph`] — CSR-backed implementation
//! - [`CsrOntologyGraphBuilder`] — Builds a graph from an edge list
//! - [`GraphConfig`] — Runtime choice of value width and hierarchy relation

pub mod builder;
pub mod config;
pub mod csr_graph;
pub mod error;
pub mod graph;
pub mod traversal;
pub mod util;


pub use builder::CsrOntologyGraphBuilder;
pub use config::{build_graph, GraphConfig};
pub use csr_graph::{CsrOntologyGraph, ValuePredicate};
pub use error::{GraphError, Result};
pub use graph::{NodeIter, OntologyGraph};
pub use traversal::{TraversingIter, WithSource};
pub use util::{distinct_relation_types, find_root};

pub use ontograph_csr::ValueWidth;
pub use ontograph_types::{GraphEdge, RelationType, TermId};
