#![deny(unsafe_code)]
//! # ontograph-csr
//!
//! Storage layer of the ontology graph: a compressed sparse row (CSR)
//! adjacency matrix whose entries are bit-packed relation values.
//!
//! ## Architecture
//!
//! ```text
//! RelationType ─► RelationCodec ─► slot ─► BitValue (u8/u16/u32/u64)
//!                                              │
//!                      CsrRowBuilder ◄─────────┘
//!                            │
//!                            ▼
//!                      StaticCsrArray (indptr, indices, data)
//! ```
//!
//! Each matrix entry packs several `(relation type, direction)` facts into
//! one scalar. Propagating relation types occupy two slots (forward and
//! inverse), non-propagating ones a single slot.
//!
//! ## Key Types
//!
//! - [`BitValue`] — Fixed-width scalar with per-slot set/unset/test
//! - [`ValueWidth`] — Enumerated width choice (8/16/32/64 bits)
//! - [`RelationCodec`] — Assigns relation types to slots
//! - [`CsrRowBuilder`] — Accumulates one sorted sparse row
//! - [`StaticCsrArray`] — Read-only CSR matrix with predicate-filtered column scans

pub mod array;
pub mod bits;
pub mod codec;
pub mod error;
pub mod row;

pub use array::{ColIndices, StaticCsrArray};
pub use bits::{BitValue, ValueWidth};
pub use codec::RelationCodec;
pub use error::{CodecError, CsrError};
pub use row::CsrRowBuilder;
