use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an ontology concept, e.g. `HP:0001166`.
///
/// Term IDs are ordered by prefix first and by the local ID second, both
/// compared as plain strings. This is the order that defines the node
/// universe of an ontology graph.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermId {
    prefix: String,
    id: String,
}

impl TermId {
    /// Parse a `PREFIX:ID` string.
    pub fn of(value: &str) -> Result<Self, TermIdError> {
        let (prefix, id) = value
            .split_once(':')
            .ok_or_else(|| TermIdError::MissingDelimiter(value.to_string()))?;
        Self::from_parts(prefix, id)
    }

    pub fn from_parts(prefix: &str, id: &str) -> Result<Self, TermIdError> {
        if prefix.is_empty() {
            return Err(TermIdError::EmptyPrefix(format!("{}:{}", prefix, id)));
        }
        if id.is_empty() {
            return Err(TermIdError::EmptyId(format!("{}:{}", prefix, id)));
        }
        Ok(Self {
            prefix: prefix.to_string(),
            id: id.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The full `PREFIX:ID` form.
    pub fn value(&self) -> String {
        format!("{}:{}", self.prefix, self.id)
    }
}

impl FromStr for TermId {
    type Err = TermIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl fmt::Debug for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermId({}:{})", self.prefix, self.id)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.id)
    }
}

impl Serialize for TermId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value())
    }
}

impl<'de> Deserialize<'de> for TermId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        TermId::of(&value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TermIdError {
    #[error("missing ':' delimiter in term ID: {0}")]
    MissingDelimiter(String),
    #[error("empty prefix in term ID: {0}")]
    EmptyPrefix(String),
    #[error("empty local ID in term ID: {0}")]
    EmptyId(String),
}
