//! Cost-override tables.
//!
//! An optional post-merge step: a JSON object mapping mnemonics to
//! cycle costs rewrites the cost field of matching registry entries.
//! Override tables are meant to be a superset across multiple core
//! configurations, so a mnemonic the registry does not know is a
//! warning, never an error.

use crate::common::ConfigError;
use std::collections::BTreeMap;
use std::fs;

/// A parsed cost-override table.
///
/// Backed by an ordered map so override application is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    overrides: BTreeMap<String, u8>,
}

impl CostTable {
    /// Builds a table from explicit (mnemonic, cost) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u8)>,
    {
        Self {
            overrides: pairs.into_iter().collect(),
        }
    }

    /// Reads a table from a JSON file of the form `{"mnemonic": cost}`.
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::CostTableIo {
            path: path.to_string(),
            source,
        })?;
        let overrides: BTreeMap<String, u8> =
            serde_json::from_str(&text).map_err(|source| ConfigError::CostTableParse {
                path: path.to_string(),
                source,
            })?;
        Ok(Self { overrides })
    }

    /// Iterates the overrides in mnemonic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.overrides.iter().map(|(m, c)| (m.as_str(), *c))
    }

    /// Number of overrides in the table.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether the table holds no overrides.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
