//! The instruction registry and its builder.
//!
//! `RegistryBuilder` assembles the master instruction table at model
//! build time: it merges each enabled extension module's instruction
//! list, maintains the mnemonic and compressed-encoding indices, records
//! per-entry back-references to the contributing module, and applies
//! cost overrides. `build()` freezes the result into an `InstRegistry`
//! that is read-only for the rest of the simulation and safe to share
//! across harts. A partially merged table never escapes the builder.

use crate::common::{ConfigError, Output};
use crate::isa::cost::CostTable;
use crate::isa::encoding::compress_entry;
use crate::isa::entry::InstEntry;
use crate::isa::ext::Extension;
use crate::isa::feature::{FeatureSet, Xlen};
use std::collections::HashMap;

/// Frozen instruction table for one core configuration.
pub struct InstRegistry {
    xlen: Xlen,
    entries: Vec<InstEntry>,
    by_mnemonic: HashMap<&'static str, usize>,
    by_encoding: HashMap<u32, usize>,
    entry_to_ext: Vec<(usize, usize)>,
    exts: Vec<Box<dyn Extension>>,
}

impl InstRegistry {
    /// Resolves a feature set into a frozen registry.
    ///
    /// Convenience wrapper: seeds the builder with the resolved modules
    /// in order, applies the optional cost table, and freezes.
    pub fn build(
        features: &FeatureSet,
        costs: Option<&CostTable>,
        output: &Output,
    ) -> Result<Self, ConfigError> {
        let mut builder = RegistryBuilder::new(features.xlen());
        for module in features.modules() {
            builder.enable(module)?;
        }
        if let Some(table) = costs {
            builder.apply_costs(table, output);
        }
        Ok(builder.build())
    }

    /// The register width this registry was built for.
    pub fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Number of merged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The descriptor for an entry id.
    pub fn entry(&self, id: usize) -> &InstEntry {
        &self.entries[id]
    }

    /// All descriptors, in merge order.
    pub fn entries(&self) -> &[InstEntry] {
        &self.entries
    }

    /// Looks up an entry id by compressed encoding key.
    pub fn lookup_encoding(&self, key: u32) -> Option<usize> {
        self.by_encoding.get(&key).copied()
    }

    /// Looks up an entry id by mnemonic.
    pub fn lookup_mnemonic(&self, mnemonic: &str) -> Option<usize> {
        self.by_mnemonic.get(mnemonic).copied()
    }

    /// The (module index, module-local index) that produced an entry.
    pub fn ext_of(&self, id: usize) -> (usize, usize) {
        self.entry_to_ext[id]
    }

    /// The name of an enabled extension module.
    pub fn ext_name(&self, module: usize) -> &'static str {
        self.exts[module].name()
    }

    /// Number of enabled extension modules.
    pub fn ext_count(&self) -> usize {
        self.exts.len()
    }

    /// Whether an entry routes any operand through the FP register file.
    pub fn is_float(&self, id: usize) -> bool {
        self.entries[id].is_float()
    }
}

/// Mutable table assembly state, consumed by `build()`.
pub struct RegistryBuilder {
    xlen: Xlen,
    entries: Vec<InstEntry>,
    by_mnemonic: HashMap<&'static str, usize>,
    by_encoding: HashMap<u32, usize>,
    entry_to_ext: Vec<(usize, usize)>,
    exts: Vec<Box<dyn Extension>>,
}

impl RegistryBuilder {
    /// Creates an empty builder for the given register width.
    pub fn new(xlen: Xlen) -> Self {
        Self {
            xlen,
            entries: Vec::new(),
            by_mnemonic: HashMap::new(),
            by_encoding: HashMap::new(),
            entry_to_ext: Vec::new(),
            exts: Vec::new(),
        }
    }

    /// Merges one extension module's instruction list.
    ///
    /// Earlier-merged entries win encoding ties: a later module
    /// re-declaring an identical (mnemonic, key) pair is skipped as
    /// benign, while a different mnemonic on an occupied key is a fatal
    /// `EncodingConflict`. A module may therefore extend but never
    /// shadow what is already merged.
    pub fn enable(&mut self, ext: Box<dyn Extension>) -> Result<(), ConfigError> {
        let module = self.exts.len();
        for (local, inst) in ext.instructions().into_iter().enumerate() {
            let key = compress_entry(&inst);

            if let Some(&existing) = self.by_encoding.get(&key) {
                if self.entries[existing].mnemonic == inst.mnemonic {
                    continue;
                }
                return Err(ConfigError::EncodingConflict {
                    mnemonic: inst.mnemonic,
                    existing: self.entries[existing].mnemonic,
                    key,
                });
            }
            if self.by_mnemonic.contains_key(inst.mnemonic) {
                return Err(ConfigError::DuplicateMnemonic(inst.mnemonic));
            }

            let id = self.entries.len();
            self.by_mnemonic.insert(inst.mnemonic, id);
            self.by_encoding.insert(key, id);
            self.entry_to_ext.push((module, local));
            self.entries.push(inst);
        }
        self.exts.push(ext);
        Ok(())
    }

    /// Rewrites entry costs from an override table.
    ///
    /// Only the cost field changes; identity and encoding are
    /// untouched. A mnemonic the registry does not know produces one
    /// warning on the output sink and nothing else, since override
    /// tables may span several core configurations.
    pub fn apply_costs(&mut self, table: &CostTable, output: &Output) {
        for (mnemonic, cost) in table.iter() {
            match self.by_mnemonic.get(mnemonic) {
                Some(&id) => self.entries[id].cost = cost,
                None => output.warn(&format!(
                    "cost override for unknown mnemonic '{}' ignored",
                    mnemonic
                )),
            }
        }
    }

    /// Freezes the builder into an immutable registry.
    pub fn build(self) -> InstRegistry {
        InstRegistry {
            xlen: self.xlen,
            entries: self.entries,
            by_mnemonic: self.by_mnemonic,
            by_encoding: self.by_encoding,
            entry_to_ext: self.entry_to_ext,
            exts: self.exts,
        }
    }
}
