//! Integration tests for registry assembly: merging, conflict
//! detection, reverse lookup, and cost overrides.

use hartsim::common::{ConfigError, Output};
use hartsim::isa::encoding::compress_entry;
use hartsim::isa::ext::Extension;
use hartsim::isa::{CostTable, FeatureSet, InstEntry, InstRegistry, RegistryBuilder, Xlen};
use std::collections::BTreeMap;

fn build(features: &str) -> InstRegistry {
    let fs = FeatureSet::parse(features).unwrap();
    InstRegistry::build(&fs, None, &Output::default()).unwrap()
}

/// Tests that every supported feature combination assembles cleanly.
#[test]
fn test_all_feature_sets_assemble() {
    for base in ["RV32", "RV64"] {
        for exts in ["I", "IM", "IA", "IF", "IFD", "IMA", "IMAF", "IMAFD"] {
            let registry = build(&format!("{}{}", base, exts));
            assert!(!registry.is_empty());
        }
    }
}

/// Tests that every merged entry's key reverse-maps to itself, i.e.
/// keys are unique across the full table.
#[test]
fn test_key_round_trip_identity() {
    let registry = build("RV64IMAFD");
    for (id, entry) in registry.entries().iter().enumerate() {
        let key = compress_entry(entry);
        assert_eq!(
            registry.lookup_encoding(key),
            Some(id),
            "key collision on '{}'",
            entry.mnemonic
        );
    }
}

/// Tests that the merged key set does not depend on module order.
#[test]
fn test_merge_order_independence() {
    let keys = |features: &str| -> BTreeMap<u32, &'static str> {
        build(features)
            .entries()
            .iter()
            .map(|e| (compress_entry(e), e.mnemonic))
            .collect()
    };
    assert_eq!(keys("RV64IMAFD"), keys("RV64DFAMI"));
}

/// Tests mnemonic lookup on an assembled registry.
#[test]
fn test_mnemonic_lookup() {
    let registry = build("RV64IM");
    let id = registry.lookup_mnemonic("mulw").unwrap();
    assert_eq!(registry.entry(id).mnemonic, "mulw");
    assert!(registry.lookup_mnemonic("fadd.s").is_none());
}

/// Tests the per-entry extension back-reference.
#[test]
fn test_entry_to_ext_back_reference() {
    let fs = FeatureSet::parse("RV64IMAFD").unwrap();
    let registry = InstRegistry::build(&fs, None, &Output::default()).unwrap();
    let modules = fs.modules();
    assert_eq!(registry.ext_count(), modules.len());

    for (id, entry) in registry.entries().iter().enumerate() {
        let (module, local) = registry.ext_of(id);
        let declared = modules[module].instructions();
        assert_eq!(declared[local].mnemonic, entry.mnemonic);
        assert_eq!(registry.ext_name(module), modules[module].name());
    }
}

/// Tests floating-point classification.
#[test]
fn test_float_classification() {
    let registry = build("RV64IMAFD");
    let fadd = registry.lookup_mnemonic("fadd.s").unwrap();
    let fcvt = registry.lookup_mnemonic("fcvt.w.s").unwrap();
    let add = registry.lookup_mnemonic("add").unwrap();
    assert!(registry.is_float(fadd));
    assert!(registry.is_float(fcvt));
    assert!(!registry.is_float(add));
}

struct RedeclaringExt;

impl Extension for RedeclaringExt {
    fn name(&self) -> &'static str {
        "XREDECL"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        // Same mnemonic, same encoding as the base ISA's add.
        vec![InstEntry::r("add", 0x33, 0x0, 0x00)]
    }
}

struct ShadowingExt;

impl Extension for ShadowingExt {
    fn name(&self) -> &'static str {
        "XSHADOW"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        // New mnemonic on add's encoding.
        vec![InstEntry::r("xadd", 0x33, 0x0, 0x00)]
    }
}

struct RenamedExt;

impl Extension for RenamedExt {
    fn name(&self) -> &'static str {
        "XRENAME"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        // Existing mnemonic on a fresh encoding.
        vec![InstEntry::r("add", 0x33, 0x0, 0x7F)]
    }
}

fn base_builder() -> RegistryBuilder {
    let fs = FeatureSet::parse("RV64I").unwrap();
    let mut builder = RegistryBuilder::new(fs.xlen());
    for module in fs.modules() {
        builder.enable(module).unwrap();
    }
    builder
}

/// Tests that re-declaring an identical instruction is benign.
#[test]
fn test_benign_redeclaration() {
    let mut builder = base_builder();
    let before = build("RV64I").len();
    builder.enable(Box::new(RedeclaringExt)).unwrap();
    let registry = builder.build();
    assert_eq!(registry.len(), before);
    let id = registry.lookup_mnemonic("add").unwrap();
    assert_eq!(registry.ext_of(id).0, 0);
}

/// Tests that a different mnemonic on an occupied key is fatal.
#[test]
fn test_encoding_conflict() {
    let mut builder = base_builder();
    let err = builder.enable(Box::new(ShadowingExt)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::EncodingConflict {
            mnemonic: "xadd",
            existing: "add",
            ..
        }
    ));
}

/// Tests that re-using a mnemonic with a new encoding is fatal.
#[test]
fn test_duplicate_mnemonic() {
    let mut builder = base_builder();
    let err = builder.enable(Box::new(RenamedExt)).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateMnemonic("add")));
}

/// Tests cost-override application and the unknown-mnemonic warning.
#[test]
fn test_cost_overrides() {
    let fs = FeatureSet::parse("RV64IM").unwrap();
    let mut builder = RegistryBuilder::new(fs.xlen());
    for module in fs.modules() {
        builder.enable(module).unwrap();
    }

    let table = CostTable::from_pairs([
        ("mul".to_string(), 8u8),
        ("fadd.s".to_string(), 3u8), // not in RV64IM
    ]);
    let output = Output::default();
    builder.apply_costs(&table, &output);
    let registry = builder.build();

    let mul = registry.lookup_mnemonic("mul").unwrap();
    let add = registry.lookup_mnemonic("add").unwrap();
    assert_eq!(registry.entry(mul).cost, 8);
    assert_eq!(registry.entry(add).cost, 1);
    assert_eq!(output.warnings_emitted(), 1);
}

/// Tests that overrides change the cost field only.
#[test]
fn test_cost_override_preserves_identity() {
    let fs = FeatureSet::parse("RV64I").unwrap();
    let table = CostTable::from_pairs([("add".to_string(), 9u8)]);
    let registry = InstRegistry::build(&fs, Some(&table), &Output::default()).unwrap();
    let plain = build("RV64I");

    let id = registry.lookup_mnemonic("add").unwrap();
    assert_eq!(registry.entry(id).cost, 9);
    assert_eq!(
        compress_entry(registry.entry(id)),
        compress_entry(plain.entry(plain.lookup_mnemonic("add").unwrap()))
    );
}

/// Tests that the registry carries its register width.
#[test]
fn test_registry_xlen() {
    assert_eq!(build("RV32I").xlen(), Xlen::Rv32);
    assert_eq!(build("RV64I").xlen(), Xlen::Rv64);
}
