//! Integration tests for feature-string resolution.

use hartsim::common::ConfigError;
use hartsim::isa::{ExtLetter, FeatureSet, Xlen};

/// Tests parsing a compact full feature string.
#[test]
fn test_parse_compact() {
    let fs = FeatureSet::parse("RV64IMAFD").unwrap();
    assert_eq!(fs.xlen(), Xlen::Rv64);
    assert_eq!(
        fs.letters(),
        &[
            ExtLetter::I,
            ExtLetter::M,
            ExtLetter::A,
            ExtLetter::F,
            ExtLetter::D
        ]
    );
}

/// Tests parsing a plus-separated feature string.
#[test]
fn test_parse_plus_separated() {
    let fs = FeatureSet::parse("RV32I+M+A").unwrap();
    assert_eq!(fs.xlen(), Xlen::Rv32);
    assert_eq!(fs.letters(), &[ExtLetter::I, ExtLetter::M, ExtLetter::A]);
}

/// Tests case-insensitive parsing.
#[test]
fn test_parse_lowercase() {
    let fs = FeatureSet::parse("rv64imafd").unwrap();
    assert_eq!(fs.xlen(), Xlen::Rv64);
    assert_eq!(fs.letters().len(), 5);
}

/// Tests that D implies F, inserted ahead of D.
#[test]
fn test_d_implies_f() {
    let fs = FeatureSet::parse("RV64ID").unwrap();
    assert_eq!(fs.letters(), &[ExtLetter::I, ExtLetter::F, ExtLetter::D]);
}

/// Tests that repeated letters deduplicate.
#[test]
fn test_dedup() {
    let fs = FeatureSet::parse("RV64IIMM+M").unwrap();
    assert_eq!(fs.letters(), &[ExtLetter::I, ExtLetter::M]);
}

/// Tests that the base ISA sorts first regardless of input order.
#[test]
fn test_base_isa_first() {
    let fs = FeatureSet::parse("RV64MI").unwrap();
    assert_eq!(fs.letters()[0], ExtLetter::I);
}

/// Tests the unknown-letter error.
#[test]
fn test_unknown_letter() {
    let err = FeatureSet::parse("RV64IZ").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownFeature(_)));
}

/// Tests the conflicting-base-width error.
#[test]
fn test_conflicting_base() {
    let err = FeatureSet::parse("RV32I+RV64M").unwrap_err();
    assert!(matches!(err, ConfigError::ConflictingBase { .. }));
}

/// Tests that a string with no base prefix is rejected.
#[test]
fn test_missing_base_prefix() {
    let err = FeatureSet::parse("IMAFD").unwrap_err();
    assert!(matches!(err, ConfigError::MissingBase(_)));
}

/// Tests that a string without the base integer ISA is rejected.
#[test]
fn test_missing_base_isa() {
    let err = FeatureSet::parse("RV64M").unwrap_err();
    assert!(matches!(err, ConfigError::MissingBase(_)));
}

/// Tests module expansion counts for 32- and 64-bit widths.
#[test]
fn test_module_expansion() {
    assert_eq!(FeatureSet::parse("RV32I").unwrap().modules().len(), 1);
    assert_eq!(FeatureSet::parse("RV64I").unwrap().modules().len(), 2);
    assert_eq!(FeatureSet::parse("RV64IMAFD").unwrap().modules().len(), 10);
}

/// Tests that module expansion order follows letter order, with each
/// RV64 counterpart directly after its RV32 module.
#[test]
fn test_module_order() {
    let fs = FeatureSet::parse("RV64IM").unwrap();
    let names: Vec<&str> = fs.modules().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["RV32I", "RV64I", "RV32M", "RV64M"]);
}
