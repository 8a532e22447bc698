//! Feature-string resolution.
//!
//! A feature string such as `RV64IMAFD` or `RV32I+M+A` selects the
//! register width and the ordered set of extension modules a hart
//! enables. Tokens split on `+`; the first token must carry an
//! `RV32`/`RV64` base prefix and any token may append single extension
//! letters. Resolution fails hard on unknown letters and on conflicting
//! base widths; it never guesses a silent precedence.

use crate::common::ConfigError;
use crate::isa::ext::{self, Extension};

/// Active register width of a hart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Xlen {
    /// 32-bit registers and PC.
    Rv32,
    /// 64-bit registers and PC.
    Rv64,
}

/// Extension letters understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtLetter {
    /// Base integer ISA.
    I,
    /// Integer multiply/divide.
    M,
    /// Atomics.
    A,
    /// Single-precision floating point.
    F,
    /// Double-precision floating point.
    D,
}

impl ExtLetter {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::I),
            'M' => Some(Self::M),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'D' => Some(Self::D),
            _ => None,
        }
    }
}

/// Resolved feature selection: width plus ordered extension letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    xlen: Xlen,
    letters: Vec<ExtLetter>,
}

impl FeatureSet {
    /// Parses a feature-selection string.
    ///
    /// Returns the ordered, deduplicated feature set with the base ISA
    /// first, or a `ConfigError` when a token names an unknown letter,
    /// when base widths conflict, or when no base integer ISA is
    /// selected. `D` implies `F`.
    pub fn parse(feature: &str) -> Result<Self, ConfigError> {
        let mut xlen: Option<(Xlen, String)> = None;
        let mut letters: Vec<ExtLetter> = Vec::new();

        let mut push = |letter: ExtLetter, letters: &mut Vec<ExtLetter>| {
            // D implies F; insert the subset first so merge order holds.
            if letter == ExtLetter::D && !letters.contains(&ExtLetter::F) {
                letters.push(ExtLetter::F);
            }
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        };

        for token in feature.split('+') {
            let token = token.trim().to_uppercase();
            if token.is_empty() {
                continue;
            }

            let rest = if let Some(rest) = token.strip_prefix("RV32") {
                match &xlen {
                    Some((Xlen::Rv64, first)) => {
                        return Err(ConfigError::ConflictingBase {
                            first: first.clone(),
                            second: token.clone(),
                        });
                    }
                    _ => xlen = Some((Xlen::Rv32, token.clone())),
                }
                rest.to_string()
            } else if let Some(rest) = token.strip_prefix("RV64") {
                match &xlen {
                    Some((Xlen::Rv32, first)) => {
                        return Err(ConfigError::ConflictingBase {
                            first: first.clone(),
                            second: token.clone(),
                        });
                    }
                    _ => xlen = Some((Xlen::Rv64, token.clone())),
                }
                rest.to_string()
            } else {
                token.clone()
            };

            for c in rest.chars() {
                match ExtLetter::from_char(c) {
                    Some(letter) => push(letter, &mut letters),
                    None => return Err(ConfigError::UnknownFeature(c.to_string())),
                }
            }
        }

        let (xlen, _) = xlen.ok_or_else(|| ConfigError::MissingBase(feature.to_string()))?;
        if !letters.contains(&ExtLetter::I) {
            return Err(ConfigError::MissingBase(feature.to_string()));
        }

        // Base ISA always merges first so it wins encoding ties.
        letters.retain(|l| *l != ExtLetter::I);
        letters.insert(0, ExtLetter::I);

        Ok(Self { xlen, letters })
    }

    /// The selected register width.
    pub fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// The ordered extension letters, base ISA first.
    pub fn letters(&self) -> &[ExtLetter] {
        &self.letters
    }

    /// Expands the selection into the ordered extension modules.
    ///
    /// Each letter yields its RV32 module; a 64-bit width additionally
    /// yields the RV64 counterpart, since a 64-bit feature implies its
    /// 32-bit subset.
    pub fn modules(&self) -> Vec<Box<dyn Extension>> {
        let mut modules: Vec<Box<dyn Extension>> = Vec::new();
        for letter in &self.letters {
            match letter {
                ExtLetter::I => {
                    modules.push(Box::new(ext::rv32i::Rv32i));
                    if self.xlen == Xlen::Rv64 {
                        modules.push(Box::new(ext::rv64i::Rv64i));
                    }
                }
                ExtLetter::M => {
                    modules.push(Box::new(ext::rv32m::Rv32m));
                    if self.xlen == Xlen::Rv64 {
                        modules.push(Box::new(ext::rv64m::Rv64m));
                    }
                }
                ExtLetter::A => {
                    modules.push(Box::new(ext::rv32a::Rv32a));
                    if self.xlen == Xlen::Rv64 {
                        modules.push(Box::new(ext::rv64a::Rv64a));
                    }
                }
                ExtLetter::F => {
                    modules.push(Box::new(ext::rv32f::Rv32f));
                    if self.xlen == Xlen::Rv64 {
                        modules.push(Box::new(ext::rv64f::Rv64f));
                    }
                }
                ExtLetter::D => {
                    modules.push(Box::new(ext::rv32d::Rv32d));
                    if self.xlen == Xlen::Rv64 {
                        modules.push(Box::new(ext::rv64d::Rv64d));
                    }
                }
            }
        }
        modules
    }
}
