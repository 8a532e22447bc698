//! RV64I additions to the base integer set.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::*;

/// RV64I widening module; merged directly after RV32I on 64-bit harts.
pub struct Rv64i;

impl Extension for Rv64i {
    fn name(&self) -> &'static str {
        "RV64I"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::i("lwu", OP_LOAD, 0x6),
            InstEntry::i("ld", OP_LOAD, 0x3),
            InstEntry::s("sd", OP_STORE, 0x3),
            InstEntry::i("addiw", OP_IMM_32, 0x0),
            InstEntry::i_shift("slliw", OP_IMM_32, 0x1, 0x00),
            InstEntry::i_shift("srliw", OP_IMM_32, 0x5, 0x00),
            InstEntry::i_shift("sraiw", OP_IMM_32, 0x5, 0x20),
            InstEntry::r("addw", OP_REG_32, 0x0, 0x00),
            InstEntry::r("subw", OP_REG_32, 0x0, 0x20),
            InstEntry::r("sllw", OP_REG_32, 0x1, 0x00),
            InstEntry::r("srlw", OP_REG_32, 0x5, 0x00),
            InstEntry::r("sraw", OP_REG_32, 0x5, 0x20),
        ]
    }
}
