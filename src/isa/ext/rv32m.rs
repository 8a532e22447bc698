//! RV32M integer multiply/divide.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::OP_REG;

const F7_MULDIV: u8 = 0x01;

/// RV32M module.
pub struct Rv32m;

impl Extension for Rv32m {
    fn name(&self) -> &'static str {
        "RV32M"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::r("mul", OP_REG, 0x0, F7_MULDIV).cost(2),
            InstEntry::r("mulh", OP_REG, 0x1, F7_MULDIV).cost(2),
            InstEntry::r("mulhsu", OP_REG, 0x2, F7_MULDIV).cost(2),
            InstEntry::r("mulhu", OP_REG, 0x3, F7_MULDIV).cost(2),
            InstEntry::r("div", OP_REG, 0x4, F7_MULDIV).cost(16),
            InstEntry::r("divu", OP_REG, 0x5, F7_MULDIV).cost(16),
            InstEntry::r("rem", OP_REG, 0x6, F7_MULDIV).cost(16),
            InstEntry::r("remu", OP_REG, 0x7, F7_MULDIV).cost(16),
        ]
    }
}
