//! RV64M multiply/divide additions.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::OP_REG_32;

const F7_MULDIV: u8 = 0x01;

/// RV64M widening module.
pub struct Rv64m;

impl Extension for Rv64m {
    fn name(&self) -> &'static str {
        "RV64M"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::r("mulw", OP_REG_32, 0x0, F7_MULDIV).cost(2),
            InstEntry::r("divw", OP_REG_32, 0x4, F7_MULDIV).cost(16),
            InstEntry::r("divuw", OP_REG_32, 0x5, F7_MULDIV).cost(16),
            InstEntry::r("remw", OP_REG_32, 0x6, F7_MULDIV).cost(16),
            InstEntry::r("remuw", OP_REG_32, 0x7, F7_MULDIV).cost(16),
        ]
    }
}
