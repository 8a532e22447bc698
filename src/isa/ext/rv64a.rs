//! RV64A atomics additions.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::OP_AMO;

const F3_D: u8 = 0x3;

const fn f5(funct5: u8) -> u8 {
    funct5 << 2
}

/// RV64A widening module.
pub struct Rv64a;

impl Extension for Rv64a {
    fn name(&self) -> &'static str {
        "RV64A"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::r("amoadd.d", OP_AMO, F3_D, f5(0x00)).cost(2),
            InstEntry::r("amoswap.d", OP_AMO, F3_D, f5(0x01)).cost(2),
            InstEntry::r("lr.d", OP_AMO, F3_D, f5(0x02)).cost(2),
            InstEntry::r("sc.d", OP_AMO, F3_D, f5(0x03)).cost(2),
            InstEntry::r("amoxor.d", OP_AMO, F3_D, f5(0x04)).cost(2),
            InstEntry::r("amoor.d", OP_AMO, F3_D, f5(0x08)).cost(2),
            InstEntry::r("amoand.d", OP_AMO, F3_D, f5(0x0C)).cost(2),
            InstEntry::r("amomin.d", OP_AMO, F3_D, f5(0x10)).cost(2),
            InstEntry::r("amomax.d", OP_AMO, F3_D, f5(0x14)).cost(2),
            InstEntry::r("amominu.d", OP_AMO, F3_D, f5(0x18)).cost(2),
            InstEntry::r("amomaxu.d", OP_AMO, F3_D, f5(0x1C)).cost(2),
        ]
    }
}
