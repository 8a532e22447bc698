//! RV32A atomics.
//!
//! Entry funct7 values hold the funct5 shifted into place with the
//! aq/rl ordering bits zero; the compressor masks those bits on the
//! word side to match.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::OP_AMO;

const F3_W: u8 = 0x2;

const fn f5(funct5: u8) -> u8 {
    funct5 << 2
}

/// RV32A module.
pub struct Rv32a;

impl Extension for Rv32a {
    fn name(&self) -> &'static str {
        "RV32A"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::r("amoadd.w", OP_AMO, F3_W, f5(0x00)).cost(2),
            InstEntry::r("amoswap.w", OP_AMO, F3_W, f5(0x01)).cost(2),
            InstEntry::r("lr.w", OP_AMO, F3_W, f5(0x02)).cost(2),
            InstEntry::r("sc.w", OP_AMO, F3_W, f5(0x03)).cost(2),
            InstEntry::r("amoxor.w", OP_AMO, F3_W, f5(0x04)).cost(2),
            InstEntry::r("amoor.w", OP_AMO, F3_W, f5(0x08)).cost(2),
            InstEntry::r("amoand.w", OP_AMO, F3_W, f5(0x0C)).cost(2),
            InstEntry::r("amomin.w", OP_AMO, F3_W, f5(0x10)).cost(2),
            InstEntry::r("amomax.w", OP_AMO, F3_W, f5(0x14)).cost(2),
            InstEntry::r("amominu.w", OP_AMO, F3_W, f5(0x18)).cost(2),
            InstEntry::r("amomaxu.w", OP_AMO, F3_W, f5(0x1C)).cost(2),
        ]
    }
}
