//! RV64F single-precision additions (64-bit integer converts).

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::OP_FP;

/// RV64F widening module.
pub struct Rv64f;

impl Extension for Rv64f {
    fn name(&self) -> &'static str {
        "RV64F"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::r("fcvt.l.s", OP_FP, 0x0, 0x60).sel(2).rs1_float().cost(2),
            InstEntry::r("fcvt.lu.s", OP_FP, 0x0, 0x60).sel(3).rs1_float().cost(2),
            InstEntry::r("fcvt.s.l", OP_FP, 0x0, 0x68).sel(2).rd_float().cost(2),
            InstEntry::r("fcvt.s.lu", OP_FP, 0x0, 0x68).sel(3).rd_float().cost(2),
        ]
    }
}
