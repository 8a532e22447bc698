//! RV64D double-precision additions.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::OP_FP;

/// RV64D widening module.
pub struct Rv64d;

impl Extension for Rv64d {
    fn name(&self) -> &'static str {
        "RV64D"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::r("fcvt.l.d", OP_FP, 0x0, 0x61).sel(2).rs1_float().cost(2),
            InstEntry::r("fcvt.lu.d", OP_FP, 0x0, 0x61).sel(3).rs1_float().cost(2),
            InstEntry::r("fmv.x.d", OP_FP, 0x0, 0x71).rs1_float(),
            InstEntry::r("fcvt.d.l", OP_FP, 0x0, 0x69).sel(2).rd_float().cost(2),
            InstEntry::r("fcvt.d.lu", OP_FP, 0x0, 0x69).sel(3).rd_float().cost(2),
            InstEntry::r("fmv.d.x", OP_FP, 0x0, 0x79).rd_float(),
        ]
    }
}
