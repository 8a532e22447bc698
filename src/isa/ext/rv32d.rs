//! RV32D double-precision floating point.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::*;

/// RV32D module. Requires F; the resolver enforces the implication.
pub struct Rv32d;

impl Extension for Rv32d {
    fn name(&self) -> &'static str {
        "RV32D"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::i("fld", OP_LOAD_FP, 0x3).rd_float(),
            InstEntry::s("fsd", OP_STORE_FP, 0x3).rs2_float(),
            InstEntry::r4("fmadd.d", OP_FMADD, 0x1).all_float().cost(4),
            InstEntry::r4("fmsub.d", OP_FMSUB, 0x1).all_float().cost(4),
            InstEntry::r4("fnmsub.d", OP_FNMSUB, 0x1).all_float().cost(4),
            InstEntry::r4("fnmadd.d", OP_FNMADD, 0x1).all_float().cost(4),
            InstEntry::r("fadd.d", OP_FP, 0x0, 0x01).all_float().cost(2),
            InstEntry::r("fsub.d", OP_FP, 0x0, 0x05).all_float().cost(2),
            InstEntry::r("fmul.d", OP_FP, 0x0, 0x09).all_float().cost(3),
            InstEntry::r("fdiv.d", OP_FP, 0x0, 0x0D).all_float().cost(16),
            InstEntry::r("fsqrt.d", OP_FP, 0x0, 0x2D).all_float().cost(16),
            InstEntry::r("fsgnj.d", OP_FP, 0x0, 0x11).all_float(),
            InstEntry::r("fsgnjn.d", OP_FP, 0x1, 0x11).all_float(),
            InstEntry::r("fsgnjx.d", OP_FP, 0x2, 0x11).all_float(),
            InstEntry::r("fmin.d", OP_FP, 0x0, 0x15).all_float(),
            InstEntry::r("fmax.d", OP_FP, 0x1, 0x15).all_float(),
            InstEntry::r("fcvt.s.d", OP_FP, 0x0, 0x20).sel(1).all_float().cost(2),
            InstEntry::r("fcvt.d.s", OP_FP, 0x0, 0x21).sel(0).all_float().cost(2),
            InstEntry::r("feq.d", OP_FP, 0x2, 0x51).rs1_float().rs2_float(),
            InstEntry::r("flt.d", OP_FP, 0x1, 0x51).rs1_float().rs2_float(),
            InstEntry::r("fle.d", OP_FP, 0x0, 0x51).rs1_float().rs2_float(),
            InstEntry::r("fclass.d", OP_FP, 0x1, 0x71).rs1_float(),
            InstEntry::r("fcvt.w.d", OP_FP, 0x0, 0x61).sel(0).rs1_float().cost(2),
            InstEntry::r("fcvt.wu.d", OP_FP, 0x0, 0x61).sel(1).rs1_float().cost(2),
            InstEntry::r("fcvt.d.w", OP_FP, 0x0, 0x69).sel(0).rd_float().cost(2),
            InstEntry::r("fcvt.d.wu", OP_FP, 0x0, 0x69).sel(1).rd_float().cost(2),
        ]
    }
}
