//! RV32F single-precision floating point.
//!
//! Arithmetic and convert entries leave funct3 zero; it carries the
//! rounding mode in those encodings and does not participate in the
//! lookup key. Convert entries carry their rs2 discriminator in `sel`.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::*;

/// RV32F module.
pub struct Rv32f;

impl Extension for Rv32f {
    fn name(&self) -> &'static str {
        "RV32F"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::i("flw", OP_LOAD_FP, 0x2).rd_float(),
            InstEntry::s("fsw", OP_STORE_FP, 0x2).rs2_float(),
            InstEntry::r4("fmadd.s", OP_FMADD, 0x0).all_float().cost(4),
            InstEntry::r4("fmsub.s", OP_FMSUB, 0x0).all_float().cost(4),
            InstEntry::r4("fnmsub.s", OP_FNMSUB, 0x0).all_float().cost(4),
            InstEntry::r4("fnmadd.s", OP_FNMADD, 0x0).all_float().cost(4),
            InstEntry::r("fadd.s", OP_FP, 0x0, 0x00).all_float().cost(2),
            InstEntry::r("fsub.s", OP_FP, 0x0, 0x04).all_float().cost(2),
            InstEntry::r("fmul.s", OP_FP, 0x0, 0x08).all_float().cost(3),
            InstEntry::r("fdiv.s", OP_FP, 0x0, 0x0C).all_float().cost(16),
            InstEntry::r("fsqrt.s", OP_FP, 0x0, 0x2C).all_float().cost(16),
            InstEntry::r("fsgnj.s", OP_FP, 0x0, 0x10).all_float(),
            InstEntry::r("fsgnjn.s", OP_FP, 0x1, 0x10).all_float(),
            InstEntry::r("fsgnjx.s", OP_FP, 0x2, 0x10).all_float(),
            InstEntry::r("fmin.s", OP_FP, 0x0, 0x14).all_float(),
            InstEntry::r("fmax.s", OP_FP, 0x1, 0x14).all_float(),
            InstEntry::r("fcvt.w.s", OP_FP, 0x0, 0x60).sel(0).rs1_float().cost(2),
            InstEntry::r("fcvt.wu.s", OP_FP, 0x0, 0x60).sel(1).rs1_float().cost(2),
            InstEntry::r("fmv.x.w", OP_FP, 0x0, 0x70).rs1_float(),
            InstEntry::r("feq.s", OP_FP, 0x2, 0x50).rs1_float().rs2_float(),
            InstEntry::r("flt.s", OP_FP, 0x1, 0x50).rs1_float().rs2_float(),
            InstEntry::r("fle.s", OP_FP, 0x0, 0x50).rs1_float().rs2_float(),
            InstEntry::r("fclass.s", OP_FP, 0x1, 0x70).rs1_float(),
            InstEntry::r("fcvt.s.w", OP_FP, 0x0, 0x68).sel(0).rd_float().cost(2),
            InstEntry::r("fcvt.s.wu", OP_FP, 0x0, 0x68).sel(1).rd_float().cost(2),
            InstEntry::r("fmv.w.x", OP_FP, 0x0, 0x78).rd_float(),
        ]
    }
}
