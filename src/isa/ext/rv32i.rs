//! RV32I base integer instruction set.

use super::Extension;
use crate::isa::entry::InstEntry;
use crate::isa::opcodes::*;

/// The RV32I base module. Always merged first.
pub struct Rv32i;

impl Extension for Rv32i {
    fn name(&self) -> &'static str {
        "RV32I"
    }

    fn instructions(&self) -> Vec<InstEntry> {
        vec![
            InstEntry::u("lui", OP_LUI),
            InstEntry::u("auipc", OP_AUIPC),
            InstEntry::j("jal", OP_JAL),
            InstEntry::i("jalr", OP_JALR, 0x0),
            InstEntry::b("beq", OP_BRANCH, 0x0),
            InstEntry::b("bne", OP_BRANCH, 0x1),
            InstEntry::b("blt", OP_BRANCH, 0x4),
            InstEntry::b("bge", OP_BRANCH, 0x5),
            InstEntry::b("bltu", OP_BRANCH, 0x6),
            InstEntry::b("bgeu", OP_BRANCH, 0x7),
            InstEntry::i("lb", OP_LOAD, 0x0),
            InstEntry::i("lh", OP_LOAD, 0x1),
            InstEntry::i("lw", OP_LOAD, 0x2),
            InstEntry::i("lbu", OP_LOAD, 0x4),
            InstEntry::i("lhu", OP_LOAD, 0x5),
            InstEntry::s("sb", OP_STORE, 0x0),
            InstEntry::s("sh", OP_STORE, 0x1),
            InstEntry::s("sw", OP_STORE, 0x2),
            InstEntry::i("addi", OP_IMM, 0x0),
            InstEntry::i("slti", OP_IMM, 0x2),
            InstEntry::i("sltiu", OP_IMM, 0x3),
            InstEntry::i("xori", OP_IMM, 0x4),
            InstEntry::i("ori", OP_IMM, 0x6),
            InstEntry::i("andi", OP_IMM, 0x7),
            InstEntry::i_shift("slli", OP_IMM, 0x1, 0x00),
            InstEntry::i_shift("srli", OP_IMM, 0x5, 0x00),
            InstEntry::i_shift("srai", OP_IMM, 0x5, 0x20),
            InstEntry::r("add", OP_REG, 0x0, 0x00),
            InstEntry::r("sub", OP_REG, 0x0, 0x20),
            InstEntry::r("sll", OP_REG, 0x1, 0x00),
            InstEntry::r("slt", OP_REG, 0x2, 0x00),
            InstEntry::r("sltu", OP_REG, 0x3, 0x00),
            InstEntry::r("xor", OP_REG, 0x4, 0x00),
            InstEntry::r("srl", OP_REG, 0x5, 0x00),
            InstEntry::r("sra", OP_REG, 0x5, 0x20),
            InstEntry::r("or", OP_REG, 0x6, 0x00),
            InstEntry::r("and", OP_REG, 0x7, 0x00),
            InstEntry::i("fence", OP_MISC_MEM, 0x0),
            InstEntry::i("fence.i", OP_MISC_MEM, 0x1),
            InstEntry::i("ecall", OP_SYSTEM, 0x0).sel(0x000),
            InstEntry::i("ebreak", OP_SYSTEM, 0x0).sel(0x001),
            InstEntry::i("csrrw", OP_SYSTEM, 0x1),
            InstEntry::i("csrrs", OP_SYSTEM, 0x2),
            InstEntry::i("csrrc", OP_SYSTEM, 0x3),
            InstEntry::i("csrrwi", OP_SYSTEM, 0x5),
            InstEntry::i("csrrsi", OP_SYSTEM, 0x6),
            InstEntry::i("csrrci", OP_SYSTEM, 0x7),
        ]
    }
}
