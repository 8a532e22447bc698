//! RISC-V major opcode constants.

/// LUI.
pub const OP_LUI: u8 = 0x37;
/// AUIPC.
pub const OP_AUIPC: u8 = 0x17;
/// JAL.
pub const OP_JAL: u8 = 0x6F;
/// JALR.
pub const OP_JALR: u8 = 0x67;
/// Conditional branches.
pub const OP_BRANCH: u8 = 0x63;
/// Integer loads.
pub const OP_LOAD: u8 = 0x03;
/// Integer stores.
pub const OP_STORE: u8 = 0x23;
/// Register-immediate ALU ops.
pub const OP_IMM: u8 = 0x13;
/// Register-register ALU ops.
pub const OP_REG: u8 = 0x33;
/// 32-bit register-immediate ALU ops (RV64).
pub const OP_IMM_32: u8 = 0x1B;
/// 32-bit register-register ALU ops (RV64).
pub const OP_REG_32: u8 = 0x3B;
/// FENCE / FENCE.I.
pub const OP_MISC_MEM: u8 = 0x0F;
/// ECALL / EBREAK / CSR ops.
pub const OP_SYSTEM: u8 = 0x73;
/// Atomics.
pub const OP_AMO: u8 = 0x2F;
/// Floating-point loads.
pub const OP_LOAD_FP: u8 = 0x07;
/// Floating-point stores.
pub const OP_STORE_FP: u8 = 0x27;
/// Floating-point register ops.
pub const OP_FP: u8 = 0x53;
/// Fused multiply-add.
pub const OP_FMADD: u8 = 0x43;
/// Fused multiply-subtract.
pub const OP_FMSUB: u8 = 0x47;
/// Fused negated multiply-subtract.
pub const OP_FNMSUB: u8 = 0x4B;
/// Fused negated multiply-add.
pub const OP_FNMADD: u8 = 0x4F;
