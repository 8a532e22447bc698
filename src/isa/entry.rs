//! Instruction descriptors.
//!
//! An `InstEntry` is one row of the instruction registry: the identity
//! record for one instruction variant. Extension modules declare their
//! instructions as entries; the registry merges them and derives both
//! lookup indices from their fields. Entries are immutable once merged,
//! except the cost field which the cost-override loader may rewrite.

/// Binary layout classification governing operand extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstFormat {
    /// Register-register: rd, rs1, rs2, funct fields.
    R,
    /// Register-immediate: rd, rs1, 12-bit signed immediate.
    I,
    /// Store: rs1, rs2, split 12-bit signed immediate.
    S,
    /// Upper immediate: rd, 20-bit immediate in the upper bits.
    U,
    /// Branch: rs1, rs2, 13-bit signed immediate, low bit zero.
    B,
    /// Jump: rd, 21-bit signed immediate, low bit zero.
    J,
    /// Fused register-register: rd, rs1, rs2, rs3.
    R4,
}

/// Register file class of one operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegClass {
    /// General-purpose integer register.
    Gpr,
    /// Floating-point register.
    Float,
    /// Slot unused by this instruction.
    Unused,
}

/// One instruction variant in the registry.
///
/// The structural fields (`opcode`, `funct3`, `funct7`, `sel`) identify
/// the encoding; `format` selects the operand extractor; the register
/// classes drive floating-point classification; `cost` is a cycle
/// weight consumed by the scheduler.
#[derive(Debug, Clone)]
pub struct InstEntry {
    /// Mnemonic, unique within a registry.
    pub mnemonic: &'static str,
    /// Major opcode (bits 0..6 of the word).
    pub opcode: u8,
    /// funct3 discriminator, where the format carries one.
    pub funct3: u8,
    /// funct7 discriminator, where the format carries one.
    pub funct7: u8,
    /// Secondary discriminator: imm12 for SYSTEM encodings, the rs2
    /// field for FP-convert encodings, zero otherwise.
    pub sel: u16,
    /// Binary layout tag.
    pub format: InstFormat,
    /// Cycle cost. Mutable through cost overrides only.
    pub cost: u8,
    /// Destination register class.
    pub rd_class: RegClass,
    /// First source register class.
    pub rs1_class: RegClass,
    /// Second source register class.
    pub rs2_class: RegClass,
    /// Third source register class (R4 only).
    pub rs3_class: RegClass,
}

impl InstEntry {
    fn base(
        mnemonic: &'static str,
        opcode: u8,
        funct3: u8,
        funct7: u8,
        format: InstFormat,
    ) -> Self {
        let (rd, rs1, rs2, rs3) = match format {
            InstFormat::R => (RegClass::Gpr, RegClass::Gpr, RegClass::Gpr, RegClass::Unused),
            InstFormat::I => (RegClass::Gpr, RegClass::Gpr, RegClass::Unused, RegClass::Unused),
            InstFormat::S => (RegClass::Unused, RegClass::Gpr, RegClass::Gpr, RegClass::Unused),
            InstFormat::U => (RegClass::Gpr, RegClass::Unused, RegClass::Unused, RegClass::Unused),
            InstFormat::B => (RegClass::Unused, RegClass::Gpr, RegClass::Gpr, RegClass::Unused),
            InstFormat::J => (RegClass::Gpr, RegClass::Unused, RegClass::Unused, RegClass::Unused),
            InstFormat::R4 => (RegClass::Gpr, RegClass::Gpr, RegClass::Gpr, RegClass::Gpr),
        };
        Self {
            mnemonic,
            opcode,
            funct3,
            funct7,
            sel: 0,
            format,
            cost: 1,
            rd_class: rd,
            rs1_class: rs1,
            rs2_class: rs2,
            rs3_class: rs3,
        }
    }

    /// R-type entry with default register classes and cost 1.
    pub fn r(mnemonic: &'static str, opcode: u8, funct3: u8, funct7: u8) -> Self {
        Self::base(mnemonic, opcode, funct3, funct7, InstFormat::R)
    }

    /// I-type entry.
    pub fn i(mnemonic: &'static str, opcode: u8, funct3: u8) -> Self {
        Self::base(mnemonic, opcode, funct3, 0, InstFormat::I)
    }

    /// I-type shift entry carrying the arithmetic-shift bit in funct7.
    pub fn i_shift(mnemonic: &'static str, opcode: u8, funct3: u8, funct7: u8) -> Self {
        Self::base(mnemonic, opcode, funct3, funct7, InstFormat::I)
    }

    /// S-type entry.
    pub fn s(mnemonic: &'static str, opcode: u8, funct3: u8) -> Self {
        Self::base(mnemonic, opcode, funct3, 0, InstFormat::S)
    }

    /// U-type entry.
    pub fn u(mnemonic: &'static str, opcode: u8) -> Self {
        Self::base(mnemonic, opcode, 0, 0, InstFormat::U)
    }

    /// B-type entry.
    pub fn b(mnemonic: &'static str, opcode: u8, funct3: u8) -> Self {
        Self::base(mnemonic, opcode, funct3, 0, InstFormat::B)
    }

    /// J-type entry.
    pub fn j(mnemonic: &'static str, opcode: u8) -> Self {
        Self::base(mnemonic, opcode, 0, 0, InstFormat::J)
    }

    /// R4-type entry; funct7 carries the two fmt bits.
    pub fn r4(mnemonic: &'static str, opcode: u8, fmt: u8) -> Self {
        Self::base(mnemonic, opcode, 0, fmt, InstFormat::R4)
    }

    /// Sets the secondary discriminator.
    pub fn sel(mut self, sel: u16) -> Self {
        self.sel = sel;
        self
    }

    /// Sets the cycle cost.
    pub fn cost(mut self, cost: u8) -> Self {
        self.cost = cost;
        self
    }

    /// Marks the destination register as floating-point.
    pub fn rd_float(mut self) -> Self {
        self.rd_class = RegClass::Float;
        self
    }

    /// Marks rs1 as floating-point.
    pub fn rs1_float(mut self) -> Self {
        self.rs1_class = RegClass::Float;
        self
    }

    /// Marks rs2 as floating-point.
    pub fn rs2_float(mut self) -> Self {
        self.rs2_class = RegClass::Float;
        self
    }

    /// Marks rs3 as floating-point.
    pub fn rs3_float(mut self) -> Self {
        self.rs3_class = RegClass::Float;
        self
    }

    /// Marks every used operand slot as floating-point.
    pub fn all_float(mut self) -> Self {
        for class in [
            &mut self.rd_class,
            &mut self.rs1_class,
            &mut self.rs2_class,
            &mut self.rs3_class,
        ] {
            if *class == RegClass::Gpr {
                *class = RegClass::Float;
            }
        }
        self
    }

    /// Whether any operand routes through the floating-point file.
    pub fn is_float(&self) -> bool {
        self.rd_class == RegClass::Float
            || self.rs1_class == RegClass::Float
            || self.rs2_class == RegClass::Float
            || self.rs3_class == RegClass::Float
    }
}
