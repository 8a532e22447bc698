//! Architectural register file.
//!
//! Contains 32 general-purpose registers, 32 floating-point registers,
//! and the program counter. Register x0 is hardwired to zero. The
//! active register width is fixed at construction from the feature set;
//! RV32 harts mask writes to 32 bits.

use crate::common::DebugAccessError;
use crate::isa::Xlen;

/// Number of registers in each architectural file.
pub const NUM_REGS: usize = 32;

/// General-purpose and floating-point register file plus PC.
pub struct RegisterFile {
    xlen: Xlen,
    x: [u64; NUM_REGS],
    f: [u64; NUM_REGS],
    pc: u64,
}

impl RegisterFile {
    /// Creates a zeroed register file for the given width.
    pub fn new(xlen: Xlen) -> Self {
        Self {
            xlen,
            x: [0; NUM_REGS],
            f: [0; NUM_REGS],
            pc: 0,
        }
    }

    /// The register width the file was built for.
    pub fn xlen(&self) -> Xlen {
        self.xlen
    }

    fn mask(&self, val: u64) -> u64 {
        match self.xlen {
            Xlen::Rv32 => val & 0xFFFF_FFFF,
            Xlen::Rv64 => val,
        }
    }

    /// Reads a general-purpose register. x0 always reads zero.
    pub fn read(&self, idx: usize) -> u64 {
        if idx == 0 {
            0
        } else {
            self.x[idx]
        }
    }

    /// Writes a general-purpose register. Writes to x0 are ignored.
    pub fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.x[idx] = self.mask(val);
        }
    }

    /// Reads a floating-point register.
    pub fn read_f(&self, idx: usize) -> u64 {
        self.f[idx]
    }

    /// Writes a floating-point register.
    pub fn write_f(&mut self, idx: usize, val: u64) {
        self.f[idx] = val;
    }

    /// The program counter.
    pub fn pc(&self) -> u64 {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, pc: u64) {
        self.pc = self.mask(pc);
    }

    /// Debug-mode read of a general-purpose register.
    ///
    /// Independent of run/halt state. Fails with a typed error for an
    /// out-of-range index.
    pub fn debug_read(&self, idx: usize) -> Result<u64, DebugAccessError> {
        if idx >= NUM_REGS {
            return Err(DebugAccessError::OutOfRange(idx));
        }
        Ok(self.read(idx))
    }

    /// Debug-mode write of a general-purpose register.
    ///
    /// Fails for an out-of-range index, and on RV32 harts for a value
    /// that does not fit 32 bits.
    pub fn debug_write(&mut self, idx: usize, val: u64) -> Result<(), DebugAccessError> {
        if idx >= NUM_REGS {
            return Err(DebugAccessError::OutOfRange(idx));
        }
        if self.xlen == Xlen::Rv32 && val > u64::from(u32::MAX) {
            return Err(DebugAccessError::WidthMismatch(val));
        }
        self.write(idx, val);
        Ok(())
    }

    /// Clears every register and the PC.
    pub fn reset(&mut self) {
        self.x = [0; NUM_REGS];
        self.f = [0; NUM_REGS];
        self.pc = 0;
    }

    /// Dumps the general-purpose registers to stdout, two per line.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            println!(
                "x{:<2}={:#018x} x{:<2}={:#018x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}
