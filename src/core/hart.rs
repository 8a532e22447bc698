//! The hart: clocked execution control and per-cycle decode.
//!
//! One `Hart` is one simulated core. The external scheduler drives it
//! through `clock_tick` once per simulated cycle; `halt`, `resume`,
//! and `single_step` move it between the halted, running, and
//! single-step states. Decode resolves the word at the executing PC
//! against the frozen instruction registry; execution semantics belong
//! to the owning extension modules and stay outside this crate.

use crate::common::{DebugAccessError, ExecFault, Output};
use crate::core::regfile::RegisterFile;
use crate::isa::encoding::compress_word;
use crate::isa::{decode, InstRecord, InstRegistry, Xlen};
use crate::soc::Memory;
use crate::stats::SimStats;
use std::sync::Arc;

/// One simulated processor core.
///
/// Owns its register file and instruction-record scratch exclusively;
/// shares the frozen registry and the memory collaborator read-only.
pub struct Hart {
    id: u32,
    halted: bool,
    single_step: bool,
    stopped: bool,
    start_pc: u64,
    regs: RegisterFile,
    inst: InstRecord,
    registry: Arc<InstRegistry>,
    mem: Arc<dyn Memory>,
    output: Arc<Output>,
    /// Per-hart statistics, readable by the harness after the run.
    pub stats: SimStats,
}

impl Hart {
    /// Creates a hart in the running state with its PC at `start_pc`.
    pub fn new(
        id: u32,
        registry: Arc<InstRegistry>,
        mem: Arc<dyn Memory>,
        output: Arc<Output>,
        start_pc: u64,
    ) -> Self {
        let mut regs = RegisterFile::new(registry.xlen());
        regs.set_pc(start_pc);
        Self {
            id,
            halted: false,
            single_step: false,
            stopped: false,
            start_pc,
            regs,
            inst: InstRecord::default(),
            registry,
            mem,
            output,
            stats: SimStats::default(),
        }
    }

    /// The hart id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The executing program counter.
    pub fn get_pc(&self) -> u64 {
        self.regs.pc()
    }

    /// Whether the hart is halted.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Whether the hart has fatally stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The most recent decoded instruction record.
    pub fn last_inst(&self) -> &InstRecord {
        &self.inst
    }

    /// Per-processor clock function, invoked once per simulated cycle.
    ///
    /// A halted hart is a no-op that stays schedulable. A running hart
    /// performs one fetch/decode; a decode fault stops the core and the
    /// return value reports it to the scheduler. Always returns in time
    /// bounded by one decode.
    pub fn clock_tick(&mut self, cycle: u64) -> bool {
        self.stats.cycles += 1;
        if self.stopped {
            return false;
        }
        if self.halted && !self.single_step {
            return true;
        }

        let ok = self.step(cycle);
        if self.single_step {
            self.single_step = false;
            self.halted = true;
        }
        ok
    }

    /// Halts the hart. Idempotent.
    pub fn halt(&mut self) -> bool {
        self.halted = true;
        self.single_step = false;
        true
    }

    /// Resumes a halted hart. No-op if already running.
    pub fn resume(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.halted = false;
        true
    }

    /// Executes exactly one fetch/decode cycle from the halted state,
    /// then returns to halted.
    ///
    /// Arms the single-step flag and drives one `clock_tick`, which
    /// clears the flag after its decode. Fails (returns `false`) if the
    /// hart is running or has stopped.
    pub fn single_step(&mut self) -> bool {
        if self.stopped || !self.halted {
            return false;
        }
        self.single_step = true;
        self.halted = false;
        self.clock_tick(self.stats.cycles)
    }

    /// Resets the core: registers cleared, PC back to the start
    /// address, halted and stop flags cleared.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.regs.set_pc(self.start_pc);
        self.inst.reset();
        self.halted = false;
        self.single_step = false;
        self.stopped = false;
    }

    /// Debug-mode register read, independent of run/halt state.
    pub fn debug_read_reg(&self, idx: usize) -> Result<u64, DebugAccessError> {
        self.regs.debug_read(idx)
    }

    /// Debug-mode register write, independent of run/halt state.
    pub fn debug_write_reg(&mut self, idx: usize, val: u64) -> Result<(), DebugAccessError> {
        self.regs.debug_write(idx, val)
    }

    /// Whether this hart runs the 32-bit register width.
    pub fn debug_is_rv32(&self) -> bool {
        self.registry.xlen() == Xlen::Rv32
    }

    /// Decodes the instruction at the current PC.
    ///
    /// Fetches the word through the memory collaborator (one
    /// non-reentrant read), compresses it, resolves the registry entry,
    /// and extracts operands per the entry's format tag.
    pub fn decode_inst(&self) -> Result<InstRecord, ExecFault> {
        let pc = self.regs.pc();
        let word = self
            .mem
            .read_word(pc)
            .map_err(|fault| ExecFault::Fetch { pc, fault })?;
        let key = compress_word(word);
        let id = self
            .registry
            .lookup_encoding(key)
            .ok_or(ExecFault::IllegalInstruction { word, pc })?;
        Ok(decode::decode(word, id, self.registry.entry(id)))
    }

    fn step(&mut self, cycle: u64) -> bool {
        self.inst.reset();
        match self.decode_inst() {
            Ok(rec) => {
                self.inst = rec;
                let entry = self.registry.entry(rec.entry);
                let (module, _) = self.registry.ext_of(rec.entry);
                self.output.verbose(
                    2,
                    &format!(
                        "hart {} cycle {} pc={:#x} {} [{}]",
                        self.id,
                        cycle,
                        self.regs.pc(),
                        entry.mnemonic,
                        self.registry.ext_name(module)
                    ),
                );
                self.stats.instructions_decoded += 1;
                self.stats.cost_cycles += u64::from(entry.cost);
                self.regs.set_pc(self.regs.pc().wrapping_add(4));
                true
            }
            Err(fault) => {
                self.output.warn(&format!("hart {}: {}", self.id, fault));
                self.stats.faults += 1;
                self.stopped = true;
                self.halted = true;
                false
            }
        }
    }

    /// Dumps PC and register state to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#018x}", self.regs.pc());
        self.regs.dump();
    }
}
