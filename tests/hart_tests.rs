//! Integration tests for the hart controller: clocking, halt/resume,
//! single-stepping, fault stops, and debug register access.

use hartsim::common::{DebugAccessError, MemFault, Output};
use hartsim::core::Hart;
use hartsim::isa::{FeatureSet, InstFormat, InstRegistry};
use hartsim::soc::{Memory, Ram};
use std::sync::Arc;

const RAM_BASE: u64 = 0x8000_0000;

/// Builds a hart over a RAM image of `program` words, sharing the
/// returned output sink.
fn hart_with(features: &str, program: &[u32]) -> (Hart, Arc<Output>) {
    let fs = FeatureSet::parse(features).unwrap();
    let output = Arc::new(Output::default());
    let registry = Arc::new(InstRegistry::build(&fs, None, &output).unwrap());

    let mut ram = Ram::new(RAM_BASE, 0x1000);
    for (i, word) in program.iter().enumerate() {
        ram.write_bytes(RAM_BASE + 4 * i as u64, &word.to_le_bytes());
    }

    let hart = Hart::new(0, registry, Arc::new(ram), output.clone(), RAM_BASE);
    (hart, output)
}

const ADD: u32 = 0x0010_8133; // add x2, x1, x1
const ADDI: u32 = 0x0010_8093; // addi x1, x1, 1

/// Tests that a tick decodes one instruction and advances the PC.
#[test]
fn test_tick_advances_pc() {
    let (mut hart, _) = hart_with("RV64I", &[ADD, ADDI]);
    assert!(hart.clock_tick(0));
    assert_eq!(hart.get_pc(), RAM_BASE + 4);
    assert_eq!(hart.stats.instructions_decoded, 1);

    let rec = hart.last_inst();
    assert_eq!(rec.format, InstFormat::R);
    assert_eq!((rec.rd, rec.rs1, rec.rs2), (2, 1, 1));
    assert!(rec.valid);
}

/// Tests that a halted hart ticks as a schedulable no-op.
#[test]
fn test_halted_tick_is_noop() {
    let (mut hart, _) = hart_with("RV64I", &[ADD]);
    assert!(hart.halt());
    assert!(hart.is_halted());
    assert!(hart.clock_tick(0));
    assert_eq!(hart.get_pc(), RAM_BASE);
    assert_eq!(hart.stats.instructions_decoded, 0);
    // Cycles still advance while halted.
    assert_eq!(hart.stats.cycles, 1);
}

/// Tests that halt is idempotent and resume restarts decode.
#[test]
fn test_halt_resume() {
    let (mut hart, _) = hart_with("RV64I", &[ADD, ADDI]);
    assert!(hart.halt());
    assert!(hart.halt());
    assert!(hart.resume());
    assert!(hart.clock_tick(0));
    assert_eq!(hart.get_pc(), RAM_BASE + 4);
}

/// Tests that single-step runs exactly one decode then re-halts.
#[test]
fn test_single_step() {
    let (mut hart, _) = hart_with("RV64I", &[ADD, ADDI]);
    hart.halt();

    assert!(hart.single_step());
    assert!(hart.is_halted());
    assert_eq!(hart.get_pc(), RAM_BASE + 4);
    assert_eq!(hart.stats.instructions_decoded, 1);
    // The step runs through the clock path, so the cycle count moves.
    assert_eq!(hart.stats.cycles, 1);

    // A subsequent plain tick stays halted.
    assert!(hart.clock_tick(1));
    assert_eq!(hart.get_pc(), RAM_BASE + 4);
}

/// Tests that single-step is rejected while running.
#[test]
fn test_single_step_requires_halted() {
    let (mut hart, _) = hart_with("RV64I", &[ADD]);
    assert!(!hart.single_step());
    assert_eq!(hart.get_pc(), RAM_BASE);
}

/// Tests that an unknown word stops the core and emits one warning.
#[test]
fn test_illegal_instruction_stops() {
    let (mut hart, output) = hart_with("RV64I", &[0x0000_0000]);
    assert!(!hart.clock_tick(0));
    assert!(hart.is_stopped());
    assert!(hart.is_halted());
    assert_eq!(hart.get_pc(), RAM_BASE);
    assert_eq!(hart.stats.faults, 1);
    assert_eq!(output.warnings_emitted(), 1);

    // A stopped hart is no longer schedulable and cannot resume.
    assert!(!hart.clock_tick(1));
    assert!(!hart.resume());
    assert!(!hart.single_step());
}

/// Tests that an instruction outside the enabled features is illegal.
#[test]
fn test_feature_gated_decode() {
    const MUL: u32 = 0x0220_80B3; // mul x1, x1, x2
    let (mut hart, _) = hart_with("RV64IM", &[MUL]);
    assert!(hart.clock_tick(0));

    let (mut hart, _) = hart_with("RV64I", &[MUL]);
    assert!(!hart.clock_tick(0));
}

/// Tests that running off the end of RAM reports a fetch fault.
#[test]
fn test_fetch_fault_stops() {
    let program = [ADD; 0x1000 / 4];
    let (mut hart, _) = hart_with("RV64I", &program);
    for cycle in 0..program.len() as u64 {
        assert!(hart.clock_tick(cycle));
    }
    assert!(!hart.clock_tick(program.len() as u64));
    assert!(hart.is_stopped());
    assert_eq!(hart.stats.faults, 1);
}

/// Tests that a fetch near the top of the address space faults
/// instead of wrapping past the RAM bound.
#[test]
fn test_read_word_top_of_address_space() {
    let ram = Ram::new(0, 0x1000);
    let addr = u64::MAX - 3;
    assert_eq!(ram.read_word(addr), Err(MemFault::OutOfBounds(addr)));
    assert_eq!(ram.read_word(u64::MAX), Err(MemFault::Misaligned(u64::MAX)));
}

/// Tests that a start PC near u64::MAX stops the core as a fetch
/// fault rather than aborting.
#[test]
fn test_tick_near_address_space_top_stops() {
    let fs = FeatureSet::parse("RV64I").unwrap();
    let output = Arc::new(Output::default());
    let registry = Arc::new(InstRegistry::build(&fs, None, &output).unwrap());
    let ram = Ram::new(0, 0x1000);

    let mut hart = Hart::new(0, registry, Arc::new(ram), output, u64::MAX - 3);
    assert!(!hart.clock_tick(0));
    assert!(hart.is_stopped());
    assert_eq!(hart.stats.faults, 1);
}

/// Tests that per-entry costs accumulate into the stats.
#[test]
fn test_cost_accumulation() {
    const DIV: u32 = 0x0220_C0B3; // div x1, x1, x2
    let (mut hart, _) = hart_with("RV64IM", &[ADD, DIV]);
    assert!(hart.clock_tick(0));
    assert!(hart.clock_tick(1));
    // add costs 1, div costs 16.
    assert_eq!(hart.stats.cost_cycles, 17);
}

/// Tests debug register access while running and halted.
#[test]
fn test_debug_register_access() {
    let (mut hart, _) = hart_with("RV64I", &[ADD]);
    hart.debug_write_reg(5, 0xDEAD_BEEF_0000_0001).unwrap();
    assert_eq!(hart.debug_read_reg(5).unwrap(), 0xDEAD_BEEF_0000_0001);

    hart.halt();
    assert_eq!(hart.debug_read_reg(5).unwrap(), 0xDEAD_BEEF_0000_0001);

    // x0 stays hardwired to zero.
    hart.debug_write_reg(0, 7).unwrap();
    assert_eq!(hart.debug_read_reg(0).unwrap(), 0);
}

/// Tests the out-of-range debug index error.
#[test]
fn test_debug_index_out_of_range() {
    let (mut hart, _) = hart_with("RV64I", &[ADD]);
    assert_eq!(
        hart.debug_read_reg(32).unwrap_err(),
        DebugAccessError::OutOfRange(32)
    );
    assert_eq!(
        hart.debug_write_reg(99, 0).unwrap_err(),
        DebugAccessError::OutOfRange(99)
    );
}

/// Tests the RV32 width check on debug writes.
#[test]
fn test_debug_width_mismatch_rv32() {
    let (mut hart, _) = hart_with("RV32I", &[ADD]);
    assert!(hart.debug_is_rv32());
    assert_eq!(
        hart.debug_write_reg(5, 0x1_0000_0000).unwrap_err(),
        DebugAccessError::WidthMismatch(0x1_0000_0000)
    );
    hart.debug_write_reg(5, u64::from(u32::MAX)).unwrap();

    let (hart, _) = hart_with("RV64I", &[ADD]);
    assert!(!hart.debug_is_rv32());
}

/// Tests that reset restores the start PC and clears state.
#[test]
fn test_reset() {
    let (mut hart, _) = hart_with("RV64I", &[ADD, 0x0000_0000]);
    assert!(hart.clock_tick(0));
    assert!(!hart.clock_tick(1));
    hart.debug_write_reg(5, 42).ok();

    hart.reset();
    assert_eq!(hart.get_pc(), RAM_BASE);
    assert!(!hart.is_halted());
    assert!(!hart.is_stopped());
    assert_eq!(hart.debug_read_reg(5).unwrap(), 0);
    assert!(hart.clock_tick(2));
}
