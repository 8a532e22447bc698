//! RISC-V Hart Simulator Library.
//!
//! This crate implements one processor core ("hart") of a cycle-driven
//! RISC-V machine simulator. It owns a configurable instruction set: a
//! master instruction table is assembled at model-build time from a base
//! ISA plus pluggable extension modules, encodings are compressed into
//! dense lookup keys, and fetched words are decoded every cycle into
//! fully populated instruction records.
//!
//! # Architecture
//!
//! * **Registry**: instruction descriptors merged from extension modules,
//!   indexed by mnemonic and by compressed encoding.
//! * **Decoder**: format-driven operand extraction (R/I/S/U/B/J/R4).
//! * **Hart**: the clocked execution controller (halt, resume,
//!   single-step) with debug-mode register access.
//!
//! # Modules
//!
//! * `common`: Shared error types and the output sink.
//! * `config`: Configuration loading and parsing.
//! * `core`: Hart state machine and register file.
//! * `isa`: Instruction table, feature resolution, and decoders.
//! * `sim`: Program image loader.
//! * `soc`: Memory collaborator interface.
//! * `stats`: Simulation statistics collection.

/// Shared error types and the warning/output sink.
///
/// Provides the configuration, execution, and debug-access error
/// taxonomy used throughout the simulator.
pub mod common;

/// Configuration system for core, memory, and cost-table settings.
///
/// Loads and parses TOML configuration files to customize the feature
/// string, memory layout, and optional cost overrides.
pub mod config;

/// Hart implementation: execution control and architectural registers.
///
/// Implements the halted/running/single-step state machine, the
/// per-cycle decode driver, and debug-mode register access.
pub mod core;

/// Instruction Set Architecture definitions and decoders.
///
/// Implements the instruction registry, feature-string resolution,
/// encoding compression, extension modules, and the seven
/// format-specific operand extractors.
pub mod isa;

/// Simulation harness utilities and binary loaders.
///
/// Handles loading flat program images into memory and supplying the
/// initial program counter.
pub mod sim;

/// Memory collaborator interface and a flat RAM implementation.
///
/// The hart consumes memory only through a read-word-at-address
/// operation; `Ram` backs the CLI and the test suites.
pub mod soc;

/// Simulation statistics collection and reporting.
///
/// Tracks cycle counts, decode counts, and fault encounters during
/// simulation execution.
pub mod stats;
