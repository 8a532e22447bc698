//! RISC-V Hart Simulator CLI.
//!
//! The main executable. It parses command-line arguments, loads the
//! TOML configuration, assembles the instruction registry from the
//! configured feature string, loads a flat binary into RAM, and ticks
//! the hart cycle-by-cycle until it stops or the step budget runs out.

use clap::Parser;
use std::sync::Arc;
use std::{fs, process};

extern crate hartsim;

use hartsim::common::Output;
use hartsim::config::Config;
use hartsim::core::Hart;
use hartsim::isa::{CostTable, FeatureSet, InstRegistry, Xlen};
use hartsim::sim::loader;
use hartsim::soc::Ram;

/// Command-line arguments for the hart simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V Hart Decode Simulator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    #[arg(short, long)]
    file: Option<String>,

    /// Maximum number of cycles to simulate.
    #[arg(short, long)]
    steps: Option<u64>,

    /// Feature-string override, e.g. RV64IMAFD or RV32I+M.
    #[arg(long)]
    features: Option<String>,
}

fn main() {
    let args = Args::parse();
    let config_content = fs::read_to_string(&args.config).expect("Failed to read config");
    let config: Config = toml::from_str(&config_content).expect("Failed to parse config");

    let feature_string = args.features.unwrap_or_else(|| config.general.features.clone());
    let features = FeatureSet::parse(&feature_string).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Bad feature string '{}': {}", feature_string, e);
        process::exit(1);
    });

    let costs = match &config.costs.table {
        Some(path) => Some(CostTable::from_path(path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: {}", e);
            process::exit(1);
        })),
        None => None,
    };

    let output = Arc::new(Output::new(config.general.verbose));
    let registry = InstRegistry::build(&features, costs.as_ref(), &output).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    });
    let registry = Arc::new(registry);

    let ram_base = config.memory.ram_base_val();
    let ram_size = config.memory.ram_size_val();
    let start_pc = config.general.start_pc_val();

    println!("Global Configuration");
    println!("--------------------");
    println!("General:");
    println!("  Features:           {}", feature_string);
    println!(
        "  Width:              {}",
        match features.xlen() {
            Xlen::Rv32 => "RV32",
            Xlen::Rv64 => "RV64",
        }
    );
    println!("  Start PC:           {:#x}", start_pc);
    println!("System:");
    println!("  RAM Base:           {:#x}", ram_base);
    println!("  RAM Size:           {} MB", ram_size / 1024 / 1024);
    println!("Registry:");
    println!("  Modules:            {}", registry.ext_count());
    println!("  Instructions:       {}", registry.len());
    println!(
        "  Cost Overrides:     {}",
        costs.as_ref().map_or(0, |t| t.len())
    );
    println!("--------------------");

    let mut ram = Ram::new(ram_base, ram_size);
    match args.file {
        Some(ref bin_path) => {
            println!("[*] Direct Execution Mode");
            let bin_data = loader::load_binary(bin_path);
            loader::load_image(&mut ram, &bin_data, start_pc);
        }
        None => {
            eprintln!("Error: No binary specified.");
            eprintln!("Usage:  --file <binary.bin> [--steps <n>]");
            process::exit(1);
        }
    }

    let mut hart = Hart::new(0, registry, Arc::new(ram), output, start_pc);

    let mut cycle: u64 = 0;
    loop {
        if let Some(max) = args.steps {
            if cycle >= max {
                println!("\n[*] Step budget reached at cycle {}", cycle);
                break;
            }
        }
        if !hart.clock_tick(cycle) {
            eprintln!("\n[!] Hart 0 stopped at cycle {}", cycle);
            hart.dump_state();
            hart.stats.print();
            process::exit(1);
        }
        cycle += 1;
    }

    hart.dump_state();
    hart.stats.print();
}
