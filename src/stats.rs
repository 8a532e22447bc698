//! Simulation statistics collection and reporting.
//!
//! Tracks per-hart counters: cycles ticked, instructions decoded, cost
//! cycles accumulated from the instruction table, and decode faults.

use std::time::Instant;

/// Per-hart simulation statistics.
pub struct SimStats {
    start_time: Instant,
    pub cycles: u64,
    pub instructions_decoded: u64,
    pub cost_cycles: u64,
    pub faults: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_decoded: 0,
            cost_cycles: 0,
            faults: 0,
        }
    }
}

impl SimStats {
    /// Prints a formatted summary of the run.
    ///
    /// Displays cycle and instruction counts, IPC/CPI, effective cost
    /// per instruction, and host-side throughput.
    pub fn print(&self) {
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs_f64();

        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_decoded == 0 {
            1
        } else {
            self.instructions_decoded
        };

        let ipc = self.instructions_decoded as f64 / cyc as f64;
        let cpi = cyc as f64 / instr as f64;
        let cost = self.cost_cycles as f64 / instr as f64;
        let mips = (self.instructions_decoded as f64 / seconds) / 1_000_000.0;
        let khz = (self.cycles as f64 / seconds) / 1000.0;

        println!("\n==========================================================");
        println!("HART SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {:.2} kHz", khz);
        println!("sim_insts                {}", self.instructions_decoded);
        println!("sim_ipc                  {:.4}", ipc);
        println!("sim_cpi                  {:.4}", cpi);
        println!("sim_mips                 {:.2}", mips);
        println!("----------------------------------------------------------");
        println!("cost_cycles              {}", self.cost_cycles);
        println!("cost_per_inst            {:.4}", cost);
        println!("decode_faults            {}", self.faults);
        println!("==========================================================");
    }
}
