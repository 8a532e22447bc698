//! Binary Loader.
//!
//! Loads a flat program image from disk into RAM before the harts
//! start ticking.

use crate::soc::Ram;
use std::fs;
use std::process;

/// Loads a binary file from disk.
pub fn load_binary(path: &str) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read file '{}': {}", path, e);
        process::exit(1);
    })
}

/// Writes a flat program image into RAM at `load_addr`.
///
/// The image must fit inside the mapping; a too-large image is fatal
/// because silently truncated code would fetch garbage later.
pub fn load_image(ram: &mut Ram, image: &[u8], load_addr: u64) {
    let end = load_addr + image.len() as u64;
    let limit = ram.base() + ram.size() as u64;
    if load_addr < ram.base() || end > limit {
        eprintln!(
            "\n[!] FATAL: Image ({} bytes @ {:#x}) does not fit RAM ({:#x}..{:#x})",
            image.len(),
            load_addr,
            ram.base(),
            limit
        );
        process::exit(1);
    }

    println!(
        "[Loader] Writing {} bytes to {:#x}",
        image.len(),
        load_addr
    );
    ram.write_bytes(load_addr, image);
}
