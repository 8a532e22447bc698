//! Flat RAM backing store.

use super::Memory;
use crate::common::MemFault;

/// A flat byte array mapped at a base address.
///
/// Writable only before simulation starts (the loader fills it);
/// harts then share it read-only.
pub struct Ram {
    base: u64,
    data: Vec<u8>,
}

impl Ram {
    /// Creates zeroed RAM of `size` bytes mapped at `base`.
    pub fn new(base: u64, size: usize) -> Self {
        Self {
            base,
            data: vec![0; size],
        }
    }

    /// The base address of the mapping.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The size of the mapping in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Writes a binary blob at an absolute address.
    ///
    /// Out-of-range writes are truncated silently; the loader checks
    /// image bounds before calling.
    pub fn write_bytes(&mut self, addr: u64, bytes: &[u8]) {
        if addr < self.base {
            return;
        }
        let offset = (addr - self.base) as usize;
        if offset >= self.data.len() {
            return;
        }
        let len = usize::min(bytes.len(), self.data.len() - offset);
        self.data[offset..offset + len].copy_from_slice(&bytes[..len]);
    }
}

impl Memory for Ram {
    fn read_word(&self, addr: u64) -> Result<u32, MemFault> {
        if addr % 4 != 0 {
            return Err(MemFault::Misaligned(addr));
        }
        if addr < self.base {
            return Err(MemFault::OutOfBounds(addr));
        }
        let offset = (addr - self.base) as usize;
        let Some(end) = offset.checked_add(4) else {
            return Err(MemFault::OutOfBounds(addr));
        };
        if end > self.data.len() {
            return Err(MemFault::OutOfBounds(addr));
        }
        let bytes = [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ];
        Ok(u32::from_le_bytes(bytes))
    }
}
