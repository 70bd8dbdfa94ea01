//! CPU test harness for instruction testing
//!
//! Provides a minimal environment for testing CPU instructions without
//! a full machine. Contains CPU state, memory, and a port device that
//! defaults to `NullDevice`.

use crate::cpu::Cpu;
use crate::io::{IoDevice, NullDevice};
use crate::memory::Memory;

/// Test harness for CPU instruction testing
///
/// Provides a minimal environment with CPU, memory and an I/O device
/// for testing individual instructions or short sequences.
pub struct CpuHarness {
    /// CPU state
    pub cpu: Cpu,

    /// Memory
    pub mem: Memory,

    /// Port device handed to the CPU on every step
    pub io: Box<dyn IoDevice>,
}

impl CpuHarness {
    /// Create a new test harness with initialized CPU and memory
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mem: Memory::new(),
            io: Box::new(NullDevice),
        }
    }

    /// Create a harness with a specific I/O device
    pub fn with_device(io: Box<dyn IoDevice>) -> Self {
        Self {
            cpu: Cpu::new(),
            mem: Memory::new(),
            io,
        }
    }

    /// Load a program at the specified address and point PC at it
    pub fn load_program(&mut self, code: &[u8], addr: u16) {
        self.mem.load(code, addr);
        self.cpu.pc = addr;
    }

    /// Execute one instruction
    pub fn step(&mut self) {
        self.cpu.step(&mut self.mem, self.io.as_mut());
    }

    /// Execute multiple instructions
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}

impl Default for CpuHarness {
    fn default() -> Self {
        Self::new()
    }
}
