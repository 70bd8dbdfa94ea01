//! 8080 CPU emulation module
//!
//! A single-tier interpreter: fetch at PC, dispatch through a 256-entry
//! table of handler functions, execute. Handlers decode register fields
//! from the opcode byte themselves, so one handler serves a whole
//! opcode family.

pub mod dispatch;
pub mod execute;
pub mod harness;
pub mod state;

pub use harness::CpuHarness;
pub use state::{Cpu, Reg, RegPair};
