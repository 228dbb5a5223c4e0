//! # 6502 CPU Emulator Core
//!
//! An instruction-level NMOS 6502 interpreter. The core keeps the processor's
//! register and flag state and performs every memory access through a
//! host-supplied bus, so it can sit inside any system the host wants to build.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0x0000, &[
//!     0xA9, 0x01, // LDA #$01
//!     0x69, 0xFF, // ADC #$FF
//! ]);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.step().unwrap();
//! cpu.step().unwrap();
//!
//! assert_eq!(cpu.a(), 0x00);
//! assert!(cpu.flag_c());
//! assert!(cpu.flag_z());
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Host-driven**: `step()` runs exactly one instruction; pacing, breakpoints
//!   and budgets belong to the caller
//! - **Table-driven decoding**: one static 256-entry table, undocumented opcodes
//!   are explicit traps
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute driver
//! - `registers` - register file and status flags
//! - `memory` - MemoryBus trait and implementations
//! - `opcodes` - Opcode dispatch table
//! - `addressing` - Addressing modes and operand resolution
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: `trace` for every executed
//! instruction, `debug` for resets and interrupts, `warn` for illegal opcodes.
//! Install any `log` backend in the host to see them.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{CpuConfig, RunState, CPU};
pub use memory::{CallbackBus, FlatMemory, MemoryBus};
pub use opcodes::{Instruction, Mnemonic, OpcodeEntry, OPCODE_TABLE};
pub use registers::{Registers, Status, STACK_BASE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched opcode is undocumented and maps to a trap entry.
    ///
    /// `address` is where the opcode was fetched from; PC is left there.
    #[error("illegal opcode 0x{opcode:02X} at 0x{address:04X}")]
    IllegalOpcode { opcode: u8, address: u16 },
}
