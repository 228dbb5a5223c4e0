//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt Disable
//! - CLD / SED: Decimal Mode
//! - CLV: Overflow (there is no SEV)
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! Only the named flag changes.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: Status, value: bool) {
    cpu.regs.set_flag(flag, value);
}

#[cfg(test)]
mod tests {
    use crate::{FlatMemory, CPU};

    fn step_with_status(opcode: u8, status: u8) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load(0x0000, &[opcode]);
        let mut cpu = CPU::new(memory);
        cpu.set_status(status);
        assert_eq!(cpu.step(), Ok(2));
        cpu
    }

    #[test]
    fn test_clear_instructions() {
        assert_eq!(step_with_status(0x18, 0xFF).status(), 0xFE); // CLC
        assert_eq!(step_with_status(0x58, 0xFF).status(), 0xFB); // CLI
        assert_eq!(step_with_status(0xD8, 0xFF).status(), 0xF7); // CLD
        assert_eq!(step_with_status(0xB8, 0xFF).status(), 0xBF); // CLV
    }

    #[test]
    fn test_set_instructions() {
        assert_eq!(step_with_status(0x38, 0x00).status(), 0x21); // SEC
        assert_eq!(step_with_status(0x78, 0x00).status(), 0x24); // SEI
        assert_eq!(step_with_status(0xF8, 0x00).status(), 0x28); // SED
    }
}
