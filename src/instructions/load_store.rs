//! # Load and Store Instructions
//!
//! This module implements:
//! - LDA, LDX, LDY: Load a register, update Z and N
//! - STA, STX, STY: Store a register, no flags affected

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a = value;
    cpu.regs.p.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.x = value;
    cpu.regs.p.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.y = value;
    cpu.regs.p.set_zn(value);
}

/// Executes STA, STX or STY with the given register value.
pub(crate) fn execute_store<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    if let Operand::Address(addr) = operand {
        cpu.memory.write(addr, register);
    }
}

#[cfg(test)]
mod tests {
    use crate::{FlatMemory, CPU};

    fn cpu_with(program: &[u8]) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load(0x0000, program);
        CPU::new(memory)
    }

    #[test]
    fn test_lda_immediate_zero() {
        let mut cpu = cpu_with(&[0xA9, 0x00]);

        assert_eq!(cpu.step(), Ok(2));

        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());
        assert_eq!(cpu.pc(), 0x0002);
    }

    #[test]
    fn test_lda_absolute_x_page_penalty() {
        let mut cpu = cpu_with(&[0xBD, 0xF0, 0x12, 0xBD, 0x00, 0x12]);
        cpu.set_x(0x20);
        cpu.memory_mut().load(0x1310, &[0x80]);
        cpu.memory_mut().load(0x1220, &[0x7F]);

        assert_eq!(cpu.step(), Ok(5));
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.flag_n());

        assert_eq!(cpu.step(), Ok(4));
        assert_eq!(cpu.a(), 0x7F);
        assert!(!cpu.flag_n());
    }

    #[test]
    fn test_ldx_zero_page_y() {
        let mut cpu = cpu_with(&[0xB6, 0xF0]);
        cpu.set_y(0x20);
        cpu.memory_mut().load(0x0010, &[0x33]);

        assert_eq!(cpu.step(), Ok(4));
        assert_eq!(cpu.x(), 0x33);
    }

    #[test]
    fn test_sta_indirect_y_has_no_page_penalty() {
        // STA ($40),Y with pointer 0x12F0 and Y=0x20
        let mut cpu = cpu_with(&[0x91, 0x40]);
        cpu.memory_mut().load(0x0040, &[0xF0, 0x12]);
        cpu.set_y(0x20);
        cpu.set_a(0x5A);
        let status = cpu.status();

        assert_eq!(cpu.step(), Ok(6));

        assert_eq!(cpu.memory().peek(0x1310), 0x5A);
        assert_eq!(cpu.status(), status);
    }

    #[test]
    fn test_stx_sty_zero_page() {
        let mut cpu = cpu_with(&[0x86, 0x10, 0x84, 0x11]);
        cpu.set_x(0xAA);
        cpu.set_y(0xBB);

        cpu.step().unwrap();
        cpu.step().unwrap();

        assert_eq!(cpu.memory().peek(0x0010), 0xAA);
        assert_eq!(cpu.memory().peek(0x0011), 0xBB);
        assert_eq!(cpu.cycles(), 6);
    }
}
