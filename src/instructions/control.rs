//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//!
//! BRK is a software interrupt that:
//! 1. Pushes the address of the byte after its padding byte (high byte first)
//! 2. Pushes processor status with the B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::addressing::Operand;
use crate::cpu::IRQ_VECTOR;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte long but the 6502 skips the following byte, so the return
/// address pushed is the opcode address + 2.
///
/// Flags affected:
/// - B: Set (in the pushed copy and in P until P is next pulled)
/// - I: Set
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    // PC already points one past the opcode; skip the padding byte
    let return_address = cpu.regs.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let status = cpu.regs.p | Status::BREAK | Status::CONSTANT;
    cpu.push(status.bits());

    cpu.regs.set_flag(Status::BREAK, true);
    cpu.regs.set_flag(Status::INTERRUPT, true);

    cpu.regs.pc = cpu.read_word(IRQ_VECTOR);
}

/// Executes the JMP (Jump) instruction.
///
/// Absolute and indirect forms are both resolved to a target address before
/// this runs, including the indirect page-wrap quirk. No flags are affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        cpu.regs.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return - 1),
/// then jumps. No flags are affected.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        let return_address = cpu.regs.pc.wrapping_sub(1);
        cpu.push_word(return_address);
        cpu.regs.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address and adds one. No flags are affected.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls P (B ignored, bit 5 forced) and then PC. Unlike RTS, the pulled
/// address is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.regs.p = Status::from_byte(status) - Status::BREAK;
    cpu.regs.pc = cpu.pull_word();
}
