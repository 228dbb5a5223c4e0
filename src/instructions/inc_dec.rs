//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: Memory read-modify-write
//! - INX / INY / DEX / DEY: Index registers
//!
//! All wrap modulo 256 and update Z and N. Carry is never affected.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, result);
    cpu.regs.p.set_zn(result);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, result);
    cpu.regs.p.set_zn(result);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.p.set_zn(cpu.regs.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.p.set_zn(cpu.regs.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.p.set_zn(cpu.regs.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.p.set_zn(cpu.regs.y);
}
