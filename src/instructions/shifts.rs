//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations on the accumulator
//! or on memory:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! The bit shifted out lands in C; Z and N follow the result.

use crate::addressing::Operand;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Reads the operand, applies `shift` and writes the result back.
///
/// `shift` gets the old value and the incoming carry and returns
/// (result, outgoing carry).
fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    shift: impl FnOnce(u8, bool) -> (u8, bool),
) {
    let value = cpu.read_operand(operand);
    let (result, carry) = shift(value, cpu.regs.flag(Status::CARRY));

    cpu.write_operand(operand, result);
    cpu.regs.p.set(Status::CARRY, carry);
    cpu.regs.p.set_zn(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    read_modify_write(cpu, operand, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag. N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    read_modify_write(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Bit 0 is filled with the old carry; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    read_modify_write(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Bit 7 is filled with the old carry; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    read_modify_write(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}
