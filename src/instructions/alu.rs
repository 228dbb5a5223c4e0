//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Register compare
//!
//! ADC and SBC honour the DECIMAL flag when decimal mode is enabled in the
//! CPU configuration, with NMOS flag behaviour.

use crate::addressing::Operand;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Updates C, Z, V and N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    if cpu.config.decimal_mode && cpu.regs.flag(Status::DECIMAL) {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C). Carry clear means borrow. Updates C, Z, V and N.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    if cpu.config.decimal_mode && cpu.regs.flag(Status::DECIMAL) {
        subtract_decimal(cpu, value);
    } else {
        // Binary subtraction is addition of the one's complement
        add_binary(cpu, !value);
    }
}

fn add_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.flag(Status::CARRY) as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.regs.p.set(Status::CARRY, result16 > 0xFF);

    // Overflow: both inputs share a sign and the result's sign differs
    cpu.regs
        .p
        .set(Status::OVERFLOW, ((a ^ result) & (value ^ result) & 0x80) != 0);

    cpu.regs.p.set_zn(result);
    cpu.regs.a = result;
}

/// NMOS BCD addition.
///
/// Z comes from the binary sum; N and V are taken after the low-nibble
/// adjustment but before the high-nibble one.
fn add_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.flag(Status::CARRY) as u8;

    let binary = a.wrapping_add(value).wrapping_add(carry_in);

    let mut lo = (a & 0x0F) + (value & 0x0F) + carry_in;
    let mut hi = (a >> 4) + (value >> 4);
    if lo > 0x09 {
        lo += 0x06;
    }
    if lo > 0x0F {
        hi += 1;
    }

    let intermediate = (hi << 4) | (lo & 0x0F);
    cpu.regs.p.set(Status::ZERO, binary == 0);
    cpu.regs.p.set(Status::NEGATIVE, intermediate & 0x80 != 0);
    cpu.regs.p.set(
        Status::OVERFLOW,
        ((a ^ intermediate) & 0x80) != 0 && ((a ^ value) & 0x80) == 0,
    );

    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.regs.p.set(Status::CARRY, hi > 0x0F);

    cpu.regs.a = (hi << 4) | (lo & 0x0F);
}

/// NMOS BCD subtraction. All flags follow the binary result.
fn subtract_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let borrow = !cpu.regs.flag(Status::CARRY) as i16;

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }

    add_binary(cpu, !value);
    cpu.regs.a = (((hi << 4) | (lo & 0x0F)) & 0xFF) as u8;
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a & cpu.read_operand(operand);
    cpu.regs.p.set_zn(result);
    cpu.regs.a = result;
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a | cpu.read_operand(operand);
    cpu.regs.p.set_zn(result);
    cpu.regs.a = result;
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a ^ cpu.read_operand(operand);
    cpu.regs.p.set_zn(result);
    cpu.regs.a = result;
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    cpu.regs.p.set(Status::ZERO, cpu.regs.a & value == 0);
    cpu.regs.p.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.regs.p.set(Status::OVERFLOW, value & 0x40 != 0);
}

/// Executes CMP, CPX or CPY against `register`.
///
/// Computes register - M without storing it. C is set when register >= M,
/// Z when they are equal, N from bit 7 of the difference.
pub(crate) fn execute_compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = register.wrapping_sub(value);

    cpu.regs.p.set(Status::CARRY, register >= value);
    cpu.regs.p.set_zn(result);
}
