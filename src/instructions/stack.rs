//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status (with B and bit 5 set in the pushed copy)
//! - PLA: Pull Accumulator (updates Z and N)
//! - PLP: Pull Processor Status (B ignored, bit 5 forced)
//!
//! The stack lives at 0x0100-0x01FF and grows downward. S wraps modulo 256
//! in both directions, so the stack never leaves page one.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.regs.a);
}

pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.regs.p | Status::BREAK | Status::CONSTANT;
    cpu.push(status.bits());
}

pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.regs.a = value;
    cpu.regs.p.set_zn(value);
}

pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.regs.p = Status::from_byte(status) - Status::BREAK;
}
