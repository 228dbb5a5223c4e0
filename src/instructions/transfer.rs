//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX, TAY, TXA, TYA, TSX: Update Z and N from the copied value
//! - TXS: No flags affected
//!
//! All transfers use implied addressing and take 2 cycles.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.p.set_zn(cpu.regs.x);
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.p.set_zn(cpu.regs.y);
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.p.set_zn(cpu.regs.a);
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.p.set_zn(cpu.regs.a);
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.s;
    cpu.regs.p.set_zn(cpu.regs.x);
}

/// TXS is the only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.s = cpu.regs.x;
}
