//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! The resolver has already computed the target and whether it lies in a
//! different page than the instruction that follows the branch.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::{Operand, Resolved};
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Branches when `flag` equals `when_set`. Returns the extra cycles spent.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: Status,
    when_set: bool,
    resolved: Resolved,
) -> u8 {
    if cpu.regs.flag(flag) != when_set {
        return 0;
    }

    let Operand::Address(target) = resolved.operand else {
        return 0;
    };
    cpu.regs.pc = target;

    if resolved.page_crossed {
        2
    } else {
        1
    }
}
