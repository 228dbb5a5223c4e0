//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 56 documented 6502
//! operations, organized by category. Each operation takes the CPU and the
//! operand produced by the addressing-mode resolver; PC has already been
//! advanced past the instruction when it runs.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

use crate::addressing::Resolved;
use crate::opcodes::Mnemonic;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

/// Runs `mnemonic` on an already resolved operand.
///
/// Returns cycles beyond the table's base cost that the operation itself
/// decides on (taken branches). Page-crossing penalties for indexed reads are
/// added by the driver.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mnemonic: Mnemonic,
    resolved: Resolved,
) -> u8 {
    let operand = resolved.operand;

    match mnemonic {
        // Branches are the only operations with variable cost
        Mnemonic::BCC => return branches::execute_branch(cpu, Status::CARRY, false, resolved),
        Mnemonic::BCS => return branches::execute_branch(cpu, Status::CARRY, true, resolved),
        Mnemonic::BNE => return branches::execute_branch(cpu, Status::ZERO, false, resolved),
        Mnemonic::BEQ => return branches::execute_branch(cpu, Status::ZERO, true, resolved),
        Mnemonic::BPL => return branches::execute_branch(cpu, Status::NEGATIVE, false, resolved),
        Mnemonic::BMI => return branches::execute_branch(cpu, Status::NEGATIVE, true, resolved),
        Mnemonic::BVC => return branches::execute_branch(cpu, Status::OVERFLOW, false, resolved),
        Mnemonic::BVS => return branches::execute_branch(cpu, Status::OVERFLOW, true, resolved),

        Mnemonic::ADC => alu::execute_adc(cpu, operand),
        Mnemonic::SBC => alu::execute_sbc(cpu, operand),
        Mnemonic::AND => alu::execute_and(cpu, operand),
        Mnemonic::ORA => alu::execute_ora(cpu, operand),
        Mnemonic::EOR => alu::execute_eor(cpu, operand),
        Mnemonic::BIT => alu::execute_bit(cpu, operand),
        Mnemonic::CMP => {
            let register = cpu.regs.a;
            alu::execute_compare(cpu, register, operand)
        }
        Mnemonic::CPX => {
            let register = cpu.regs.x;
            alu::execute_compare(cpu, register, operand)
        }
        Mnemonic::CPY => {
            let register = cpu.regs.y;
            alu::execute_compare(cpu, register, operand)
        }

        Mnemonic::ASL => shifts::execute_asl(cpu, operand),
        Mnemonic::LSR => shifts::execute_lsr(cpu, operand),
        Mnemonic::ROL => shifts::execute_rol(cpu, operand),
        Mnemonic::ROR => shifts::execute_ror(cpu, operand),

        Mnemonic::LDA => load_store::execute_lda(cpu, operand),
        Mnemonic::LDX => load_store::execute_ldx(cpu, operand),
        Mnemonic::LDY => load_store::execute_ldy(cpu, operand),
        Mnemonic::STA => {
            let register = cpu.regs.a;
            load_store::execute_store(cpu, register, operand)
        }
        Mnemonic::STX => {
            let register = cpu.regs.x;
            load_store::execute_store(cpu, register, operand)
        }
        Mnemonic::STY => {
            let register = cpu.regs.y;
            load_store::execute_store(cpu, register, operand)
        }

        Mnemonic::INC => inc_dec::execute_inc(cpu, operand),
        Mnemonic::DEC => inc_dec::execute_dec(cpu, operand),
        Mnemonic::INX => inc_dec::execute_inx(cpu),
        Mnemonic::INY => inc_dec::execute_iny(cpu),
        Mnemonic::DEX => inc_dec::execute_dex(cpu),
        Mnemonic::DEY => inc_dec::execute_dey(cpu),

        Mnemonic::JMP => control::execute_jmp(cpu, operand),
        Mnemonic::JSR => control::execute_jsr(cpu, operand),
        Mnemonic::RTS => control::execute_rts(cpu),
        Mnemonic::RTI => control::execute_rti(cpu),
        Mnemonic::BRK => control::execute_brk(cpu),
        Mnemonic::NOP => {}

        Mnemonic::PHA => stack::execute_pha(cpu),
        Mnemonic::PHP => stack::execute_php(cpu),
        Mnemonic::PLA => stack::execute_pla(cpu),
        Mnemonic::PLP => stack::execute_plp(cpu),

        Mnemonic::CLC => flags::execute_flag(cpu, Status::CARRY, false),
        Mnemonic::SEC => flags::execute_flag(cpu, Status::CARRY, true),
        Mnemonic::CLI => flags::execute_flag(cpu, Status::INTERRUPT, false),
        Mnemonic::SEI => flags::execute_flag(cpu, Status::INTERRUPT, true),
        Mnemonic::CLD => flags::execute_flag(cpu, Status::DECIMAL, false),
        Mnemonic::SED => flags::execute_flag(cpu, Status::DECIMAL, true),
        Mnemonic::CLV => flags::execute_flag(cpu, Status::OVERFLOW, false),

        Mnemonic::TAX => transfer::execute_tax(cpu),
        Mnemonic::TAY => transfer::execute_tay(cpu),
        Mnemonic::TXA => transfer::execute_txa(cpu),
        Mnemonic::TYA => transfer::execute_tya(cpu),
        Mnemonic::TSX => transfer::execute_tsx(cpu),
        Mnemonic::TXS => transfer::execute_txs(cpu),
    }

    0
}
