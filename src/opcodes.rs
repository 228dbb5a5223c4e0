//! # Opcode Dispatch Table
//!
//! This module contains the complete 256-entry opcode table that serves as the
//! single source of truth for decoding 6502 instructions.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - Explicit `OpcodeEntry::Trap` entries
//!
//! Each documented entry records:
//! - Mnemonic (which operation to run)
//! - Addressing mode
//! - Base cycle cost
//! - Whether crossing a page during indexing costs one more cycle
//!
//! The table is a `const` and is never modified. Every CPU instance holds a
//! reference to it.

use std::fmt;

use crate::addressing::AddressingMode;

/// The 56 documented 6502 operations.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Add with carry
    ADC,
    /// Logical AND
    AND,
    /// Arithmetic shift left
    ASL,
    /// Branch if carry clear
    BCC,
    /// Branch if carry set
    BCS,
    /// Branch if equal (Z set)
    BEQ,
    /// Bit test
    BIT,
    /// Branch if minus (N set)
    BMI,
    /// Branch if not equal (Z clear)
    BNE,
    /// Branch if plus (N clear)
    BPL,
    /// Force interrupt
    BRK,
    /// Branch if overflow clear
    BVC,
    /// Branch if overflow set
    BVS,
    /// Clear carry
    CLC,
    /// Clear decimal mode
    CLD,
    /// Clear interrupt disable
    CLI,
    /// Clear overflow
    CLV,
    /// Compare accumulator
    CMP,
    /// Compare X
    CPX,
    /// Compare Y
    CPY,
    /// Decrement memory
    DEC,
    /// Decrement X
    DEX,
    /// Decrement Y
    DEY,
    /// Exclusive OR
    EOR,
    /// Increment memory
    INC,
    /// Increment X
    INX,
    /// Increment Y
    INY,
    /// Jump
    JMP,
    /// Jump to subroutine
    JSR,
    /// Load accumulator
    LDA,
    /// Load X
    LDX,
    /// Load Y
    LDY,
    /// Logical shift right
    LSR,
    /// No operation
    NOP,
    /// Logical inclusive OR
    ORA,
    /// Push accumulator
    PHA,
    /// Push processor status
    PHP,
    /// Pull accumulator
    PLA,
    /// Pull processor status
    PLP,
    /// Rotate left
    ROL,
    /// Rotate right
    ROR,
    /// Return from interrupt
    RTI,
    /// Return from subroutine
    RTS,
    /// Subtract with carry
    SBC,
    /// Set carry
    SEC,
    /// Set decimal mode
    SED,
    /// Set interrupt disable
    SEI,
    /// Store accumulator
    STA,
    /// Store X
    STX,
    /// Store Y
    STY,
    /// Transfer A to X
    TAX,
    /// Transfer A to Y
    TAY,
    /// Transfer S to X
    TSX,
    /// Transfer X to A
    TXA,
    /// Transfer X to S
    TXS,
    /// Transfer Y to A
    TYA,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Static decoding information for one documented opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Mnemonic, OpcodeEntry, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let OpcodeEntry::Instruction(lda) = OPCODE_TABLE[0xA9] else {
///     panic!("0xA9 is documented");
/// };
/// assert_eq!(lda.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda.mode, AddressingMode::Immediate);
/// assert_eq!(lda.base_cycles, 2);
/// assert_eq!(lda.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Operation to execute.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,

    /// Cycle cost before page-crossing penalties and branch extras.
    pub base_cycles: u8,

    /// One extra cycle is charged when indexing crosses a page.
    ///
    /// Set for read instructions using AbsoluteX, AbsoluteY or IndirectY.
    /// Stores and read-modify-write instructions always pay the worst case,
    /// which is already in `base_cycles`.
    pub page_penalty: bool,
}

impl Instruction {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }
}

/// One slot of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeEntry {
    /// A documented instruction.
    Instruction(Instruction),

    /// An undocumented opcode. Executing it stops the step with
    /// `ExecutionError::IllegalOpcode`.
    Trap,
}

impl OpcodeEntry {
    /// Returns the instruction, or `None` for a trap.
    pub const fn instruction(&self) -> Option<&Instruction> {
        match self {
            OpcodeEntry::Instruction(instruction) => Some(instruction),
            OpcodeEntry::Trap => None,
        }
    }

    /// Returns true for undocumented opcodes.
    pub const fn is_trap(&self) -> bool {
        matches!(self, OpcodeEntry::Trap)
    }

    /// Returns the mnemonic, or `None` for a trap.
    pub fn mnemonic(&self) -> Option<Mnemonic> {
        self.instruction().map(|instruction| instruction.mnemonic)
    }

    /// Total instruction size in bytes. Traps count as a single byte.
    pub const fn size_bytes(&self) -> u8 {
        match self {
            OpcodeEntry::Instruction(instruction) => instruction.size_bytes(),
            OpcodeEntry::Trap => 1,
        }
    }
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> OpcodeEntry {
    OpcodeEntry::Instruction(Instruction {
        mnemonic,
        mode,
        base_cycles,
        page_penalty: false,
    })
}

/// Like `op`, for reads that pay a cycle when indexing crosses a page.
const fn op_pc(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> OpcodeEntry {
    OpcodeEntry::Instruction(Instruction {
        mnemonic,
        mode,
        base_cycles,
        page_penalty: true,
    })
}

const TRAP: OpcodeEntry = OpcodeEntry::Trap;

use AddressingMode::*;
use Mnemonic::*;

/// Complete 256-entry dispatch table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cpu6502::OPCODE_TABLE;
///
/// let brk = OPCODE_TABLE[0x00].instruction().unwrap();
/// assert_eq!(brk.base_cycles, 7);
///
/// // Undocumented opcodes are explicit traps
/// assert!(OPCODE_TABLE[0x02].is_trap());
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeEntry; 256] = [
    /* 0x00 */ op(BRK, Implicit, 7),
    /* 0x01 */ op(ORA, IndirectX, 6),
    /* 0x02 */ TRAP,
    /* 0x03 */ TRAP,
    /* 0x04 */ TRAP,
    /* 0x05 */ op(ORA, ZeroPage, 3),
    /* 0x06 */ op(ASL, ZeroPage, 5),
    /* 0x07 */ TRAP,
    /* 0x08 */ op(PHP, Implicit, 3),
    /* 0x09 */ op(ORA, Immediate, 2),
    /* 0x0A */ op(ASL, Accumulator, 2),
    /* 0x0B */ TRAP,
    /* 0x0C */ TRAP,
    /* 0x0D */ op(ORA, Absolute, 4),
    /* 0x0E */ op(ASL, Absolute, 6),
    /* 0x0F */ TRAP,
    /* 0x10 */ op(BPL, Relative, 2),
    /* 0x11 */ op_pc(ORA, IndirectY, 5),
    /* 0x12 */ TRAP,
    /* 0x13 */ TRAP,
    /* 0x14 */ TRAP,
    /* 0x15 */ op(ORA, ZeroPageX, 4),
    /* 0x16 */ op(ASL, ZeroPageX, 6),
    /* 0x17 */ TRAP,
    /* 0x18 */ op(CLC, Implicit, 2),
    /* 0x19 */ op_pc(ORA, AbsoluteY, 4),
    /* 0x1A */ TRAP,
    /* 0x1B */ TRAP,
    /* 0x1C */ TRAP,
    /* 0x1D */ op_pc(ORA, AbsoluteX, 4),
    /* 0x1E */ op(ASL, AbsoluteX, 7),
    /* 0x1F */ TRAP,
    /* 0x20 */ op(JSR, Absolute, 6),
    /* 0x21 */ op(AND, IndirectX, 6),
    /* 0x22 */ TRAP,
    /* 0x23 */ TRAP,
    /* 0x24 */ op(BIT, ZeroPage, 3),
    /* 0x25 */ op(AND, ZeroPage, 3),
    /* 0x26 */ op(ROL, ZeroPage, 5),
    /* 0x27 */ TRAP,
    /* 0x28 */ op(PLP, Implicit, 4),
    /* 0x29 */ op(AND, Immediate, 2),
    /* 0x2A */ op(ROL, Accumulator, 2),
    /* 0x2B */ TRAP,
    /* 0x2C */ op(BIT, Absolute, 4),
    /* 0x2D */ op(AND, Absolute, 4),
    /* 0x2E */ op(ROL, Absolute, 6),
    /* 0x2F */ TRAP,
    /* 0x30 */ op(BMI, Relative, 2),
    /* 0x31 */ op_pc(AND, IndirectY, 5),
    /* 0x32 */ TRAP,
    /* 0x33 */ TRAP,
    /* 0x34 */ TRAP,
    /* 0x35 */ op(AND, ZeroPageX, 4),
    /* 0x36 */ op(ROL, ZeroPageX, 6),
    /* 0x37 */ TRAP,
    /* 0x38 */ op(SEC, Implicit, 2),
    /* 0x39 */ op_pc(AND, AbsoluteY, 4),
    /* 0x3A */ TRAP,
    /* 0x3B */ TRAP,
    /* 0x3C */ TRAP,
    /* 0x3D */ op_pc(AND, AbsoluteX, 4),
    /* 0x3E */ op(ROL, AbsoluteX, 7),
    /* 0x3F */ TRAP,
    /* 0x40 */ op(RTI, Implicit, 6),
    /* 0x41 */ op(EOR, IndirectX, 6),
    /* 0x42 */ TRAP,
    /* 0x43 */ TRAP,
    /* 0x44 */ TRAP,
    /* 0x45 */ op(EOR, ZeroPage, 3),
    /* 0x46 */ op(LSR, ZeroPage, 5),
    /* 0x47 */ TRAP,
    /* 0x48 */ op(PHA, Implicit, 3),
    /* 0x49 */ op(EOR, Immediate, 2),
    /* 0x4A */ op(LSR, Accumulator, 2),
    /* 0x4B */ TRAP,
    /* 0x4C */ op(JMP, Absolute, 3),
    /* 0x4D */ op(EOR, Absolute, 4),
    /* 0x4E */ op(LSR, Absolute, 6),
    /* 0x4F */ TRAP,
    /* 0x50 */ op(BVC, Relative, 2),
    /* 0x51 */ op_pc(EOR, IndirectY, 5),
    /* 0x52 */ TRAP,
    /* 0x53 */ TRAP,
    /* 0x54 */ TRAP,
    /* 0x55 */ op(EOR, ZeroPageX, 4),
    /* 0x56 */ op(LSR, ZeroPageX, 6),
    /* 0x57 */ TRAP,
    /* 0x58 */ op(CLI, Implicit, 2),
    /* 0x59 */ op_pc(EOR, AbsoluteY, 4),
    /* 0x5A */ TRAP,
    /* 0x5B */ TRAP,
    /* 0x5C */ TRAP,
    /* 0x5D */ op_pc(EOR, AbsoluteX, 4),
    /* 0x5E */ op(LSR, AbsoluteX, 7),
    /* 0x5F */ TRAP,
    /* 0x60 */ op(RTS, Implicit, 6),
    /* 0x61 */ op(ADC, IndirectX, 6),
    /* 0x62 */ TRAP,
    /* 0x63 */ TRAP,
    /* 0x64 */ TRAP,
    /* 0x65 */ op(ADC, ZeroPage, 3),
    /* 0x66 */ op(ROR, ZeroPage, 5),
    /* 0x67 */ TRAP,
    /* 0x68 */ op(PLA, Implicit, 4),
    /* 0x69 */ op(ADC, Immediate, 2),
    /* 0x6A */ op(ROR, Accumulator, 2),
    /* 0x6B */ TRAP,
    /* 0x6C */ op(JMP, Indirect, 5),
    /* 0x6D */ op(ADC, Absolute, 4),
    /* 0x6E */ op(ROR, Absolute, 6),
    /* 0x6F */ TRAP,
    /* 0x70 */ op(BVS, Relative, 2),
    /* 0x71 */ op_pc(ADC, IndirectY, 5),
    /* 0x72 */ TRAP,
    /* 0x73 */ TRAP,
    /* 0x74 */ TRAP,
    /* 0x75 */ op(ADC, ZeroPageX, 4),
    /* 0x76 */ op(ROR, ZeroPageX, 6),
    /* 0x77 */ TRAP,
    /* 0x78 */ op(SEI, Implicit, 2),
    /* 0x79 */ op_pc(ADC, AbsoluteY, 4),
    /* 0x7A */ TRAP,
    /* 0x7B */ TRAP,
    /* 0x7C */ TRAP,
    /* 0x7D */ op_pc(ADC, AbsoluteX, 4),
    /* 0x7E */ op(ROR, AbsoluteX, 7),
    /* 0x7F */ TRAP,
    /* 0x80 */ TRAP,
    /* 0x81 */ op(STA, IndirectX, 6),
    /* 0x82 */ TRAP,
    /* 0x83 */ TRAP,
    /* 0x84 */ op(STY, ZeroPage, 3),
    /* 0x85 */ op(STA, ZeroPage, 3),
    /* 0x86 */ op(STX, ZeroPage, 3),
    /* 0x87 */ TRAP,
    /* 0x88 */ op(DEY, Implicit, 2),
    /* 0x89 */ TRAP,
    /* 0x8A */ op(TXA, Implicit, 2),
    /* 0x8B */ TRAP,
    /* 0x8C */ op(STY, Absolute, 4),
    /* 0x8D */ op(STA, Absolute, 4),
    /* 0x8E */ op(STX, Absolute, 4),
    /* 0x8F */ TRAP,
    /* 0x90 */ op(BCC, Relative, 2),
    /* 0x91 */ op(STA, IndirectY, 6),
    /* 0x92 */ TRAP,
    /* 0x93 */ TRAP,
    /* 0x94 */ op(STY, ZeroPageX, 4),
    /* 0x95 */ op(STA, ZeroPageX, 4),
    /* 0x96 */ op(STX, ZeroPageY, 4),
    /* 0x97 */ TRAP,
    /* 0x98 */ op(TYA, Implicit, 2),
    /* 0x99 */ op(STA, AbsoluteY, 5),
    /* 0x9A */ op(TXS, Implicit, 2),
    /* 0x9B */ TRAP,
    /* 0x9C */ TRAP,
    /* 0x9D */ op(STA, AbsoluteX, 5),
    /* 0x9E */ TRAP,
    /* 0x9F */ TRAP,
    /* 0xA0 */ op(LDY, Immediate, 2),
    /* 0xA1 */ op(LDA, IndirectX, 6),
    /* 0xA2 */ op(LDX, Immediate, 2),
    /* 0xA3 */ TRAP,
    /* 0xA4 */ op(LDY, ZeroPage, 3),
    /* 0xA5 */ op(LDA, ZeroPage, 3),
    /* 0xA6 */ op(LDX, ZeroPage, 3),
    /* 0xA7 */ TRAP,
    /* 0xA8 */ op(TAY, Implicit, 2),
    /* 0xA9 */ op(LDA, Immediate, 2),
    /* 0xAA */ op(TAX, Implicit, 2),
    /* 0xAB */ TRAP,
    /* 0xAC */ op(LDY, Absolute, 4),
    /* 0xAD */ op(LDA, Absolute, 4),
    /* 0xAE */ op(LDX, Absolute, 4),
    /* 0xAF */ TRAP,
    /* 0xB0 */ op(BCS, Relative, 2),
    /* 0xB1 */ op_pc(LDA, IndirectY, 5),
    /* 0xB2 */ TRAP,
    /* 0xB3 */ TRAP,
    /* 0xB4 */ op(LDY, ZeroPageX, 4),
    /* 0xB5 */ op(LDA, ZeroPageX, 4),
    /* 0xB6 */ op(LDX, ZeroPageY, 4),
    /* 0xB7 */ TRAP,
    /* 0xB8 */ op(CLV, Implicit, 2),
    /* 0xB9 */ op_pc(LDA, AbsoluteY, 4),
    /* 0xBA */ op(TSX, Implicit, 2),
    /* 0xBB */ TRAP,
    /* 0xBC */ op_pc(LDY, AbsoluteX, 4),
    /* 0xBD */ op_pc(LDA, AbsoluteX, 4),
    /* 0xBE */ op_pc(LDX, AbsoluteY, 4),
    /* 0xBF */ TRAP,
    /* 0xC0 */ op(CPY, Immediate, 2),
    /* 0xC1 */ op(CMP, IndirectX, 6),
    /* 0xC2 */ TRAP,
    /* 0xC3 */ TRAP,
    /* 0xC4 */ op(CPY, ZeroPage, 3),
    /* 0xC5 */ op(CMP, ZeroPage, 3),
    /* 0xC6 */ op(DEC, ZeroPage, 5),
    /* 0xC7 */ TRAP,
    /* 0xC8 */ op(INY, Implicit, 2),
    /* 0xC9 */ op(CMP, Immediate, 2),
    /* 0xCA */ op(DEX, Implicit, 2),
    /* 0xCB */ TRAP,
    /* 0xCC */ op(CPY, Absolute, 4),
    /* 0xCD */ op(CMP, Absolute, 4),
    /* 0xCE */ op(DEC, Absolute, 6),
    /* 0xCF */ TRAP,
    /* 0xD0 */ op(BNE, Relative, 2),
    /* 0xD1 */ op_pc(CMP, IndirectY, 5),
    /* 0xD2 */ TRAP,
    /* 0xD3 */ TRAP,
    /* 0xD4 */ TRAP,
    /* 0xD5 */ op(CMP, ZeroPageX, 4),
    /* 0xD6 */ op(DEC, ZeroPageX, 6),
    /* 0xD7 */ TRAP,
    /* 0xD8 */ op(CLD, Implicit, 2),
    /* 0xD9 */ op_pc(CMP, AbsoluteY, 4),
    /* 0xDA */ TRAP,
    /* 0xDB */ TRAP,
    /* 0xDC */ TRAP,
    /* 0xDD */ op_pc(CMP, AbsoluteX, 4),
    /* 0xDE */ op(DEC, AbsoluteX, 7),
    /* 0xDF */ TRAP,
    /* 0xE0 */ op(CPX, Immediate, 2),
    /* 0xE1 */ op(SBC, IndirectX, 6),
    /* 0xE2 */ TRAP,
    /* 0xE3 */ TRAP,
    /* 0xE4 */ op(CPX, ZeroPage, 3),
    /* 0xE5 */ op(SBC, ZeroPage, 3),
    /* 0xE6 */ op(INC, ZeroPage, 5),
    /* 0xE7 */ TRAP,
    /* 0xE8 */ op(INX, Implicit, 2),
    /* 0xE9 */ op(SBC, Immediate, 2),
    /* 0xEA */ op(NOP, Implicit, 2),
    /* 0xEB */ TRAP,
    /* 0xEC */ op(CPX, Absolute, 4),
    /* 0xED */ op(SBC, Absolute, 4),
    /* 0xEE */ op(INC, Absolute, 6),
    /* 0xEF */ TRAP,
    /* 0xF0 */ op(BEQ, Relative, 2),
    /* 0xF1 */ op_pc(SBC, IndirectY, 5),
    /* 0xF2 */ TRAP,
    /* 0xF3 */ TRAP,
    /* 0xF4 */ TRAP,
    /* 0xF5 */ op(SBC, ZeroPageX, 4),
    /* 0xF6 */ op(INC, ZeroPageX, 6),
    /* 0xF7 */ TRAP,
    /* 0xF8 */ op(SED, Implicit, 2),
    /* 0xF9 */ op_pc(SBC, AbsoluteY, 4),
    /* 0xFA */ TRAP,
    /* 0xFB */ TRAP,
    /* 0xFC */ TRAP,
    /* 0xFD */ op_pc(SBC, AbsoluteX, 4),
    /* 0xFE */ op(INC, AbsoluteX, 7),
    /* 0xFF */ TRAP,
];
