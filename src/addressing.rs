//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns an addressing mode plus the bytes following an
//! opcode into an operand.
//!
//! Resolution consumes the operand bytes through the memory bus and leaves PC
//! pointing at the next instruction. Indexed modes also report whether adding
//! the index moved the address into another page, which some instructions
//! charge an extra cycle for.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wraps within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wraps within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// What an instruction operates on once its addressing mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,
    /// The accumulator register.
    Accumulator,
    /// A constant taken from the instruction stream.
    Immediate(u8),
    /// An effective memory address. For relative mode this is the branch target.
    Address(u16),
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    /// The indexed address (or branch target) lies in a different page than its base.
    pub page_crossed: bool,
}

impl Resolved {
    fn new(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let addr = base.wrapping_add(index as u16);
        Self {
            operand: Operand::Address(addr),
            page_crossed: pages_differ(base, addr),
        }
    }
}

/// True when two addresses have different high bytes.
pub(crate) fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` against the instruction stream at PC.
    ///
    /// PC must already point past the opcode byte. On return it points at the
    /// next instruction.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Resolved {
        match mode {
            AddressingMode::Implicit => Resolved::new(Operand::Implied),
            AddressingMode::Accumulator => Resolved::new(Operand::Accumulator),
            AddressingMode::Immediate => Resolved::new(Operand::Immediate(self.fetch_byte())),
            AddressingMode::ZeroPage => {
                Resolved::new(Operand::Address(self.fetch_byte() as u16))
            }
            AddressingMode::ZeroPageX => {
                let zp = self.fetch_byte().wrapping_add(self.regs.x);
                Resolved::new(Operand::Address(zp as u16))
            }
            AddressingMode::ZeroPageY => {
                let zp = self.fetch_byte().wrapping_add(self.regs.y);
                Resolved::new(Operand::Address(zp as u16))
            }
            AddressingMode::Absolute => Resolved::new(Operand::Address(self.fetch_word())),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Resolved::indexed(base, self.regs.x)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Resolved::indexed(base, self.regs.y)
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                Resolved::new(Operand::Address(self.read_word_in_page(ptr)))
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.regs.x);
                Resolved::new(Operand::Address(self.read_word_zero_page(zp)))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.read_word_zero_page(zp);
                Resolved::indexed(base, self.regs.y)
            }
            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                let next = self.regs.pc;
                let target = next.wrapping_add_signed(offset as i16);
                Resolved {
                    operand: Operand::Address(target),
                    page_crossed: pages_differ(next, target),
                }
            }
        }
    }

    /// Reads a little-endian pointer whose high byte never leaves the pointer's page.
    ///
    /// A pointer at $xxFF takes its high byte from $xx00, as the NMOS part does
    /// for `JMP ($xxFF)`.
    fn read_word_in_page(&mut self, ptr: u16) -> u16 {
        let lo = self.memory.read(ptr) as u16;
        let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
        let hi = self.memory.read(hi_addr) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian pointer from zero page, wrapping $FF to $00.
    fn read_word_zero_page(&mut self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }
}
