//! # Register and Status Flag State
//!
//! The 6502 programmer-visible state: accumulator (A), index registers (X, Y),
//! program counter (PC), stack pointer (S) and the processor status byte (P).
//!
//! The stack pointer is an 8-bit offset into page one. The full stack address is
//! always `STACK_BASE | S`, so the stack can never leave 0x0100-0x01FF.

use bitflags::bitflags;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

bitflags! {
    /// Processor status register (P), bit layout NV-BDIZC.
    ///
    /// `CONSTANT` (bit 5) is not a real flag: it always reads back as 1.
    /// Every constructor and setter in this crate keeps it set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Status: u8 {
        /// Bit 7 of the last result.
        const NEGATIVE = 0b1000_0000;
        /// Signed overflow from ADC/SBC, or bit 6 of the BIT operand.
        const OVERFLOW = 0b0100_0000;
        /// Unused bit, always 1.
        const CONSTANT = 0b0010_0000;
        /// Only meaningful in copies of P pushed by BRK/PHP.
        const BREAK = 0b0001_0000;
        /// Binary coded decimal mode for ADC/SBC.
        const DECIMAL = 0b0000_1000;
        /// Interrupt disable (masks IRQ, not NMI).
        const INTERRUPT = 0b0000_0100;
        /// Last result was zero.
        const ZERO = 0b0000_0010;
        /// Unsigned carry/borrow.
        const CARRY = 0b0000_0001;
    }
}

impl Status {
    /// Builds a status value from a raw byte with `CONSTANT` forced on.
    pub const fn from_byte(value: u8) -> Self {
        Self::from_bits_retain(value | Self::CONSTANT.bits())
    }

    /// Returns the raw status byte.
    pub const fn to_byte(self) -> u8 {
        self.bits() | Self::CONSTANT.bits()
    }

    /// Sets or clears a single flag, leaving every other bit untouched.
    ///
    /// Clearing `CONSTANT` has no effect.
    pub fn assign(&mut self, flag: Status, value: bool) {
        self.set(flag, value);
        self.insert(Self::CONSTANT);
    }

    /// Updates ZERO and NEGATIVE from an 8-bit result.
    pub(crate) fn set_zn(&mut self, result: u8) {
        self.set(Self::ZERO, result == 0);
        self.set(Self::NEGATIVE, result & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::CONSTANT
    }
}

/// Complete register file of the 6502.
///
/// `Registers` is a plain value: hosts can copy it out of the CPU for
/// inspection or save-states and write it back with `CPU::set_registers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Program counter (address of next byte to fetch)
    pub pc: u16,
    /// Stack pointer, offset into page one
    pub s: u8,
    /// Processor status
    pub p: Status,
}

impl Registers {
    /// Returns registers in the power-on state: everything zero, P = CONSTANT.
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            s: 0,
            p: Status::CONSTANT,
        }
    }

    /// Reinitializes every register to the power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns a single flag.
    pub fn flag(&self, flag: Status) -> bool {
        self.p.contains(flag)
    }

    /// Sets or clears a single flag without disturbing the others.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.p.assign(flag, value);
    }

    /// Returns the raw status byte (CONSTANT always set).
    pub fn status(&self) -> u8 {
        self.p.to_byte()
    }

    /// Overwrites the whole status byte, forcing CONSTANT to 1.
    pub fn set_status(&mut self, value: u8) {
        self.p = Status::from_byte(value);
    }

    /// Address the next push will write to.
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | self.s as u16
    }
}
