//! # Memory Bus Abstraction
//!
//! The CPU never owns memory. Every byte it reads or writes goes through the
//! `MemoryBus` trait, which the host implements. This keeps RAM/ROM layout,
//! memory-mapped I/O and any other side effects entirely on the host side.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads return whatever the host decides (open bus, sentinel, ...)
//! - Writes to ROM/unmapped regions may be ignored
//!
//! Two ready-made implementations are provided:
//! - `FlatMemory`: 64KB of RAM, handy for tests and small hosts
//! - `CallbackBus`: wraps a pair of read/write closures

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&mut self)`: reads may have side effects (status registers that clear
///   on read, FIFOs), so they get mutable access too
/// - `write(&mut self)`: side effects are explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&mut self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic and must always return a value.
    fn read(&mut self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only or unmapped addresses may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

impl<B: MemoryBus + ?Sized> MemoryBus for Box<B> {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM
/// array initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.step(), Ok(2));
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Bytes that would run past 0xFFFF wrap around to 0x0000.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the byte at `addr` without going through the bus trait.
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Bus built from a read closure and a write closure.
///
/// This is the direct form of the "host supplies `read(addr)` and
/// `write(addr, value)`" contract. The closures are owned for the lifetime of
/// the bus and may capture whatever host state they need.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use cpu6502::CPU;
///
/// let ram = Rc::new(RefCell::new(vec![0u8; 0x10000]));
/// ram.borrow_mut()[..2].copy_from_slice(&[0xA2, 0x07]); // LDX #$07
///
/// let reader = Rc::clone(&ram);
/// let writer = Rc::clone(&ram);
/// let mut cpu = CPU::from_callbacks(
///     move |addr| reader.borrow()[addr as usize],
///     move |addr, value| writer.borrow_mut()[addr as usize] = value,
/// );
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.x(), 0x07);
/// ```
pub struct CallbackBus<R, W> {
    read: R,
    write: W,
}

impl<R, W> CallbackBus<R, W>
where
    R: FnMut(u16) -> u8,
    W: FnMut(u16, u8),
{
    /// Wraps the two host callbacks.
    pub fn new(read: R, write: W) -> Self {
        Self { read, write }
    }
}

impl<R, W> MemoryBus for CallbackBus<R, W>
where
    R: FnMut(u16) -> u8,
    W: FnMut(u16, u8),
{
    fn read(&mut self, addr: u16) -> u8 {
        (self.read)(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (self.write)(addr, value)
    }
}
