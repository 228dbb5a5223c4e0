//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute driver.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, PC, S and the status byte P (see `registers`)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Run state**: whether the last step stopped on an undocumented opcode
//! - **Memory bus**: the host's `MemoryBus`, the only path to memory
//!
//! ## Execution Model
//!
//! The host drives the CPU:
//! - `step()`: fetch, decode and execute exactly one instruction
//! - `run_for_cycles()`: step until a cycle budget is spent or a trap occurs
//! - `irq()` / `nmi()`: enter an interrupt handler between instructions

use crate::addressing::Operand;
use crate::instructions;
use crate::memory::CallbackBus;
use crate::opcodes::{OpcodeEntry, OPCODE_TABLE};
use crate::registers::{Registers, Status};
use crate::{ExecutionError, MemoryBus};

/// NMI vector location.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector location.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles spent entering an interrupt handler.
const INTERRUPT_CYCLES: u8 = 7;

/// Behavioural options for a CPU instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuConfig {
    /// Honour the DECIMAL flag in ADC and SBC.
    ///
    /// `true` is the NMOS 6502. `false` matches cores with the BCD logic
    /// removed (such as the Ricoh 2A03): DECIMAL is still stored in P but
    /// arithmetic is always binary.
    pub decimal_mode: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self { decimal_mode: true }
    }
}

/// Where the execution driver stands between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Freshly constructed or reset; nothing executed yet.
    Reset,
    /// The last step completed an instruction.
    Running,
    /// The last step fetched an undocumented opcode.
    ///
    /// PC still points at `address`. The host may skip it with `set_pc`, patch
    /// memory, or stop.
    Trapped { opcode: u8, address: u16 },
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0000, &[0xA9, 0x00]); // LDA #$00
///
/// let mut cpu = CPU::new(memory);
///
/// assert_eq!(cpu.step(), Ok(2));
/// assert_eq!(cpu.a(), 0x00);
/// assert!(cpu.flag_z());
/// assert_eq!(cpu.pc(), 0x0002);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Programmer-visible registers
    pub(crate) regs: Registers,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    pub(crate) config: CpuConfig,

    table: &'static [OpcodeEntry; 256],

    state: RunState,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU attached to `memory`, in the reset state.
    ///
    /// A=X=Y=0, PC=0, S=0 and P has only the CONSTANT bit set. Nothing is
    /// read from the bus; use `reset_from_vector` for the hardware boot sequence.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            regs: Registers::new(),
            cycles: 0,
            memory,
            config,
            table: &OPCODE_TABLE,
            state: RunState::Reset,
        }
    }

    /// Reinitializes the registers: A=X=Y=0, PC=0, S=0, P=CONSTANT.
    ///
    /// The cycle counter restarts from zero. The dispatch table and the bus
    /// are left alone.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.cycles = 0;
        self.state = RunState::Reset;
        log::debug!("cpu reset");
    }

    /// Resets and then loads PC from the reset vector at 0xFFFC/0xFFFD.
    pub fn reset_from_vector(&mut self) {
        self.reset();
        self.regs.pc = self.read_word(RESET_VECTOR);
        log::debug!("cpu reset, PC loaded from vector: 0x{:04X}", self.regs.pc);
    }

    /// Executes one instruction and returns the cycles it took.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC, PC += 1
    /// 2. Look up the opcode in the dispatch table
    /// 3. On a trap entry, put PC back on the opcode and report it
    /// 4. Resolve the addressing mode (consumes operand bytes)
    /// 5. Run the operation
    /// 6. Add base cycles, page-crossing penalty and branch extras
    ///
    /// # Errors
    ///
    /// `ExecutionError::IllegalOpcode` when the opcode is undocumented. No
    /// register other than PC (restored) is modified and no cycles are counted.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, ExecutionError, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0x02]);
    ///
    /// let mut cpu = CPU::new(memory);
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::IllegalOpcode { opcode: 0x02, address: 0x0000 })
    /// );
    /// assert_eq!(cpu.pc(), 0x0000);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        let address = self.regs.pc;
        let opcode = self.fetch_byte();

        let instruction = match self.table[opcode as usize] {
            OpcodeEntry::Instruction(instruction) => instruction,
            OpcodeEntry::Trap => {
                self.regs.pc = address;
                self.state = RunState::Trapped { opcode, address };
                log::warn!(
                    "illegal opcode 0x{:02X} at 0x{:04X}",
                    opcode,
                    address
                );
                return Err(ExecutionError::IllegalOpcode { opcode, address });
            }
        };

        let resolved = self.resolve(instruction.mode);
        let extra = instructions::execute(self, instruction.mnemonic, resolved);

        let mut cycles = instruction.base_cycles + extra;
        if instruction.page_penalty && resolved.page_crossed {
            cycles += 1;
        }
        self.cycles += cycles as u64;
        self.state = RunState::Running;

        log::trace!(
            "{:04X}  {:02X}  {} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} S:{:02X} +{}",
            address,
            opcode,
            instruction.mnemonic,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.status(),
            self.regs.s,
            cycles
        );

        Ok(cycles)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error occurs.
    /// Returns the actual number of cycles consumed (may be slightly more than budget
    /// due to instruction granularity).
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0000, &[0xEA; 16]); // NOP sled
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x0005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored (returns 0) while the INTERRUPT flag is set. Otherwise pushes PC
    /// and P (BREAK clear), sets INTERRUPT, jumps through 0xFFFE and returns 7.
    pub fn irq(&mut self) -> u8 {
        if self.regs.flag(Status::INTERRUPT) {
            return 0;
        }
        self.enter_interrupt(IRQ_VECTOR);
        INTERRUPT_CYCLES
    }

    /// Triggers a non-maskable interrupt through 0xFFFA. Returns 7.
    pub fn nmi(&mut self) -> u8 {
        self.enter_interrupt(NMI_VECTOR);
        INTERRUPT_CYCLES
    }

    fn enter_interrupt(&mut self, vector: u16) {
        let status = (self.regs.p | Status::CONSTANT) - Status::BREAK;
        self.push_word(self.regs.pc);
        self.push(status.bits());
        self.regs.set_flag(Status::INTERRUPT, true);
        self.regs.pc = self.read_word(vector);
        self.cycles += INTERRUPT_CYCLES as u64;
        log::debug!("interrupt via 0x{:04X} -> 0x{:04X}", vector, self.regs.pc);
    }

    // ========== Bus helpers ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word (used for vectors).
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Value an operation consumes: the accumulator, an immediate, or a memory byte.
    pub(crate) fn read_operand(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.regs.a,
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.memory.read(addr),
            // The table never pairs a value-consuming operation with implied mode
            Operand::Implied => 0,
        }
    }

    /// Stores an operation's result back where its operand came from.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.regs.a = value,
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::Immediate(_) | Operand::Implied => {}
        }
    }

    // ========== Stack helpers ==========

    /// Writes to 0x0100+S, then decrements S (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        let addr = self.regs.stack_address();
        self.memory.write(addr, value);
        self.regs.s = self.regs.s.wrapping_sub(1);
    }

    /// Increments S (wrapping), then reads from 0x0100+S.
    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.s = self.regs.s.wrapping_add(1);
        let addr = self.regs.stack_address();
        self.memory.read(addr)
    }

    /// Pushes high byte first so the word sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward.
    pub fn sp(&self) -> u8 {
        self.regs.s
    }

    /// Returns the status register as a packed byte (NV1BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.regs.status()
    }

    /// Returns the status register as a flag set.
    pub fn flags(&self) -> Status {
        self.regs.p
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns where the driver stands after the last step.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns the configuration this CPU was built with.
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.flag(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.flag(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.flag(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.flag(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.flag(Status::INTERRUPT)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.flag(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.flag(Status::CARRY)
    }

    // ========== Setters (host setup, tests, save-states) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer offset within page one.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.s = value;
    }

    /// Overwrites P. CONSTANT is forced to 1.
    pub fn set_status(&mut self, value: u8) {
        self.regs.set_status(value);
    }

    /// Restores a register snapshot. CONSTANT is forced to 1.
    pub fn set_registers(&mut self, regs: Registers) {
        self.regs = regs;
        self.regs.p.insert(Status::CONSTANT);
    }

    /// Sets or clears one flag without touching the others.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.regs.set_flag(flag, value);
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.set_flag(Status::NEGATIVE, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.set_flag(Status::OVERFLOW, value);
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.set_flag(Status::BREAK, value);
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.set_flag(Status::DECIMAL, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.set_flag(Status::INTERRUPT, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.set_flag(Status::ZERO, value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.set_flag(Status::CARRY, value);
    }

    // ========== Bus access ==========

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus (loading programs, poking I/O).
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands the bus back to the host.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

impl<R, W> CPU<CallbackBus<R, W>>
where
    R: FnMut(u16) -> u8,
    W: FnMut(u16, u8),
{
    /// Creates a CPU whose bus is a pair of host callbacks.
    pub fn from_callbacks(read: R, write: W) -> Self {
        Self::new(CallbackBus::new(read, write))
    }
}
