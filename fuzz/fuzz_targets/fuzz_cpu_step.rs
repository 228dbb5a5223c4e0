//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, runs a short burst
//! of instructions and interrupts, and checks the invariants that must
//! survive any input.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{CpuConfig, FlatMemory, RunState, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary register file
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    pc: u16,
    sp: u8,
    /// Raw status byte; bit 5 is forced by the CPU
    status: u8,
}

/// Host-side events interleaved with execution
#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    Step,
    Irq,
    Nmi,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    decimal_mode: bool,
    /// Placed at the initial PC
    code: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Interrupt vectors at 0xFFFA..=0xFFFF
    vectors: [u8; 6],
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.zero_page);
    memory.load(0x0100, &input.stack_page);
    memory.load(0xFFFA, &input.vectors);
    memory.load(input.registers.pc, &input.code);

    let mut cpu = CPU::with_config(
        memory,
        CpuConfig {
            decimal_mode: input.decimal_mode,
        },
    );
    cpu.set_a(input.registers.a);
    cpu.set_x(input.registers.x);
    cpu.set_y(input.registers.y);
    cpu.set_pc(input.registers.pc);
    cpu.set_sp(input.registers.sp);
    cpu.set_status(input.registers.status);

    for event in input.events.iter().take(64) {
        let before = cpu.cycles();
        match event {
            FuzzEvent::Step => {
                let pc = cpu.pc();
                match cpu.step() {
                    Ok(cycles) => {
                        assert!((2..=7).contains(&cycles));
                        assert_eq!(cpu.cycles(), before + cycles as u64);
                        assert_eq!(cpu.state(), RunState::Running);
                    }
                    Err(_) => {
                        // Traps leave PC on the opcode and cost nothing
                        assert_eq!(cpu.pc(), pc);
                        assert_eq!(cpu.cycles(), before);
                        assert!(matches!(cpu.state(), RunState::Trapped { .. }));
                        break;
                    }
                }
            }
            FuzzEvent::Irq => {
                let cycles = cpu.irq();
                assert!(cycles == 0 || cycles == 7);
                assert_eq!(cpu.cycles(), before + cycles as u64);
            }
            FuzzEvent::Nmi => {
                assert_eq!(cpu.nmi(), 7);
                assert!(cpu.flag_i());
            }
        }

        assert_eq!(cpu.status() & 0x20, 0x20);
    }
});
