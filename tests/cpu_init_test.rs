//! CPU construction and reset tests
//!
//! Verifies the power-on state and that `reset()` always returns to it,
//! whatever ran before.

use cpu6502::{FlatMemory, MemoryBus, RunState, Status, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, program);
    CPU::new(memory)
}

#[test]
fn test_new_cpu_is_in_reset_state() {
    let cpu = setup_cpu(&[]);

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), Status::CONSTANT.bits());
    assert_eq!(cpu.state(), RunState::Reset);
}

#[test]
fn test_construction_does_not_touch_the_bus() {
    let mut accesses = 0;
    {
        let _cpu = CPU::from_callbacks(
            |_| {
                accesses += 1;
                0
            },
            |_, _| {},
        );
    }
    assert_eq!(accesses, 0);
}

#[test]
fn test_reset_after_execution() {
    // LDX #$FF, TXS, SEC, SED, LDA #$80, PHA
    let mut cpu = setup_cpu(&[0xA2, 0xFF, 0x9A, 0x38, 0xF8, 0xA9, 0x80, 0x48]);
    for _ in 0..6 {
        cpu.step().unwrap();
    }
    assert_ne!(cpu.status(), 0x20);
    assert_eq!(cpu.sp(), 0xFE);

    cpu.reset();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), 0x20);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.state(), RunState::Reset);
}

#[test]
fn test_reset_keeps_memory_and_decoding() {
    let mut cpu = setup_cpu(&[0xA9, 0x42]);
    cpu.step().unwrap();
    cpu.memory_mut().write(0x0300, 0x77);

    cpu.reset();

    assert_eq!(cpu.memory_mut().read(0x0300), 0x77);
    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_reset_from_trapped_state() {
    let mut cpu = setup_cpu(&[0x02]);
    assert!(cpu.step().is_err());
    assert!(matches!(cpu.state(), RunState::Trapped { .. }));

    cpu.reset();

    assert_eq!(cpu.state(), RunState::Reset);
}
