//! Tests for JMP, JSR and RTS.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(pc: u16, program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(pc, program);
    let mut cpu = CPU::new(memory);
    cpu.set_pc(pc);
    cpu.set_sp(0xFF);
    cpu
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute_leaves_flags() {
    let mut cpu = setup_cpu(0x8000, &[0x4C, 0x00, 0xC0]);
    cpu.set_status(0xE3);

    assert_eq!(cpu.step(), Ok(3));

    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.status(), 0xE3);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu(0x8000, &[0x6C, 0x20, 0x01]);
    cpu.memory_mut().load(0x0120, &[0xFC, 0xBA]);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.pc(), 0xBAFC);
}

#[test]
fn test_jmp_indirect_wraps_within_page() {
    // Pointer at $30FF: high byte comes from $3000, not $3100
    let mut cpu = setup_cpu(0x8000, &[0x6C, 0xFF, 0x30]);
    cpu.memory_mut().write(0x30FF, 0x80);
    cpu.memory_mut().write(0x3000, 0x40);
    cpu.memory_mut().write(0x3100, 0x50);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x4080);
}

#[test]
fn test_jmp_to_self() {
    let mut cpu = setup_cpu(0x0200, &[0x4C, 0x00, 0x02]);

    for _ in 0..3 {
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x0200);
    }
    assert_eq!(cpu.cycles(), 9);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_last_byte_address() {
    let mut cpu = setup_cpu(0x1234, &[0x20, 0x00, 0x40]);

    assert_eq!(cpu.step(), Ok(6));

    assert_eq!(cpu.pc(), 0x4000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.memory().peek(0x01FF), 0x12);
    assert_eq!(cpu.memory().peek(0x01FE), 0x36);
}

#[test]
fn test_nested_subroutines() {
    // main: JSR $0300 ; NOP
    // $0300: JSR $0400 ; RTS
    // $0400: INX ; RTS
    let mut cpu = setup_cpu(0x0200, &[0x20, 0x00, 0x03, 0xEA]);
    cpu.memory_mut().load(0x0300, &[0x20, 0x00, 0x04, 0x60]);
    cpu.memory_mut().load(0x0400, &[0xE8, 0x60]);

    cpu.step().unwrap(); // JSR $0300
    cpu.step().unwrap(); // JSR $0400
    assert_eq!(cpu.sp(), 0xFB);
    cpu.step().unwrap(); // INX
    cpu.step().unwrap(); // RTS
    assert_eq!(cpu.pc(), 0x0303);
    cpu.step().unwrap(); // RTS
    assert_eq!(cpu.pc(), 0x0203);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.x(), 0x01);
}

#[test]
fn test_rts_with_wrapped_stack() {
    // S = 0xFE: low byte at $01FF, high byte wraps to $0100
    let mut cpu = setup_cpu(0x0200, &[0x60]);
    cpu.set_sp(0xFE);
    cpu.memory_mut().write(0x01FF, 0x0F);
    cpu.memory_mut().write(0x0100, 0x30);

    assert_eq!(cpu.step(), Ok(6));

    assert_eq!(cpu.pc(), 0x3010);
    assert_eq!(cpu.sp(), 0x00);
}
