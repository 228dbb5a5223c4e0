//! Stack behaviour tests: PHA, PHP, PLA, PLP and TXS/TSX.
//!
//! The stack lives in page one and S wraps within it in both directions.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0200, program);
    let mut cpu = CPU::new(memory);
    cpu.set_pc(0x0200);
    cpu
}

#[test]
fn test_push_from_reset_wraps_to_top() {
    // S = 0x00 after reset: first push lands at $0100, S becomes 0xFF
    let mut cpu = setup_cpu(&[0x48]);
    cpu.set_a(0x99);

    assert_eq!(cpu.step(), Ok(3));

    assert_eq!(cpu.memory().peek(0x0100), 0x99);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_pull_at_top_wraps_to_bottom() {
    let mut cpu = setup_cpu(&[0x68]);
    cpu.set_sp(0xFF);
    cpu.memory_mut().write(0x0100, 0x80);

    assert_eq!(cpu.step(), Ok(4));

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0x00);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_pha_pla_round_trip() {
    // LDA #$37, PHA, LDA #$00, PLA
    let mut cpu = setup_cpu(&[0xA9, 0x37, 0x48, 0xA9, 0x00, 0x68]);
    cpu.set_sp(0xFF);

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(!cpu.flag_z());
}

#[test]
fn test_php_sets_break_and_constant_in_pushed_copy() {
    let mut cpu = setup_cpu(&[0x08]);
    cpu.set_sp(0xFF);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(3));

    assert_eq!(cpu.memory().peek(0x01FF), 0x31);
    assert!(!cpu.flag_b());
}

#[test]
fn test_plp_ignores_break_and_forces_constant() {
    let mut cpu = setup_cpu(&[0x28]);
    cpu.set_sp(0xFE);
    cpu.memory_mut().write(0x01FF, 0xDF);

    assert_eq!(cpu.step(), Ok(4));

    // 0xDF with B cleared, bit 5 set
    assert_eq!(cpu.status(), 0xEF);
}

#[test]
fn test_txs_does_not_touch_flags() {
    // LDX #$80 sets N, TXS keeps it
    let mut cpu = setup_cpu(&[0xA2, 0x80, 0x9A]);
    cpu.step().unwrap();
    let flags = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x80);
    assert_eq!(cpu.status(), flags);
}

#[test]
fn test_tsx_updates_flags() {
    let mut cpu = setup_cpu(&[0xBA]);
    cpu.set_sp(0xF0);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xF0);
    assert!(cpu.flag_n());
}
