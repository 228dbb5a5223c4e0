//! Tests for the SBC (Subtract with Carry) instruction.
//!
//! Carry acts as an inverted borrow: set before a subtraction means no
//! borrow, and it is left set afterwards when no borrow occurred.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, program);
    CPU::new(memory)
}

#[test]
fn test_sbc_no_borrow() {
    let mut cpu = setup_cpu(&[0xE9, 0x03]);
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(2));

    assert_eq!(cpu.a(), 0x0D);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_borrow_in() {
    let mut cpu = setup_cpu(&[0xE9, 0x03]);
    cpu.set_a(0x10);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0C);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_equal_gives_zero() {
    let mut cpu = setup_cpu(&[0xE9, 0x42]);
    cpu.set_a(0x42);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_overflow_positive_minus_negative() {
    // 0x7F - 0xFF = 0x80: positive - negative = negative
    let mut cpu = setup_cpu(&[0xE9, 0xFF]);
    cpu.set_a(0x7F);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_sbc_zero_page() {
    let mut cpu = setup_cpu(&[0xE5, 0x80]);
    cpu.memory_mut().write(0x0080, 0x05);
    cpu.set_a(0x08);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.a(), 0x03);
}

#[test]
fn test_sbc_absolute_y_page_cross() {
    let mut cpu = setup_cpu(&[0xF9, 0xFF, 0x10]);
    cpu.memory_mut().write(0x1100, 0x01);
    cpu.set_y(0x01);
    cpu.set_a(0x05);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x04);
}

#[test]
fn test_sbc_decimal() {
    // 46 - 12 = 34
    let mut cpu = setup_cpu(&[0xE9, 0x12]);
    cpu.set_a(0x46);
    cpu.set_flag_c(true);
    cpu.set_flag_d(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x34);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_with_borrow_in() {
    // 40 - 13 - 1 = 26
    let mut cpu = setup_cpu(&[0xE9, 0x13]);
    cpu.set_a(0x40);
    cpu.set_flag_c(false);
    cpu.set_flag_d(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x26);
    assert!(cpu.flag_c());
}
