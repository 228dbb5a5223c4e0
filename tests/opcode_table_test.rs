//! Opcode table validation tests
//!
//! Verifies that the dispatch table is complete: every one of the 256 opcode
//! bytes decodes to an instruction or to an explicit trap.

use std::collections::HashSet;

use cpu6502::{AddressingMode, Mnemonic, OpcodeEntry, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(OPCODE_TABLE.len(), 256);

    let mut documented = 0;
    let mut traps = 0;
    for entry in OPCODE_TABLE.iter() {
        match entry {
            OpcodeEntry::Instruction(_) => documented += 1,
            OpcodeEntry::Trap => traps += 1,
        }
    }

    assert_eq!(documented, 151);
    assert_eq!(traps, 105);
}

#[test]
fn test_all_56_operations_present() {
    let mnemonics: HashSet<Mnemonic> = OPCODE_TABLE
        .iter()
        .filter_map(OpcodeEntry::mnemonic)
        .collect();

    assert_eq!(mnemonics.len(), 56);
}

#[test]
fn test_documented_cycles_in_range() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if let Some(instruction) = entry.instruction() {
            assert!(
                (2..=7).contains(&instruction.base_cycles),
                "Opcode 0x{:02X} ({}) has {} cycles",
                opcode,
                instruction.mnemonic,
                instruction.base_cycles
            );
        }
    }
}

#[test]
fn test_size_validation() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        let size = entry.size_bytes();
        assert!(
            (1..=3).contains(&size),
            "Opcode 0x{:02X} has invalid size: {}",
            opcode,
            size
        );
    }
}

#[test]
fn test_known_entries() {
    let expect = |opcode: usize, mnemonic: Mnemonic, mode: AddressingMode, cycles: u8| {
        let instruction = OPCODE_TABLE[opcode]
            .instruction()
            .unwrap_or_else(|| panic!("0x{:02X} should be documented", opcode));
        assert_eq!(instruction.mnemonic, mnemonic, "0x{:02X}", opcode);
        assert_eq!(instruction.mode, mode, "0x{:02X}", opcode);
        assert_eq!(instruction.base_cycles, cycles, "0x{:02X}", opcode);
    };

    expect(0x00, Mnemonic::BRK, AddressingMode::Implicit, 7);
    expect(0x0A, Mnemonic::ASL, AddressingMode::Accumulator, 2);
    expect(0x20, Mnemonic::JSR, AddressingMode::Absolute, 6);
    expect(0x4C, Mnemonic::JMP, AddressingMode::Absolute, 3);
    expect(0x6C, Mnemonic::JMP, AddressingMode::Indirect, 5);
    expect(0x69, Mnemonic::ADC, AddressingMode::Immediate, 2);
    expect(0x91, Mnemonic::STA, AddressingMode::IndirectY, 6);
    expect(0x96, Mnemonic::STX, AddressingMode::ZeroPageY, 4);
    expect(0xA1, Mnemonic::LDA, AddressingMode::IndirectX, 6);
    expect(0xBE, Mnemonic::LDX, AddressingMode::AbsoluteY, 4);
    expect(0xD0, Mnemonic::BNE, AddressingMode::Relative, 2);
    expect(0xEA, Mnemonic::NOP, AddressingMode::Implicit, 2);
    expect(0xFE, Mnemonic::INC, AddressingMode::AbsoluteX, 7);
}

#[test]
fn test_undocumented_opcodes_are_traps() {
    for opcode in [0x02, 0x03, 0x04, 0x0B, 0x1A, 0x80, 0x89, 0x9C, 0xAB, 0xEB, 0xFF] {
        assert!(OPCODE_TABLE[opcode].is_trap(), "0x{:02X} should trap", opcode);
    }
}

#[test]
fn test_branches_use_relative_mode() {
    for entry in OPCODE_TABLE.iter().filter_map(OpcodeEntry::instruction) {
        let is_branch = matches!(
            entry.mnemonic,
            Mnemonic::BCC
                | Mnemonic::BCS
                | Mnemonic::BEQ
                | Mnemonic::BNE
                | Mnemonic::BMI
                | Mnemonic::BPL
                | Mnemonic::BVC
                | Mnemonic::BVS
        );
        assert_eq!(is_branch, entry.mode == AddressingMode::Relative);
    }
}
