use crate::layout::{ALPHABET_SIZE, ByteClass, MAX_TYPE_COUNT, OPCODE_COUNT, TYPE_CODE_START, classify};
use crate::Opcode;

#[test]
fn ranges_partition_byte_space() {
    assert_eq!(OPCODE_COUNT, 7);
    assert_eq!(ALPHABET_SIZE, 96);
    assert_eq!(TYPE_CODE_START, 103);
    assert_eq!(
        OPCODE_COUNT as usize + ALPHABET_SIZE as usize + MAX_TYPE_COUNT,
        256
    );
}

#[test]
fn classify_boundaries() {
    assert_eq!(classify(0), ByteClass::Opcode(Opcode::End));
    assert_eq!(classify(6), ByteClass::Opcode(Opcode::Ignore));
    assert_eq!(classify(7), ByteClass::Literal('0'));
    assert_eq!(classify(102), ByteClass::Literal('~'));
    assert_eq!(classify(103), ByteClass::TypeCode(103));
    assert_eq!(classify(255), ByteClass::TypeCode(255));
}

#[test]
fn every_byte_has_one_class() {
    let mut opcodes = 0;
    let mut literals = 0;
    let mut types = 0;
    for b in 0..=255u8 {
        match classify(b) {
            ByteClass::Opcode(_) => opcodes += 1,
            ByteClass::Literal(_) => literals += 1,
            ByteClass::TypeCode(_) => types += 1,
        }
    }
    assert_eq!(opcodes, OPCODE_COUNT as usize);
    assert_eq!(literals, ALPHABET_SIZE as usize);
    assert_eq!(types, MAX_TYPE_COUNT);
}

#[test]
fn classify_sample_stream() {
    let classes: Vec<String> = [2u8, 48, 57, 57, 0, 104]
        .iter()
        .map(|&b| format!("{b:3} {:?}", classify(b)))
        .collect();

    insta::assert_snapshot!(classes.join("\n"), @r"
      2 Opcode(CreateTable)
     48 Literal('f')
     57 Literal('o')
     57 Literal('o')
      0 Opcode(End)
    104 TypeCode(104)
    ");
}
