//! Partition of the byte value space.
//!
//! Every byte of a stream falls in exactly one range:
//! - `[0, OPCODE_COUNT)`: opcodes
//! - `[OPCODE_COUNT, TYPE_CODE_START)`: literal characters
//! - `[TYPE_CODE_START, 256)`: type codes (also Ignore's length argument)

use super::alphabet;
use super::opcode::Opcode;

/// Number of reserved opcode bytes.
pub const OPCODE_COUNT: u8 = 7;

/// Number of characters in the literal alphabet.
pub const ALPHABET_SIZE: u8 = 96;

/// First byte value addressing the type registry.
pub const TYPE_CODE_START: u8 = OPCODE_COUNT + ALPHABET_SIZE;

/// Number of type codes the byte space can address.
pub const MAX_TYPE_COUNT: usize = 256 - TYPE_CODE_START as usize;

const _: () = assert!(Opcode::ALL.len() == OPCODE_COUNT as usize);
const _: () = assert!(alphabet::ALPHABET.len() == ALPHABET_SIZE as usize);
const _: () = assert!((OPCODE_COUNT as usize) + (ALPHABET_SIZE as usize) < 256);

/// Classification of a single stream byte.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ByteClass {
    Opcode(Opcode),
    Literal(char),
    /// Byte in the type-code range, carrying the raw code.
    TypeCode(u8),
}

/// Classify a byte by its range alone.
///
/// This is a static view: whether a byte is actually interpreted as an
/// opcode also depends on the interpreter's ignore count.
pub fn classify(b: u8) -> ByteClass {
    if let Some(op) = Opcode::from_byte(b) {
        return ByteClass::Opcode(op);
    }
    if b < TYPE_CODE_START {
        return ByteClass::Literal(alphabet::ALPHABET[(b - OPCODE_COUNT) as usize] as char);
    }
    ByteClass::TypeCode(b)
}
