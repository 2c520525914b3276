//! Literal alphabet codec.
//!
//! Literal bytes map to characters by their position in [`ALPHABET`],
//! offset by [`OPCODE_COUNT`]: byte `7` is `'0'`, byte `102` is `'~'`.

use crate::error::FormatError;
use crate::layout::{ALPHABET_SIZE, OPCODE_COUNT};

/// Characters addressable by literal bytes, in byte order.
pub const ALPHABET: [u8; ALPHABET_SIZE as usize] = *b"0123456789\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz \n\
,.;:!?()[]{}'\"+-=<>@#$%^&*_|/\\`~";

const ABSENT: u8 = u8::MAX;

/// ASCII code point → alphabet index, `ABSENT` when not in the alphabet.
const REVERSE: [u8; 128] = build_reverse();

const fn build_reverse() -> [u8; 128] {
    let mut table = [ABSENT; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Whether `b` lies in the literal range.
pub fn is_literal(b: u8) -> bool {
    b >= OPCODE_COUNT && b - OPCODE_COUNT < ALPHABET_SIZE
}

pub fn char_to_byte(c: char) -> Result<u8, FormatError> {
    let index = if c.is_ascii() {
        REVERSE[c as usize]
    } else {
        ABSENT
    };
    if index == ABSENT {
        return Err(FormatError::UnknownCharacter(c));
    }
    Ok(index + OPCODE_COUNT)
}

pub fn byte_to_char(b: u8) -> Result<char, FormatError> {
    if !is_literal(b) {
        return Err(FormatError::OutOfRange(b));
    }
    Ok(ALPHABET[(b - OPCODE_COUNT) as usize] as char)
}

/// Encode text as literal bytes.
pub fn encode(text: &str) -> Result<Vec<u8>, FormatError> {
    text.chars().map(char_to_byte).collect()
}

/// Decode literal bytes as text.
pub fn decode(bytes: &[u8]) -> Result<String, FormatError> {
    bytes.iter().map(|&b| byte_to_char(b)).collect()
}
