//! Byte format definitions for Argon streams.
//!
//! This crate contains:
//! - Byte-space layout (opcode, literal and type-code ranges)
//! - Opcodes and the literal alphabet codec
//! - Value types, the type registry and their codecs
//! - Line formatting shared by trace output

pub mod alphabet;
mod error;
pub mod format;
pub mod layout;
mod opcode;
pub mod type_system;

#[cfg(test)]
mod format_tests;
#[cfg(test)]
mod layout_tests;

pub use error::{CodecError, FormatError, SchemaError};
pub use layout::{ALPHABET_SIZE, ByteClass, MAX_TYPE_COUNT, OPCODE_COUNT, TYPE_CODE_START, classify};
pub use opcode::Opcode;
pub use type_system::{TypeDescriptor, TypeRegistry, Value, ValueType};
