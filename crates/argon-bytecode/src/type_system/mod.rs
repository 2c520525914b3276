//! Value types and their codecs.
//!
//! A closed set of value kinds ([`ValueType`]) with fixed decode, encode,
//! render and skip-hint behavior, addressed by byte code through the
//! [`TypeRegistry`].

mod kind;
mod registry;
mod value;

#[cfg(test)]
mod kind_tests;

pub use kind::{INTEGER_WIDTH, ValueType};
pub use registry::{BUILTIN_TYPE_COUNT, TypeDescriptor, TypeRegistry};
pub use value::Value;
