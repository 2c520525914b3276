//! Type registry addressed by type code.
//!
//! `code = index + TYPE_CODE_START`, so codes never collide with opcodes or
//! literal characters.

use crate::error::{CodecError, SchemaError};
use crate::layout::{MAX_TYPE_COUNT, TYPE_CODE_START};

use super::{Value, ValueType};

/// Number of built-in types (Text, Integer).
pub const BUILTIN_TYPE_COUNT: usize = 2;

const _: () = assert!(BUILTIN_TYPE_COUNT <= MAX_TYPE_COUNT);

/// A registered type together with its code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TypeDescriptor {
    pub code: u8,
    pub ty: ValueType,
}

impl TypeDescriptor {
    pub fn name(&self) -> &'static str {
        self.ty.name()
    }

    pub fn skip_hint(&self) -> usize {
        self.ty.skip_hint()
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        self.ty.decode(bytes)
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        self.ty.encode(value)
    }

    pub fn render(&self, value: &Value) -> String {
        self.ty.render(value)
    }
}

/// Ordered list of value types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRegistry {
    types: Vec<ValueType>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TypeRegistry {
    /// Registry with the built-in types: Text (103), Integer (104).
    pub fn builtin() -> Self {
        Self {
            types: vec![ValueType::TEXT, ValueType::Integer],
        }
    }

    /// Append a type, returning its code.
    pub fn register(&mut self, ty: ValueType) -> Result<u8, SchemaError> {
        if self.types.len() >= MAX_TYPE_COUNT {
            return Err(SchemaError::RegistryFull);
        }
        let code = Self::code_for(self.types.len());
        self.types.push(ty);
        Ok(code)
    }

    /// Resolve a type code.
    pub fn lookup(&self, code: u8) -> Result<TypeDescriptor, SchemaError> {
        let ty = code
            .checked_sub(TYPE_CODE_START)
            .and_then(|index| self.types.get(index as usize))
            .ok_or(SchemaError::UnknownType(code))?;
        Ok(TypeDescriptor { code, ty: *ty })
    }

    /// Code of the first registered type equal to `ty`.
    pub fn code_of(&self, ty: ValueType) -> Option<u8> {
        self.types
            .iter()
            .position(|t| *t == ty)
            .map(Self::code_for)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeDescriptor> + '_ {
        self.types.iter().enumerate().map(|(i, ty)| TypeDescriptor {
            code: Self::code_for(i),
            ty: *ty,
        })
    }

    fn code_for(index: usize) -> u8 {
        TYPE_CODE_START + index as u8
    }
}
