//! Value type descriptors.
//!
//! Each variant fixes how payload bytes become a [`Value`] and back, how the
//! value is rendered, and how many bytes following a cell boundary must
//! bypass opcode interpretation (the skip hint).

use crate::alphabet;
use crate::error::{CodecError, FormatError, SchemaError};

use super::Value;

/// Payload width of an Integer cell (little-endian `i32`).
pub const INTEGER_WIDTH: usize = 4;

/// Registered value kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ValueType {
    /// Alphabet-encoded text, optionally limited to `max_len` characters.
    Text { max_len: Option<u8> },
    /// 4-byte little-endian signed integer.
    Integer,
}

impl ValueType {
    /// Unconstrained text.
    pub const TEXT: Self = Self::Text { max_len: None };

    /// Text limited to `limit` characters, `0 < limit < 255`.
    pub fn text_with_limit(limit: usize) -> Result<Self, SchemaError> {
        if limit == 0 || limit >= u8::MAX as usize {
            return Err(SchemaError::InvalidSizeLimit(limit));
        }
        Ok(Self::Text {
            max_len: Some(limit as u8),
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Text { .. } => "Text",
            Self::Integer => "Integer",
        }
    }

    /// Bytes that must be passed through verbatim before this type's payload
    /// can be terminated by a marker.
    pub fn skip_hint(self) -> usize {
        match self {
            Self::Text { .. } => 0,
            Self::Integer => INTEGER_WIDTH,
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<Value, CodecError> {
        match self {
            Self::Text { max_len } => {
                let text = alphabet::decode(bytes)?;
                check_len(&text, max_len)?;
                Ok(Value::Text(text))
            }
            Self::Integer => {
                let raw: [u8; INTEGER_WIDTH] =
                    bytes.try_into().map_err(|_| FormatError::InvalidWidth {
                        expected: INTEGER_WIDTH,
                        actual: bytes.len(),
                    })?;
                Ok(Value::Integer(i32::from_le_bytes(raw)))
            }
        }
    }

    pub fn encode(self, value: &Value) -> Result<Vec<u8>, CodecError> {
        match (self, value) {
            (Self::Text { max_len }, Value::Text(text)) => {
                check_len(text, max_len)?;
                Ok(alphabet::encode(text)?)
            }
            (Self::Integer, Value::Integer(n)) => Ok(n.to_le_bytes().to_vec()),
            _ => Err(SchemaError::TypeMismatch {
                expected: self.name(),
                found: value.kind_name(),
            }
            .into()),
        }
    }

    /// Human-readable form of a value of this type.
    pub fn render(self, value: &Value) -> String {
        value.to_string()
    }
}

fn check_len(text: &str, max_len: Option<u8>) -> Result<(), SchemaError> {
    let Some(limit) = max_len else {
        return Ok(());
    };
    let len = text.chars().count();
    if len > limit as usize {
        return Err(SchemaError::InvalidSize { len, limit });
    }
    Ok(())
}
