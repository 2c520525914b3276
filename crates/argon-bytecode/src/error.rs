//! Codec and schema errors.

/// Malformed payload shape or bytes outside the expected range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("character {0:?} is not in the alphabet")]
    UnknownCharacter(char),
    #[error("byte {0} is outside the literal range")]
    OutOfRange(u8),
    #[error("invalid payload width: expected {expected} bytes, got {actual}")]
    InvalidWidth { expected: usize, actual: usize },
    #[error("invalid type byte: expected 1 byte, got {0}")]
    InvalidTypeByte(usize),
    #[error("invalid ignore byte: expected 1 byte, got {0}")]
    InvalidIgnoreByte(usize),
}

/// Violation of a table schema or of the type registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate field name `{0}`")]
    DuplicateField(String),
    #[error("unknown type code {0}")]
    UnknownType(u8),
    #[error("column {index} is out of range ({columns} typed columns)")]
    ColumnOverflow { index: usize, columns: usize },
    #[error("text of {len} characters exceeds the limit of {limit}")]
    InvalidSize { len: usize, limit: u8 },
    #[error("text size limit must be between 1 and 254, got {0}")]
    InvalidSizeLimit(usize),
    #[error("cell {index} does not follow the {cells} cells of the current row")]
    MisalignedCell { index: usize, cells: usize },
    #[error("expected a {expected} value, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("no table has been created")]
    NoTable,
    #[error("type registry is full")]
    RegistryFull,
}

/// Failure of a value codec: either the bytes or the schema are at fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
