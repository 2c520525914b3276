//! Opcode encoding.
//!
//! Opcodes occupy the lowest byte values. Two of them are control markers
//! that fire the pending handler; the rest select a handler.

/// Stream opcode.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Opcode {
    /// Fire the pending handler and reset the field index.
    End = 0,
    /// Fire the pending handler and advance the field index.
    Split = 1,
    CreateTable = 2,
    AddField = 3,
    AddRecord = 4,
    /// Interpret another stream against the same store.
    OpenFile = 5,
    /// Treat the next `n` bytes as literal payload.
    Ignore = 6,
}

impl Opcode {
    /// All opcodes in byte order.
    pub const ALL: [Opcode; 7] = [
        Self::End,
        Self::Split,
        Self::CreateTable,
        Self::AddField,
        Self::AddRecord,
        Self::OpenFile,
        Self::Ignore,
    ];

    /// Decode from a stream byte. Returns `None` outside the opcode range.
    pub fn from_byte(b: u8) -> Option<Self> {
        Self::ALL.get(b as usize).copied()
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Whether this opcode fires the pending handler (End, Split).
    pub fn is_marker(self) -> bool {
        matches!(self, Self::End | Self::Split)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::End => "End",
            Self::Split => "Split",
            Self::CreateTable => "CreateTable",
            Self::AddField => "AddField",
            Self::AddRecord => "AddRecord",
            Self::OpenFile => "OpenFile",
            Self::Ignore => "Ignore",
        }
    }
}
