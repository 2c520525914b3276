//! Errors that can occur while interpreting a stream.

use std::io;

use argon_bytecode::{CodecError, FormatError, SchemaError};

/// Interpreter state violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A control marker arrived while no handler was selected.
    #[error("no pending processor")]
    NoPendingHandler,

    #[error("negative ignore count: {0}")]
    NegativeIgnoreCount(i16),

    /// `OpenFile` named a file that is already being interpreted.
    #[error("include cycle: `{0}` is already open")]
    IncludeCycle(String),

    #[error("include depth limit exceeded ({0} nested files)")]
    IncludeDepthExceeded(u32),
}

/// Errors raised by a decoding pass.
///
/// Every error aborts the pass; tables and rows created before the failing
/// byte stay in the store.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("cannot read `{path}`: {source}")]
    Io { path: String, source: io::Error },

    /// Position of the failing byte. Nested includes produce nested `At`s,
    /// outermost file first.
    #[error("{file}:{offset}: {source}")]
    At {
        file: String,
        offset: usize,
        source: Box<RuntimeError>,
    },
}

impl From<CodecError> for RuntimeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Format(e) => Self::Format(e),
            CodecError::Schema(e) => Self::Schema(e),
        }
    }
}

impl RuntimeError {
    pub(crate) fn at(self, file: &str, offset: usize) -> Self {
        Self::At {
            file: file.to_string(),
            offset,
            source: Box::new(self),
        }
    }

    /// The underlying error, with all location wrappers removed.
    pub fn root(&self) -> &RuntimeError {
        let mut err = self;
        while let Self::At { source, .. } = err {
            err = &**source;
        }
        err
    }
}
