//! Runtime for decoding Argon streams.
//!
//! The interpreter consumes a byte stream, builds table schemas and rows in a
//! caller-owned [`TableStore`], and can follow `OpenFile` includes through a
//! [`ByteSource`].

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    ByteSource, FsSource, Handler, Interpreter, InterpreterBuilder, Limits, Marker,
    MemorySource, NoopTracer, PrintTracer, RuntimeError, StateError, Table, TableStore, Tracer,
    Verbosity, render, render_colored,
};
