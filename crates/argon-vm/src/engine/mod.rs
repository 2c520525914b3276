//! Interpreter engine for Argon streams.
//!
//! Bytes flow through the [`Interpreter`] into command handlers, which
//! mutate the [`TableStore`]. A [`Tracer`] observes every step.

mod commands;
mod error;
mod interpreter;
mod render;
mod source;
mod store;
mod trace;

#[cfg(test)]
mod commands_tests;
#[cfg(test)]
mod source_tests;
#[cfg(test)]
mod test_utils;

pub use commands::{Handler, Marker};
pub use error::{RuntimeError, StateError};
pub use interpreter::{Interpreter, InterpreterBuilder, Limits};
pub use render::{render, render_colored};
pub use source::{ByteSource, FsSource, MemorySource};
pub use store::{Table, TableStore};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
