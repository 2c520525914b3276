//! Single-pass stream interpreter.

use argon_bytecode::{Opcode, TypeRegistry};

use super::commands::{self, Command, Handler, Marker};
use super::error::{RuntimeError, StateError};
use super::source::ByteSource;
use super::store::TableStore;
use super::trace::{NoopTracer, Tracer};

/// Label used in error locations and traces for streams decoded from memory.
const INPUT_LABEL: &str = "<input>";

/// Runtime limits for decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested `OpenFile` includes (default: 64).
    pub(crate) include_depth: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self { include_depth: 64 }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the include depth limit.
    pub fn include_depth(mut self, depth: u32) -> Self {
        self.include_depth = depth;
        self
    }

    pub fn get_include_depth(&self) -> u32 {
        self.include_depth
    }
}

/// Builder for [`Interpreter`] instances.
#[derive(Clone, Debug, Default)]
pub struct InterpreterBuilder {
    registry: TypeRegistry,
    limits: Limits,
    sticky: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom type registry instead of the built-in one.
    pub fn registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn include_depth(mut self, depth: u32) -> Self {
        self.limits = self.limits.include_depth(depth);
        self
    }

    /// Keep the selected handler after a marker fires.
    ///
    /// Streams written for the legacy decoder select `AddRecord` once and
    /// then terminate every cell with a marker.
    pub fn sticky_handler(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            registry: self.registry,
            limits: self.limits,
            sticky: self.sticky,
        }
    }
}

/// Decodes Argon streams into a [`TableStore`].
///
/// The interpreter itself is immutable: every pass gets fresh state, so one
/// instance can decode any number of streams.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    registry: TypeRegistry,
    limits: Limits,
    sticky: bool,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Decode `bytes`, appending tables to `store`.
    ///
    /// On error the store keeps everything created before the failing byte.
    pub fn decode(
        &self,
        bytes: &[u8],
        source: &dyn ByteSource,
        store: &mut TableStore,
    ) -> Result<(), RuntimeError> {
        self.decode_with(bytes, source, store, &mut NoopTracer)
    }

    pub fn decode_with<T: Tracer>(
        &self,
        bytes: &[u8],
        source: &dyn ByteSource,
        store: &mut TableStore,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        let mut ctx = self.context(source, store, tracer);
        ctx.tracer.trace_enter_file(INPUT_LABEL, bytes.len());
        let result = run_pass(&mut ctx, INPUT_LABEL, bytes);
        ctx.tracer.trace_leave_file(INPUT_LABEL);
        result
    }

    /// Read `path` from `source` and decode it.
    ///
    /// `path` counts as open while it is decoded, so a stream that includes
    /// itself is reported as a cycle.
    pub fn decode_file(
        &self,
        path: &str,
        source: &dyn ByteSource,
        store: &mut TableStore,
    ) -> Result<(), RuntimeError> {
        self.decode_file_with(path, source, store, &mut NoopTracer)
    }

    pub fn decode_file_with<T: Tracer>(
        &self,
        path: &str,
        source: &dyn ByteSource,
        store: &mut TableStore,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        let bytes = source.read(path).map_err(|source| RuntimeError::Io {
            path: path.to_string(),
            source,
        })?;

        let mut ctx = self.context(source, store, tracer);
        ctx.open_files.push(source.canonical(path));
        ctx.tracer.trace_enter_file(path, bytes.len());
        let result = run_pass(&mut ctx, path, &bytes);
        ctx.tracer.trace_leave_file(path);
        result
    }

    fn context<'c, T: Tracer>(
        &'c self,
        source: &'c dyn ByteSource,
        store: &'c mut TableStore,
        tracer: &'c mut T,
    ) -> Context<'c, T> {
        Context {
            store,
            registry: &self.registry,
            source,
            tracer,
            limits: self.limits,
            sticky: self.sticky,
            open_files: Vec::new(),
            depth: 0,
        }
    }
}

/// Everything handlers may touch, shared by a pass and its nested includes.
pub(crate) struct Context<'c, T: Tracer> {
    pub(crate) store: &'c mut TableStore,
    pub(crate) registry: &'c TypeRegistry,
    pub(crate) source: &'c dyn ByteSource,
    pub(crate) tracer: &'c mut T,
    pub(crate) limits: Limits,
    pub(crate) sticky: bool,
    /// Canonical ids of the files currently being decoded, outermost first.
    pub(crate) open_files: Vec<String>,
    /// Number of nested includes entered so far.
    pub(crate) depth: u32,
}

/// Per-pass interpreter state. Each file gets its own.
#[derive(Default)]
struct PassState {
    register: Vec<u8>,
    ignore_count: usize,
    field_index: usize,
    active: Option<Handler>,
}

impl PassState {
    fn step<T: Tracer>(
        &mut self,
        ctx: &mut Context<'_, T>,
        offset: usize,
        b: u8,
    ) -> Result<(), RuntimeError> {
        if self.ignore_count > 0 {
            self.ignore_count -= 1;
            ctx.tracer.trace_protected(offset, b);
            self.register.push(b);
            return Ok(());
        }

        let Some(op) = Opcode::from_byte(b) else {
            ctx.tracer.trace_literal(offset, b);
            self.register.push(b);
            return Ok(());
        };

        match Command::from(op) {
            Command::Select(handler) => {
                ctx.tracer.trace_select(offset, handler);
                self.active = Some(handler);
            }
            Command::Fire(marker) => self.fire(ctx, offset, marker)?,
        }
        Ok(())
    }

    fn fire<T: Tracer>(
        &mut self,
        ctx: &mut Context<'_, T>,
        offset: usize,
        marker: Marker,
    ) -> Result<(), RuntimeError> {
        let handler = self.active.ok_or(StateError::NoPendingHandler)?;
        ctx.tracer
            .trace_fire(offset, marker, handler, self.field_index, &self.register);

        let skip = commands::run(handler, ctx, self.field_index, &self.register)?;

        self.register.clear();
        self.ignore_count = skip;
        if skip > 0 {
            ctx.tracer.trace_skip(skip);
        }
        if !ctx.sticky {
            self.active = None;
        }
        self.field_index = match marker {
            Marker::End => 0,
            Marker::Split => self.field_index + 1,
        };
        Ok(())
    }
}

/// Interpret `bytes` as the content of `file`.
///
/// Errors are wrapped with the offset of the byte that caused them.
pub(crate) fn run_pass<T: Tracer>(
    ctx: &mut Context<'_, T>,
    file: &str,
    bytes: &[u8],
) -> Result<(), RuntimeError> {
    let mut state = PassState::default();

    for (offset, &b) in bytes.iter().enumerate() {
        state
            .step(ctx, offset, b)
            .map_err(|err| err.at(file, offset))?;
    }

    if !state.register.is_empty() {
        ctx.tracer.trace_discard(state.register.len());
    }
    Ok(())
}
