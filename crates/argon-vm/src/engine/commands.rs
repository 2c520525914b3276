//! Command handlers, one per handler opcode.
//!
//! A handler is selected by its opcode and fired later by a control marker
//! with the current field index and the buffered payload. It returns a skip
//! hint: the number of following bytes the interpreter must pass through
//! verbatim.

use argon_bytecode::{FormatError, OPCODE_COUNT, Opcode, SchemaError, alphabet};

use super::error::{RuntimeError, StateError};
use super::interpreter::{Context, run_pass};
use super::trace::Tracer;

/// Opcode that fires the pending handler.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Marker {
    /// Resets the field index (also called Next).
    End,
    /// Advances the field index.
    Split,
}

impl Marker {
    pub fn name(self) -> &'static str {
        match self {
            Self::End => "End",
            Self::Split => "Split",
        }
    }
}

/// Opcode that selects a handler.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Handler {
    CreateTable,
    AddField,
    AddRecord,
    OpenFile,
    Ignore,
}

impl Handler {
    pub fn name(self) -> &'static str {
        self.opcode().name()
    }

    pub fn opcode(self) -> Opcode {
        match self {
            Self::CreateTable => Opcode::CreateTable,
            Self::AddField => Opcode::AddField,
            Self::AddRecord => Opcode::AddRecord,
            Self::OpenFile => Opcode::OpenFile,
            Self::Ignore => Opcode::Ignore,
        }
    }
}

/// What an opcode byte asks the interpreter to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Command {
    Fire(Marker),
    Select(Handler),
}

impl From<Opcode> for Command {
    fn from(op: Opcode) -> Self {
        match op {
            Opcode::End => Self::Fire(Marker::End),
            Opcode::Split => Self::Fire(Marker::Split),
            Opcode::CreateTable => Self::Select(Handler::CreateTable),
            Opcode::AddField => Self::Select(Handler::AddField),
            Opcode::AddRecord => Self::Select(Handler::AddRecord),
            Opcode::OpenFile => Self::Select(Handler::OpenFile),
            Opcode::Ignore => Self::Select(Handler::Ignore),
        }
    }
}

/// Run `handler` on a completed payload, returning its skip hint.
pub(crate) fn run<T: Tracer>(
    handler: Handler,
    ctx: &mut Context<'_, T>,
    field_index: usize,
    payload: &[u8],
) -> Result<usize, RuntimeError> {
    match handler {
        Handler::CreateTable => create_table(ctx, payload),
        Handler::AddField => add_field(ctx, field_index, payload),
        Handler::AddRecord => add_record(ctx, field_index, payload),
        Handler::OpenFile => open_file(ctx, payload),
        Handler::Ignore => ignore(payload),
    }
}

fn create_table<T: Tracer>(ctx: &mut Context<'_, T>, payload: &[u8]) -> Result<usize, RuntimeError> {
    let name = alphabet::decode(payload)?;
    let table = ctx.store.create_table(name);
    ctx.tracer.trace_table(table.name());
    Ok(0)
}

/// Even field indices carry a field name, odd ones its type code.
fn add_field<T: Tracer>(
    ctx: &mut Context<'_, T>,
    field_index: usize,
    payload: &[u8],
) -> Result<usize, RuntimeError> {
    let table = ctx.store.current_mut()?;

    if field_index % 2 == 0 {
        let name = alphabet::decode(payload)?;
        ctx.tracer.trace_field(&name);
        table.add_field_name(name)?;
        return Ok(0);
    }

    let &[code] = payload else {
        return Err(FormatError::InvalidTypeByte(payload.len()).into());
    };
    let ty = ctx.registry.lookup(code)?;
    table.add_field_type(ty)?;
    ctx.tracer.trace_field_type(ty);
    Ok(0)
}

fn add_record<T: Tracer>(
    ctx: &mut Context<'_, T>,
    field_index: usize,
    payload: &[u8],
) -> Result<usize, RuntimeError> {
    let table = ctx.store.current_mut()?;
    let Some(&ty) = table.field_types().get(field_index) else {
        return Err(SchemaError::ColumnOverflow {
            index: field_index,
            columns: table.field_types().len(),
        }
        .into());
    };

    let value = ty.decode(payload)?;
    let (row, value) = table.push_cell(field_index, value)?;
    ctx.tracer.trace_cell(row, field_index, value);

    // Arm the skip count so the next cell's fixed-width payload cannot be
    // mistaken for opcodes.
    let next = table
        .field_types()
        .get(field_index + 1)
        .map_or(0, |t| t.skip_hint());
    Ok(next)
}

fn open_file<T: Tracer>(ctx: &mut Context<'_, T>, payload: &[u8]) -> Result<usize, RuntimeError> {
    let path = alphabet::decode(payload)?;

    if ctx.depth >= ctx.limits.include_depth {
        return Err(StateError::IncludeDepthExceeded(ctx.limits.include_depth).into());
    }
    let id = ctx.source.canonical(&path);
    if ctx.open_files.contains(&id) {
        return Err(StateError::IncludeCycle(path).into());
    }
    let bytes = ctx
        .source
        .read(&path)
        .map_err(|source| RuntimeError::Io {
            path: path.clone(),
            source,
        })?;

    ctx.open_files.push(id);
    ctx.depth += 1;
    ctx.tracer.trace_enter_file(&path, bytes.len());

    let result = run_pass(ctx, &path, &bytes);

    ctx.tracer.trace_leave_file(&path);
    ctx.depth -= 1;
    ctx.open_files.pop();

    result.map(|()| 0)
}

fn ignore(payload: &[u8]) -> Result<usize, RuntimeError> {
    let &[arg] = payload else {
        return Err(FormatError::InvalidIgnoreByte(payload.len()).into());
    };
    let count = i16::from(arg) - i16::from(OPCODE_COUNT);
    if count < 0 {
        return Err(StateError::NegativeIgnoreCount(count).into());
    }
    Ok(count as usize)
}
