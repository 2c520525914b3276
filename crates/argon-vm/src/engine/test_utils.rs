use argon_bytecode::{Opcode, TypeDescriptor, Value, alphabet};

use super::commands::{Handler, Marker};
use super::error::RuntimeError;
use super::interpreter::Interpreter;
use super::source::MemorySource;
use super::store::{Table, TableStore};
use super::trace::Tracer;

pub const TEXT: u8 = 103;
pub const INTEGER: u8 = 104;

/// Byte stream builder for tests.
#[derive(Default)]
pub struct Stream {
    bytes: Vec<u8>,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn op(mut self, op: Opcode) -> Self {
        self.bytes.push(op.to_byte());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.bytes
            .extend(alphabet::encode(text).expect("test text must be in the alphabet"));
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn int(self, n: i32) -> Self {
        self.raw(&n.to_le_bytes())
    }

    /// `CreateTable <name> End`
    pub fn table(self, name: &str) -> Self {
        self.op(Opcode::CreateTable).text(name).op(Opcode::End)
    }

    /// `AddField <name> Split AddField <code> End`
    pub fn field(self, name: &str, code: u8) -> Self {
        self.op(Opcode::AddField)
            .text(name)
            .op(Opcode::Split)
            .op(Opcode::AddField)
            .raw(&[code])
            .op(Opcode::End)
    }

    /// `OpenFile <name> End`
    pub fn include(self, name: &str) -> Self {
        self.op(Opcode::OpenFile).text(name).op(Opcode::End)
    }

    /// A `(Text, Integer)` row in the default (non-sticky) layout.
    pub fn text_int_row(self, text: &str, n: i32) -> Self {
        self.op(Opcode::AddRecord)
            .text(text)
            .op(Opcode::Split)
            .int(n)
            .op(Opcode::AddRecord)
            .op(Opcode::End)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// `users(name: Text, age: Integer)` with rows `bob, 42` and `alice, 7`.
pub fn users_stream() -> Stream {
    Stream::new()
        .table("users")
        .field("name", TEXT)
        .field("age", INTEGER)
        .text_int_row("bob", 42)
        .text_int_row("alice", 7)
}

pub fn decode(bytes: &[u8]) -> (TableStore, Result<(), RuntimeError>) {
    decode_with_source(bytes, &MemorySource::new())
}

pub fn decode_with_source(
    bytes: &[u8],
    source: &MemorySource,
) -> (TableStore, Result<(), RuntimeError>) {
    let mut store = TableStore::new();
    let result = Interpreter::new().decode(bytes, source, &mut store);
    (store, result)
}

pub fn decode_ok(bytes: &[u8]) -> TableStore {
    let (store, result) = decode(bytes);
    result.expect("stream should decode");
    store
}

pub fn field_names(table: &Table) -> Vec<&str> {
    table.field_names().collect()
}

pub fn type_codes(table: &Table) -> Vec<u8> {
    table.field_types().iter().map(|t| t.code).collect()
}

pub fn text(s: &str) -> Value {
    Value::from(s)
}

/// A handler run as seen by the tracer.
#[derive(Debug, PartialEq, Eq)]
pub struct Fired {
    pub handler: Handler,
    pub field_index: usize,
    pub payload: Vec<u8>,
}

/// Tracer that records fired handlers and armed skip counts.
#[derive(Default)]
pub struct FireLog {
    pub fires: Vec<Fired>,
    pub skips: Vec<usize>,
}

impl FireLog {
    pub fn decode(bytes: &[u8]) -> (Self, TableStore, Result<(), RuntimeError>) {
        let mut log = Self::default();
        let mut store = TableStore::new();
        let result =
            Interpreter::new().decode_with(bytes, &MemorySource::new(), &mut store, &mut log);
        (log, store, result)
    }

    /// `(handler, field index)` of every fire, in order.
    pub fn handlers(&self) -> Vec<(Handler, usize)> {
        self.fires
            .iter()
            .map(|f| (f.handler, f.field_index))
            .collect()
    }
}

impl Tracer for FireLog {
    fn trace_enter_file(&mut self, _name: &str, _len: usize) {}

    fn trace_leave_file(&mut self, _name: &str) {}

    fn trace_select(&mut self, _offset: usize, _handler: Handler) {}

    fn trace_literal(&mut self, _offset: usize, _byte: u8) {}

    fn trace_protected(&mut self, _offset: usize, _byte: u8) {}

    fn trace_fire(
        &mut self,
        _offset: usize,
        _marker: Marker,
        handler: Handler,
        field_index: usize,
        payload: &[u8],
    ) {
        self.fires.push(Fired {
            handler,
            field_index,
            payload: payload.to_vec(),
        });
    }

    fn trace_skip(&mut self, count: usize) {
        self.skips.push(count);
    }

    fn trace_table(&mut self, _name: &str) {}

    fn trace_field(&mut self, _name: &str) {}

    fn trace_field_type(&mut self, _ty: TypeDescriptor) {}

    fn trace_cell(&mut self, _row: usize, _column: usize, _value: &Value) {}

    fn trace_discard(&mut self, _len: usize) {}
}
