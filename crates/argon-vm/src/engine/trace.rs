//! Tracing infrastructure for inspecting a decoding pass.
//!
//! The interpreter is generic over [`Tracer`]. With [`NoopTracer`] every hook
//! is an empty `#[inline(always)]` function and the calls compile away, so
//! plain decoding pays nothing for instrumentation.
//!
//! Tracing-only state (which file is open, how wide its offsets are) lives in
//! the tracer, not in the interpreter.

use argon_bytecode::format::{LineBuilder, hex_bytes, quote_text};
use argon_bytecode::{TypeDescriptor, Value, alphabet};
use argon_core::Colors;
use argon_core::text::width_for_count;

use super::commands::{Handler, Marker};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Default: fired handlers and their effects on the store.
    #[default]
    Default,
    /// Verbose (-v): also handler selections.
    Verbose,
    /// Very verbose (-vv): every byte.
    VeryVerbose,
}

/// Hooks called by the interpreter while it decodes.
///
/// - `trace_enter_file` / `trace_leave_file` - around every pass, including includes
/// - `trace_select` - a handler opcode was read
/// - `trace_literal` - a byte was buffered as payload
/// - `trace_protected` - a byte was buffered while the ignore count was armed
/// - `trace_fire` - a marker is about to run the pending handler
/// - `trace_skip` - the handler armed the ignore count
/// - `trace_table`, `trace_field`, `trace_field_type`, `trace_cell` - store changes
/// - `trace_discard` - the stream ended inside an unterminated payload
pub trait Tracer {
    fn trace_enter_file(&mut self, name: &str, len: usize);

    fn trace_leave_file(&mut self, name: &str);

    fn trace_select(&mut self, offset: usize, handler: Handler);

    fn trace_literal(&mut self, offset: usize, byte: u8);

    fn trace_protected(&mut self, offset: usize, byte: u8);

    fn trace_fire(
        &mut self,
        offset: usize,
        marker: Marker,
        handler: Handler,
        field_index: usize,
        payload: &[u8],
    );

    fn trace_skip(&mut self, count: usize);

    fn trace_table(&mut self, name: &str);

    fn trace_field(&mut self, name: &str);

    /// The resolved type of the field just defined.
    fn trace_field_type(&mut self, ty: TypeDescriptor);

    fn trace_cell(&mut self, row: usize, column: usize, value: &Value);

    fn trace_discard(&mut self, len: usize);
}

/// No-op tracer that gets optimized away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter_file(&mut self, _name: &str, _len: usize) {}

    #[inline(always)]
    fn trace_leave_file(&mut self, _name: &str) {}

    #[inline(always)]
    fn trace_select(&mut self, _offset: usize, _handler: Handler) {}

    #[inline(always)]
    fn trace_literal(&mut self, _offset: usize, _byte: u8) {}

    #[inline(always)]
    fn trace_protected(&mut self, _offset: usize, _byte: u8) {}

    #[inline(always)]
    fn trace_fire(
        &mut self,
        _offset: usize,
        _marker: Marker,
        _handler: Handler,
        _field_index: usize,
        _payload: &[u8],
    ) {
    }

    #[inline(always)]
    fn trace_skip(&mut self, _count: usize) {}

    #[inline(always)]
    fn trace_table(&mut self, _name: &str) {}

    #[inline(always)]
    fn trace_field(&mut self, _name: &str) {}

    #[inline(always)]
    fn trace_field_type(&mut self, _ty: TypeDescriptor) {}

    #[inline(always)]
    fn trace_cell(&mut self, _row: usize, _column: usize, _value: &Value) {}

    #[inline(always)]
    fn trace_discard(&mut self, _len: usize) {}
}

/// Tracer that collects a readable log of the pass.
///
/// Each file opens with a `name:` label. Byte-level lines carry the offset
/// within the current file; store changes are indented sub-lines.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Open files with their offset column width, outermost first.
    files: Vec<(String, usize)>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print all trace lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn builder(&self) -> LineBuilder {
        LineBuilder::new(self.files.last().map_or(1, |(_, w)| *w))
    }

    fn push_label(&mut self, name: &str) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let c = self.colors;
        self.lines.push(format!("{}{}{}:", c.blue, name, c.reset));
    }

    fn add_line(&mut self, offset: usize, content: &str) {
        let prefix = self.builder().prefix(offset, &self.colors);
        self.lines.push(format!("{prefix}{content}"));
    }

    fn add_subline(&mut self, content: &str) {
        let prefix = self.builder().subline_prefix();
        self.lines.push(format!("{prefix}  {content}"));
    }

    /// Payload as quoted text when it is all literal characters, hex otherwise.
    fn format_payload(&self, payload: &[u8]) -> String {
        let c = self.colors;
        match alphabet::decode(payload) {
            Ok(text) => format!("{}{}{}", c.green, quote_text(&text), c.reset),
            Err(_) => format!("{}[{}]{}", c.dim, hex_bytes(payload), c.reset),
        }
    }

    fn format_value(&self, value: &Value) -> String {
        let c = self.colors;
        let text = match value {
            Value::Text(s) => quote_text(s),
            Value::Integer(n) => n.to_string(),
        };
        format!("{}{}{}", c.green, text, c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_enter_file(&mut self, name: &str, len: usize) {
        self.push_label(name);
        self.files.push((name.to_string(), width_for_count(len)));
    }

    fn trace_leave_file(&mut self, _name: &str) {
        self.files.pop();
        // Resuming the including file: repeat its label so offsets stay unambiguous.
        if let Some((outer, _)) = self.files.last() {
            let outer = outer.clone();
            self.push_label(&outer);
        }
    }

    fn trace_select(&mut self, offset: usize, handler: Handler) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let content = format!("{}{}{}", c.blue, handler.name(), c.reset);
        self.add_line(offset, &content);
    }

    fn trace_literal(&mut self, offset: usize, byte: u8) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let content = match alphabet::byte_to_char(byte) {
            Ok(ch) => format!("{}{}{}", c.green, quote_text(&ch.to_string()), c.reset),
            Err(_) => format!("{}#{}{}", c.dim, byte, c.reset),
        };
        self.add_line(offset, &content);
    }

    fn trace_protected(&mut self, offset: usize, byte: u8) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let content = format!("{}raw {:02x}{}", c.dim, byte, c.reset);
        self.add_line(offset, &content);
    }

    fn trace_fire(
        &mut self,
        offset: usize,
        marker: Marker,
        handler: Handler,
        field_index: usize,
        payload: &[u8],
    ) {
        let c = self.colors;
        let content = format!(
            "{:<5} {}{}{} #{} {}",
            marker.name(),
            c.blue,
            handler.name(),
            c.reset,
            field_index,
            self.format_payload(payload),
        );
        self.add_line(offset, &content);
    }

    fn trace_skip(&mut self, count: usize) {
        self.add_subline(&format!("skip {count}"));
    }

    fn trace_table(&mut self, name: &str) {
        let c = self.colors;
        self.add_subline(&format!("table {}{}{}", c.blue, name, c.reset));
    }

    fn trace_field(&mut self, name: &str) {
        self.add_subline(&format!("field {}", quote_text(name)));
    }

    fn trace_field_type(&mut self, ty: TypeDescriptor) {
        self.add_subline(&format!("type {} ({})", ty.name(), ty.code));
    }

    fn trace_cell(&mut self, row: usize, column: usize, value: &Value) {
        let value = self.format_value(value);
        self.add_subline(&format!("cell {row}:{column} {value}"));
    }

    fn trace_discard(&mut self, len: usize) {
        self.add_subline(&format!("discard {len} trailing bytes"));
    }
}
