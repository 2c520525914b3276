//! Input file resolution and interpreter setup shared by the commands.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use argon_vm::Interpreter;

/// File decoded when the prompt gets no answer.
pub const DEFAULT_FILE: &str = "data.argon";

/// The given path, or one read from stdin after a prompt on stderr.
pub fn resolve_path(path: Option<PathBuf>) -> PathBuf {
    match path {
        Some(path) => path,
        None => prompt_path(&mut io::stdin().lock(), &mut io::stderr()),
    }
}

pub fn prompt_path(input: &mut impl BufRead, prompt: &mut impl Write) -> PathBuf {
    // A failed prompt write is not worth aborting over; the read still works.
    let _ = write!(prompt, "file: ");
    let _ = prompt.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) if !line.trim().is_empty() => PathBuf::from(line.trim()),
        _ => PathBuf::from(DEFAULT_FILE),
    }
}

pub fn interpreter(sticky: bool, include_depth: u32) -> Interpreter {
    Interpreter::builder()
        .sticky_handler(sticky)
        .include_depth(include_depth)
        .build()
}

/// Name handed to the byte source for the root file.
pub fn source_name(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
