//! Trace how a file is decoded, for debugging streams.

use std::path::PathBuf;

use argon_core::Colors;
use argon_vm::{FsSource, PrintTracer, TableStore, Verbosity};

use super::input;
use super::read::tables_text;

pub struct TraceArgs {
    pub path: Option<PathBuf>,
    pub width: Option<usize>,
    pub verbosity: Verbosity,
    pub sticky: bool,
    pub include_depth: u32,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let path = input::resolve_path(args.path);
    let interpreter = input::interpreter(args.sticky, args.include_depth);
    let colors = Colors::new(args.color);

    let mut store = TableStore::new();
    let mut tracer = PrintTracer::new(args.verbosity, colors);
    let result = interpreter.decode_file_with(
        &input::source_name(&path),
        &FsSource::new(),
        &mut store,
        &mut tracer,
    );
    tracer.print();

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    println!("{}---{}", colors.dim, colors.reset);
    print!("{}", tables_text(&store, args.width, colors));
}
