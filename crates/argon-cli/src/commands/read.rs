//! Decode a file and print its tables.

use std::path::PathBuf;

use argon_core::Colors;
use argon_vm::{FsSource, TableStore, render_colored};

use super::input;

pub struct ReadArgs {
    pub path: Option<PathBuf>,
    pub width: Option<usize>,
    pub json: bool,
    pub sticky: bool,
    pub include_depth: u32,
    pub color: bool,
}

pub fn run(args: ReadArgs) {
    let path = input::resolve_path(args.path);
    let interpreter = input::interpreter(args.sticky, args.include_depth);

    let mut store = TableStore::new();
    let result = interpreter.decode_file(&input::source_name(&path), &FsSource::new(), &mut store);

    // Tables decoded before a failure are still printed.
    if args.json {
        match tables_json(&store) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", tables_text(&store, args.width, Colors::new(args.color)));
    }

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

pub fn tables_json(store: &TableStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store)
}

pub fn tables_text(store: &TableStore, width: Option<usize>, colors: Colors) -> String {
    store
        .tables()
        .iter()
        .map(|table| render_colored(table, width, colors))
        .collect()
}
