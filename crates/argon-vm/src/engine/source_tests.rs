use std::fs;
use std::io;

use super::interpreter::Interpreter;
use super::source::{ByteSource, FsSource, MemorySource};
use super::store::TableStore;
use super::test_utils::Stream;

#[test]
fn memory_source_reads_inserted_files() {
    let mut source = MemorySource::new().with_file("a", vec![1, 2]);
    source.insert("b", [3]);

    assert_eq!(source.read("a").unwrap(), [1, 2]);
    assert_eq!(source.read("b").unwrap(), [3]);
    assert_eq!(
        source.read("c").unwrap_err().kind(),
        io::ErrorKind::NotFound
    );
    assert_eq!(source.canonical("a"), "a");
}

#[test]
fn fs_source_resolves_against_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("t.bin"), [9, 8]).unwrap();
    let source = FsSource::with_root(dir.path());

    assert_eq!(source.read("t.bin").unwrap(), [9, 8]);
    assert!(source.read("missing.bin").is_err());
}

#[test]
fn fs_source_canonicalizes_equivalent_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("t.bin"), b"").unwrap();
    let source = FsSource::with_root(dir.path());

    assert_eq!(source.canonical("t.bin"), source.canonical("sub/../t.bin"));
}

#[test]
fn open_file_follows_the_file_system() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("inner.bin"),
        Stream::new().table("inner").build(),
    )
    .unwrap();
    fs::write(
        dir.path().join("main.bin"),
        Stream::new().include("inner.bin").table("outer").build(),
    )
    .unwrap();

    let source = FsSource::with_root(dir.path());
    let mut store = TableStore::new();
    Interpreter::new()
        .decode_file("main.bin", &source, &mut store)
        .unwrap();

    let names: Vec<_> = store.tables().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["inner", "outer"]);
}

#[test]
fn file_system_cycle_through_other_spelling_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(
        dir.path().join("loop.bin"),
        Stream::new().include("sub/../loop.bin").build(),
    )
    .unwrap();

    let source = FsSource::with_root(dir.path());
    let mut store = TableStore::new();
    let err = Interpreter::new()
        .decode_file("loop.bin", &source, &mut store)
        .unwrap_err();

    assert!(err.to_string().ends_with("include cycle: `sub/../loop.bin` is already open"));
}
