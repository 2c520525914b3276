//! Where `OpenFile` reads included streams from.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves include names to stream bytes.
pub trait ByteSource {
    /// Read the whole stream named `name`.
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Stable identity of `name`, used for include cycle detection.
    ///
    /// Two names that refer to the same stream must map to the same id.
    fn canonical(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Reads includes from the file system.
///
/// Relative names resolve against the root directory, or the process working
/// directory when no root is set.
#[derive(Clone, Debug, Default)]
pub struct FsSource {
    root: Option<PathBuf>,
}

impl FsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(name),
            None => Path::new(name).to_path_buf(),
        }
    }
}

impl ByteSource for FsSource {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(name))
    }

    fn canonical(&self, name: &str) -> String {
        let path = self.resolve(name);
        fs::canonicalize(&path)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

/// In-memory streams keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), bytes.into());
    }
}

impl ByteSource for MemorySource {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no stream named `{name}`"))
        })
    }
}
