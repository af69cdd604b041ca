//! Directory access abstraction.
//!
//! The core never touches `std::fs` directly: it consumes a
//! [`DirectorySource`], which supplies the list of candidate files and a
//! byte stream per file. [`OsDirectory`] backs it with the real filesystem;
//! [`MemoryDirectory`] is an in-memory substitute for tests and embedding.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Cursor, Read};
use std::path::Path;

/// One directory entry as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Base filename, without any directory component.
    pub name: String,
    /// Whether the entry is a directory (directories are always skipped).
    pub is_dir: bool,
}

/// Capability to list a directory and open files for reading.
///
/// This is the sole boundary between the core and the real filesystem.
pub trait DirectorySource {
    /// List the entries of `dir`.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<SourceEntry>>;

    /// Open `path` for reading.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;
}

/// [`DirectorySource`] backed by the operating system filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirectory;

impl DirectorySource for OsDirectory {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            entries.push(SourceEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        Ok(entries)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(fs::File::open(path)?))
    }
}

/// In-memory [`DirectorySource`] mapping filenames to file contents.
///
/// Lookup ignores any directory component of the opened path, so the same
/// fixture works regardless of the configured target directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }
}

impl DirectorySource for MemoryDirectory {
    fn list_entries(&self, _dir: &Path) -> io::Result<Vec<SourceEntry>> {
        Ok(self
            .files
            .keys()
            .map(|name| SourceEntry {
                name: name.clone(),
                is_dir: false,
            })
            .collect())
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match self.files.get(&base) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", base),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_memory_directory_lists_files() {
        let source = MemoryDirectory::new()
            .with_file("b.csv", "x")
            .with_file("a.csv", "y");

        let entries = source.list_entries(Path::new(".")).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
        assert!(entries.iter().all(|e| !e.is_dir));
    }

    #[test]
    fn test_memory_directory_open_strips_directory() {
        let source = MemoryDirectory::new().with_file("a.csv", "content");

        let mut buf = String::new();
        source
            .open(&PathBuf::from("some/dir/a.csv"))
            .unwrap()
            .read_to_string(&mut buf)
            .unwrap();
        assert_eq!(buf, "content");
    }

    #[test]
    fn test_memory_directory_missing_file() {
        let source = MemoryDirectory::new();
        let Err(err) = source.open(Path::new("nope.csv")) else {
            panic!("expected open to fail for a missing file");
        };
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("nope.csv"));
    }
}
