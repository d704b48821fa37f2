//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a file that must not already exist and write content to it.
///
/// The open uses `create_new`, so the existence check and the write are a
/// single atomic step per path: two concurrent callers can never both
/// succeed on the same target.
pub fn create_new_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a directory and all missing parents.
pub fn ensure_dir(path: &Path, operation: &str) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "test content").unwrap();

        let content = read_file(&path, "test read").unwrap();
        assert_eq!(content, "test content");
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn create_new_file_writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        create_new_file(&path, "content", "test write").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn create_new_file_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();

        let result = create_new_file(&path, "replacement", "test write");
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn ensure_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_dir(&nested, "test mkdir").unwrap();
        assert!(nested.is_dir());
    }
}
