//! Mock storage implementation for testing

use crate::platform::{
    error::StorageError,
    traits::{StorageFile, StorageInterface},
    PlatformError, Result,
};
use core::cell::RefCell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

#[derive(Debug, Default)]
struct MockStorageInner {
    /// (path, lines) pairs in creation order
    files: Vec<(String, Vec<String>)>,
    fail_opens: bool,
    fail_writes: bool,
    open_count: u32,
}

impl MockStorageInner {
    fn entry_index(&mut self, path: &str) -> usize {
        if let Some(idx) = self.files.iter().position(|(p, _)| p == path) {
            idx
        } else {
            self.files.push((path.to_string(), Vec::new()));
            self.files.len() - 1
        }
    }
}

/// Mock storage implementation
///
/// Keeps a path → lines map in memory. `open_for_write` truncates,
/// `open_for_append` keeps existing lines; both create the file when it is
/// missing. Open and write failures can be injected for testing the
/// logger's drop-the-row behavior.
///
/// Cloning a `MockStorage` yields a second handle onto the same in-memory
/// medium, so a test can keep one for inspection while a task owns the
/// other.
#[derive(Debug, Clone, Default)]
pub struct MockStorage {
    inner: Rc<RefCell<MockStorageInner>>,
}

impl MockStorage {
    /// Create a new empty mock storage medium
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent open calls fail with `StorageError::OpenFailed`
    pub fn set_fail_opens(&mut self, fail: bool) {
        self.inner.borrow_mut().fail_opens = fail;
    }

    /// Make subsequent `write_line` calls fail with `StorageError::WriteFailed`
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Get the lines of a file, or `None` if it was never created
    pub fn lines(&self, path: &str) -> Option<Vec<String>> {
        self.inner
            .borrow()
            .files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, lines)| lines.clone())
    }

    /// Number of lines in a file (0 if it was never created)
    pub fn line_count(&self, path: &str) -> usize {
        self.lines(path).map(|l| l.len()).unwrap_or(0)
    }

    /// Total number of successful open calls (for test verification)
    pub fn open_count(&self) -> u32 {
        self.inner.borrow().open_count
    }
}

/// An open file on the mock medium
///
/// Writes land in the shared map immediately; `close` is a no-op so a file
/// dropped without closing still keeps its content, matching how an SD
/// library commits on write.
#[derive(Debug)]
pub struct MockStorageFile {
    index: usize,
    inner: Rc<RefCell<MockStorageInner>>,
}

impl StorageFile for MockStorageFile {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(PlatformError::Storage(StorageError::WriteFailed));
        }
        let index = self.index;
        inner.files[index].1.push(line.to_string());
        Ok(())
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}

impl StorageInterface for MockStorage {
    type File = MockStorageFile;

    fn open_for_write(&mut self, path: &str) -> Result<Self::File> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_opens {
            return Err(PlatformError::Storage(StorageError::OpenFailed));
        }
        inner.open_count += 1;
        let index = inner.entry_index(path);
        inner.files[index].1.clear();
        drop(inner);

        Ok(MockStorageFile {
            index,
            inner: Rc::clone(&self.inner),
        })
    }

    fn open_for_append(&mut self, path: &str) -> Result<Self::File> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_opens {
            return Err(PlatformError::Storage(StorageError::OpenFailed));
        }
        inner.open_count += 1;
        let index = inner.entry_index(path);
        drop(inner);

        Ok(MockStorageFile {
            index,
            inner: Rc::clone(&self.inner),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_truncates() {
        let mut storage = MockStorage::new();

        let mut file = storage.open_for_write("/a.csv").unwrap();
        file.write_line("one").unwrap();
        file.write_line("two").unwrap();
        file.close().unwrap();
        assert_eq!(storage.line_count("/a.csv"), 2);

        // Re-opening for write starts the file over
        let mut file = storage.open_for_write("/a.csv").unwrap();
        file.write_line("three").unwrap();
        file.close().unwrap();
        assert_eq!(storage.lines("/a.csv").unwrap(), vec!["three"]);
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let mut storage = MockStorage::new();

        let mut file = storage.open_for_write("/a.csv").unwrap();
        file.write_line("header").unwrap();
        file.close().unwrap();

        let mut file = storage.open_for_append("/a.csv").unwrap();
        file.write_line("row").unwrap();
        file.close().unwrap();

        assert_eq!(storage.lines("/a.csv").unwrap(), vec!["header", "row"]);
    }

    #[test]
    fn test_append_creates_missing_file() {
        let mut storage = MockStorage::new();

        let mut file = storage.open_for_append("/new.csv").unwrap();
        file.write_line("row").unwrap();
        file.close().unwrap();

        assert_eq!(storage.lines("/new.csv").unwrap(), vec!["row"]);
    }

    #[test]
    fn test_open_failure_injection() {
        let mut storage = MockStorage::new();
        storage.set_fail_opens(true);

        assert_eq!(
            storage.open_for_append("/a.csv").err(),
            Some(PlatformError::Storage(StorageError::OpenFailed))
        );
        assert_eq!(storage.open_count(), 0);

        storage.set_fail_opens(false);
        assert!(storage.open_for_append("/a.csv").is_ok());
        assert_eq!(storage.open_count(), 1);
    }

    #[test]
    fn test_write_failure_injection() {
        let mut storage = MockStorage::new();
        let inspector = storage.clone();

        let mut file = storage.open_for_append("/a.csv").unwrap();
        storage.set_fail_writes(true);
        assert_eq!(
            file.write_line("row"),
            Err(PlatformError::Storage(StorageError::WriteFailed))
        );
        assert_eq!(inspector.line_count("/a.csv"), 0);
    }

    #[test]
    fn test_clone_shares_medium() {
        let mut storage = MockStorage::new();
        let inspector = storage.clone();

        let mut file = storage.open_for_write("/a.csv").unwrap();
        file.write_line("shared").unwrap();
        file.close().unwrap();

        assert_eq!(inspector.lines("/a.csv").unwrap(), vec!["shared"]);
    }
}
