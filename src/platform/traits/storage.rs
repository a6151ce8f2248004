//! Storage interface trait
//!
//! Line-oriented contract for the non-volatile log medium. The logger task
//! re-opens the log file around every row, so the handle type is cheap and
//! short-lived by design.

use crate::platform::Result;

/// An open file on the storage medium
///
/// Handles are single-use: the logger writes one header or one row and then
/// closes. `close` consumes the handle so a closed file cannot be written.
pub trait StorageFile {
    /// Append one line of text, terminating it with a newline
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Storage` if the medium rejects the write.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Flush and close the file
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Storage` if final data could not be committed.
    fn close(self) -> Result<()>;
}

/// Storage interface trait
///
/// Platform implementations provide this for the datalogger medium
/// (typically an SD card).
pub trait StorageInterface {
    /// Handle type for an open file
    type File: StorageFile;

    /// Open a file for writing from the start
    ///
    /// Creates the file if it does not exist and truncates it if it does.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Storage` if the file cannot be created or
    /// the medium is not present.
    fn open_for_write(&mut self, path: &str) -> Result<Self::File>;

    /// Open a file for appending
    ///
    /// Creates the file if it does not exist; existing content is kept and
    /// writes land at the end.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Storage` if the file cannot be opened or
    /// the medium is not present.
    fn open_for_append(&mut self, path: &str) -> Result<Self::File>;
}
