use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the CSV record files.
///
/// These are never recovered from: a missing or corrupted record file stops the job
/// rather than losing the history used to avoid nudging a member twice.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The file could not be opened or written.
    #[error("Failed to access record file {}: {source}", .path.display())]
    Io {
        /// Path of the record file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row does not have the record file's column count, e.g. two rows fused by a
    /// missing line break.
    #[error("Malformed record on line {line} of {}: expected {expected} columns, found {found}", .path.display())]
    ColumnCount {
        /// Path of the record file
        path: PathBuf,
        /// 1-based line the row starts on
        line: u64,
        /// Columns every row must have
        expected: usize,
        /// Columns the row actually has
        found: usize,
    },

    /// A row could not be encoded or decoded.
    #[error("Malformed record in {}: {source}", .path.display())]
    Csv {
        /// Path of the record file
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
