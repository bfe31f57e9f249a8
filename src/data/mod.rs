//! Record repository layer backed by headerless CSV files.
//!
//! Each repository owns one file and converts between CSV rows and the record models in
//! `model::nudge`. The helpers below hold the shared file handling so both repositories
//! read and write rows the same way.

pub mod nudged_member;
pub mod role_channel;

#[cfg(test)]
mod test;

pub use nudged_member::NudgedMemberRepository;
pub use role_channel::RoleChannelRepository;

use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::Path,
};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::store::StoreError;

/// Columns of every row in both record files.
const RECORD_COLUMNS: usize = 4;

/// Reads every row of `path`; a missing file is an error.
///
/// Rows must have exactly `RECORD_COLUMNS` fields. Extra trailing fields would otherwise
/// be ignored by deserialization, hiding a row fused onto its predecessor.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let csv_error = |source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;

        if row.len() != RECORD_COLUMNS {
            return Err(StoreError::ColumnCount {
                path: path.to_path_buf(),
                line: row.position().map_or(0, |position| position.line()),
                expected: RECORD_COLUMNS,
                found: row.len(),
            });
        }

        records.push(row.deserialize(None).map_err(csv_error)?);
    }

    Ok(records)
}

/// Writes `records` to `path`, either after the existing rows or replacing them.
fn write_records<T: Serialize>(path: &Path, records: &[T], append: bool) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_error = |source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(io_error)?;

    // Appended rows must start on their own line
    if append && lacks_trailing_newline(&mut file).map_err(io_error)? {
        file.write_all(b"\n").map_err(io_error)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    for record in records {
        writer.serialize(record).map_err(csv_error)?;
    }

    writer.flush().map_err(io_error)
}

/// Whether a non-empty file's last byte is something other than `\n`.
fn lacks_trailing_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;

    Ok(last[0] != b'\n')
}
