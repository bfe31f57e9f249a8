//! Role/channel registry repository.
//!
//! Tracks the temporary role and channel created for each nudge batch until they are
//! cleaned up. Unlike the nudge log, the registry shrinks: cleanup rewrites the file with
//! only the entries that have not expired yet.

use std::path::Path;

use crate::{error::store::StoreError, model::nudge::RoleChannelRecord};

use super::{read_records, write_records};

/// Repository for the role/channel registry.
pub struct RoleChannelRepository<'a> {
    /// Path of the CSV file.
    path: &'a Path,
}

impl<'a> RoleChannelRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the registry CSV file
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Reads every registry entry in file order.
    ///
    /// # Returns
    /// - `Ok(Vec<RoleChannelRecord>)` - All entries (empty for an empty file)
    /// - `Err(StoreError::Io)` - File missing or unreadable
    /// - `Err(StoreError::Csv)` - A row does not match the record layout
    pub fn get_all(&self) -> Result<Vec<RoleChannelRecord>, StoreError> {
        read_records(self.path)
    }

    /// Appends one entry after the existing rows, creating the file if needed.
    pub fn append(&self, record: &RoleChannelRecord) -> Result<(), StoreError> {
        write_records(self.path, std::slice::from_ref(record), true)
    }

    /// Replaces the whole registry with `records`.
    pub fn replace_all(&self, records: &[RoleChannelRecord]) -> Result<(), StoreError> {
        write_records(self.path, records, false)
    }
}
