//! Nudge log repository.
//!
//! The nudge log is append-only history: rows are added when members are nudged and are
//! never rewritten, so it doubles as the set of members that must not be nudged again.

use std::{collections::HashSet, path::Path};

use serenity::all::UserId;

use crate::{error::store::StoreError, model::nudge::NudgeRecord};

use super::{read_records, write_records};

/// Repository for the append-only nudge log.
pub struct NudgedMemberRepository<'a> {
    /// Path of the CSV file.
    path: &'a Path,
}

impl<'a> NudgedMemberRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the nudge log CSV file
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Reads every nudge record in file order.
    ///
    /// # Returns
    /// - `Ok(Vec<NudgeRecord>)` - All records (empty for an empty file)
    /// - `Err(StoreError::Io)` - File missing or unreadable
    /// - `Err(StoreError::Csv)` - A row does not match the record layout
    pub fn get_all(&self) -> Result<Vec<NudgeRecord>, StoreError> {
        read_records(self.path)
    }

    /// Ids of every member that has ever been nudged.
    pub fn get_nudged_ids(&self) -> Result<HashSet<UserId>, StoreError> {
        Ok(self
            .get_all()?
            .into_iter()
            .map(|record| record.member_id)
            .collect())
    }

    /// Appends records after the existing rows, creating the file if needed.
    ///
    /// Existing rows are never modified.
    pub fn append(&self, records: &[NudgeRecord]) -> Result<(), StoreError> {
        write_records(self.path, records, true)
    }
}
