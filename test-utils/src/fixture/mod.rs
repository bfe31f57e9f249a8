//! Test fixtures providing CSV rows for seeding record files.
//!
//! Unlike factories, fixtures produce file content rather than API payloads. Rows match
//! the headerless column layout of the nudge log and the role/channel registry.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let row = fixture::record::role_channel_row(500, 600, Utc::now() - Duration::days(4));
//! ```

pub mod record;

pub use record::{nudge_row, role_channel_row};
