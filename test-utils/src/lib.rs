//! Slowroller Test Utils
//!
//! Provides shared testing utilities for the nudge job. Tests run against a `wiremock`
//! server standing in for the Discord REST API, with the CSV record files placed in a
//! temporary directory that is removed when the test ends.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder mounting Discord endpoints and seeding record files
//! - **TestContext**: The running mock server, temp directory and request inspection helpers
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Guild member JSON payloads with sensible defaults
//! - **fixture**: CSV rows for seeding record files
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::member::MemberFactory};
//!
//! #[tokio::test]
//! async fn test_nudge_run() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_members(vec![MemberFactory::new().joined_days_ago(5).build()])
//!         .with_all_endpoints()
//!         .with_empty_record_files()
//!         .build()
//!         .await?;
//!
//!     let api_url = test.api_url();
//!     // Run code against the mock server...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

/// Guild id used by the builder unless overridden.
pub const TEST_GUILD_ID: u64 = 900_000_000_000_000_001;

/// Bot user id used for private channel overwrites in tests.
pub const TEST_BOT_ID: u64 = 900_000_000_000_000_002;

/// Bot token the mock server expects in the authorization header.
pub const TEST_BOT_TOKEN: &str = "test-bot-token";

/// Page size of the member listing endpoint.
pub const MEMBERS_PAGE_LIMIT: usize = 1000;
