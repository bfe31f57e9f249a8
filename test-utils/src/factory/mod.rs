//! Factory methods for creating Discord API payloads.
//!
//! Factories produce `serde_json::Value` payloads shaped like Discord's responses, with
//! unique ids and sensible defaults, for serving from the mock server.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults: human, no roles, joined 10 days ago
//! let member = factory::create_member();
//!
//! // Customize
//! let bot = factory::member::MemberFactory::new()
//!     .username("Helper")
//!     .bot(true)
//!     .joined_days_ago(40)
//!     .build();
//! ```

pub mod helpers;
pub mod member;

pub use member::{create_member, create_members};
