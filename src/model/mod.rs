//! Domain models shared by the Discord client, the record repositories and the
//! nudge service.
//!
//! `discord` holds the wire shapes exchanged with the REST API; `nudge` holds the
//! persisted records and the policy that decides who gets nudged, kicked or cleaned up.

pub mod discord;
pub mod nudge;
