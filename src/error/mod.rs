//! Error types for the nudge job.
//!
//! `AppError` is the top-level error returned by every fallible operation. It wraps the
//! domain-specific errors below so callers can use `?` freely, and `main` logs whatever
//! reaches it before exiting with a failure status.

pub mod config;
pub mod discord;
pub mod internal;
pub mod store;

use thiserror::Error;

use crate::error::{
    config::ConfigError, discord::DiscordApiError, internal::InternalError, store::StoreError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Every variant is fatal to the
/// run except a `DiscordApiErr` raised while deleting expired roles and channels, which
/// the cleanup pass logs and swallows.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord answered with a non-success status.
    #[error(transparent)]
    DiscordApiErr(#[from] DiscordApiError),

    /// Reading or writing one of the record files failed.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Internal conversion failure indicating bad input data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Transport-level HTTP failure from reqwest (connection, TLS, decoding).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Request body could not be serialized.
    #[error(transparent)]
    SerializeErr(#[from] serde_json::Error),

    /// Header value contained characters not allowed in HTTP headers.
    #[error(transparent)]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Input rejected before any request was made.
    ///
    /// # Fields
    /// - Message describing what was invalid
    #[error("{0}")]
    BadRequest(String),
}
