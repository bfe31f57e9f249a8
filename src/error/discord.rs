use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Non-success response from the Discord REST API.
///
/// Carries everything needed to diagnose the failure from the operator's log: the
/// request line and the status and body Discord answered with.
#[derive(Error, Debug)]
#[error("Discord API request {method} {endpoint} failed with {status}: {body}")]
pub struct DiscordApiError {
    /// HTTP method of the failed request
    pub method: Method,
    /// Endpoint path relative to the API base URL
    pub endpoint: String,
    /// Status code returned by Discord
    pub status: StatusCode,
    /// Raw response body, usually a JSON error object
    pub body: String,
}

impl DiscordApiError {
    /// Whether Discord reported the target resource as already gone.
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}
