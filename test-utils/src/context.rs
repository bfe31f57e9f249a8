use std::path::PathBuf;

use tempfile::TempDir;
use wiremock::{MockServer, Request};

use crate::error::TestError;

/// File name of the nudge log inside the temp directory.
pub const NUDGE_LOG_FILE: &str = "nudgedMembers.csv";

/// File name of the role/channel registry inside the temp directory.
pub const ROLE_CHANNEL_LOG_FILE: &str = "rolesAndChannels.csv";

/// Test context containing the mock Discord server and the record file directory.
///
/// Both live for as long as the context: the server shuts down and the directory is
/// deleted when it is dropped.
pub struct TestContext {
    /// Mock server answering Discord REST API requests.
    pub server: MockServer,

    /// Temporary directory holding the CSV record files.
    pub dir: TempDir,

    /// Guild id the mounted endpoints answer for.
    pub guild_id: u64,
}

impl TestContext {
    /// Base URL to hand to the Discord client instead of the real API.
    pub fn api_url(&self) -> String {
        self.server.uri()
    }

    /// Path of the nudge log, whether or not it was seeded.
    pub fn nudge_log_path(&self) -> PathBuf {
        self.dir.path().join(NUDGE_LOG_FILE)
    }

    /// Path of the role/channel registry, whether or not it was seeded.
    pub fn role_channel_log_path(&self) -> PathBuf {
        self.dir.path().join(ROLE_CHANNEL_LOG_FILE)
    }

    /// Raw contents of the nudge log.
    pub fn read_nudge_log(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(self.nudge_log_path())?)
    }

    /// Raw contents of the role/channel registry.
    pub fn read_role_channel_log(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(self.role_channel_log_path())?)
    }

    /// Every request the mock server received, in arrival order.
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests received with the given method and exact path (query string ignored).
    ///
    /// # Arguments
    /// - `method` - HTTP method name, e.g. `"DELETE"`
    /// - `path` - Request path, e.g. `"/channels/123"`
    pub async fn requests_to(&self, method: &str, path: &str) -> Vec<Request> {
        self.received()
            .await
            .into_iter()
            .filter(|request| request.method.as_str() == method && request.url.path() == path)
            .collect()
    }

    /// Requests received with the given method whose path starts with `prefix`.
    pub async fn requests_under(&self, method: &str, prefix: &str) -> Vec<Request> {
        self.received()
            .await
            .into_iter()
            .filter(|request| {
                request.method.as_str() == method && request.url.path().starts_with(prefix)
            })
            .collect()
    }
}
