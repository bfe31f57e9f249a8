use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, path_regex, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

use crate::{
    context::TestContext, error::TestError, MEMBERS_PAGE_LIMIT, TEST_GUILD_ID,
};

/// Discord endpoint the builder mounts on the mock server.
enum Endpoint {
    Members(Vec<Value>),
    CreateRole { role_id: u64, name: String },
    CreateChannel { channel_id: u64, name: String },
    CreateMessage { message_id: u64 },
    AddRole,
    DeleteRole,
    DeleteChannel,
    RemoveMember,
    Failing {
        method: &'static str,
        path: String,
        status: u16,
    },
}

/// Builder for creating test contexts with a mock Discord API and seeded record files.
///
/// Endpoints answer for a single guild (`TEST_GUILD_ID` unless overridden). Record files
/// are only created when seeded, so tests can exercise a missing file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_members(members)
///     .with_all_endpoints()
///     .with_role_channel_rows(vec![row])
///     .with_nudge_rows(vec![])
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    guild_id: u64,
    endpoints: Vec<Endpoint>,
    nudge_rows: Option<Vec<String>>,
    role_channel_rows: Option<Vec<String>>,
}

impl TestBuilder {
    /// Creates a new builder with no endpoints mounted and no record files.
    pub fn new() -> Self {
        Self {
            guild_id: TEST_GUILD_ID,
            endpoints: Vec::new(),
            nudge_rows: None,
            role_channel_rows: None,
        }
    }

    /// Overrides the guild id endpoints answer for.
    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Serves `members` from the member listing endpoint.
    ///
    /// Members are split into pages of `MEMBERS_PAGE_LIMIT`. Each page after the first
    /// only answers when the `after` cursor equals the highest user id of the previous
    /// page. When the member count is a multiple of the page size (including zero), a
    /// trailing empty page is served so the listing can terminate.
    ///
    /// Members must be supplied in ascending id order, as Discord returns them.
    pub fn with_members(mut self, members: Vec<Value>) -> Self {
        self.endpoints.push(Endpoint::Members(members));
        self
    }

    /// Answers role creation with a role of the given id and name.
    pub fn with_created_role(mut self, role_id: u64, name: impl Into<String>) -> Self {
        self.endpoints.push(Endpoint::CreateRole {
            role_id,
            name: name.into(),
        });
        self
    }

    /// Answers channel creation with a channel of the given id and name.
    pub fn with_created_channel(mut self, channel_id: u64, name: impl Into<String>) -> Self {
        self.endpoints.push(Endpoint::CreateChannel {
            channel_id,
            name: name.into(),
        });
        self
    }

    /// Answers message posting in any channel with a message of the given id.
    pub fn with_created_message(mut self, message_id: u64) -> Self {
        self.endpoints.push(Endpoint::CreateMessage { message_id });
        self
    }

    /// Answers role assignment for any member and role with `204 No Content`.
    pub fn with_role_assignment(mut self) -> Self {
        self.endpoints.push(Endpoint::AddRole);
        self
    }

    /// Answers role deletion for any role with `204 No Content`.
    pub fn with_role_deletion(mut self) -> Self {
        self.endpoints.push(Endpoint::DeleteRole);
        self
    }

    /// Answers channel deletion for any channel with `200 OK`.
    pub fn with_channel_deletion(mut self) -> Self {
        self.endpoints.push(Endpoint::DeleteChannel);
        self
    }

    /// Answers member removal for any member with `204 No Content`.
    pub fn with_member_removal(mut self) -> Self {
        self.endpoints.push(Endpoint::RemoveMember);
        self
    }

    /// Mounts every write endpoint the nudge job uses with default ids.
    ///
    /// Created role id is `500`, channel id `600`, message id `700`.
    pub fn with_all_endpoints(self) -> Self {
        self.with_created_role(500, "Slow Roller")
            .with_created_channel(600, "slow-rollers")
            .with_created_message(700)
            .with_role_assignment()
            .with_role_deletion()
            .with_channel_deletion()
            .with_member_removal()
    }

    /// Makes one exact request path fail with `status` and a Discord-style error body.
    ///
    /// Takes precedence over any wildcard endpoint matching the same request.
    pub fn with_failure(mut self, method: &'static str, path: impl Into<String>, status: u16) -> Self {
        self.endpoints.push(Endpoint::Failing {
            method,
            path: path.into(),
            status,
        });
        self
    }

    /// Seeds the nudge log with the given CSV rows.
    pub fn with_nudge_rows(mut self, rows: Vec<String>) -> Self {
        self.nudge_rows = Some(rows);
        self
    }

    /// Seeds the role/channel registry with the given CSV rows.
    pub fn with_role_channel_rows(mut self, rows: Vec<String>) -> Self {
        self.role_channel_rows = Some(rows);
        self
    }

    /// Creates both record files empty.
    pub fn with_empty_record_files(self) -> Self {
        self.with_nudge_rows(Vec::new())
            .with_role_channel_rows(Vec::new())
    }

    /// Starts the mock server, mounts the configured endpoints and writes record files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running server and seeded directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub async fn build(self) -> Result<TestContext, TestError> {
        let server = MockServer::start().await;
        let dir = TempDir::new()?;

        for endpoint in self.endpoints {
            mount(&server, self.guild_id, endpoint).await;
        }

        let test = TestContext {
            server,
            dir,
            guild_id: self.guild_id,
        };

        if let Some(rows) = self.nudge_rows {
            std::fs::write(test.nudge_log_path(), rows.concat())?;
        }
        if let Some(rows) = self.role_channel_rows {
            std::fs::write(test.role_channel_log_path(), rows.concat())?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn mount(server: &MockServer, guild_id: u64, endpoint: Endpoint) {
    match endpoint {
        Endpoint::Members(members) => mount_member_pages(server, guild_id, members).await,
        Endpoint::CreateRole { role_id, name } => {
            Mock::given(method("POST"))
                .and(path(format!("/guilds/{}/roles", guild_id)))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "id": role_id.to_string(),
                    "name": name,
                    "color": 0,
                    "hoist": false,
                    "position": 1,
                    "permissions": "0",
                    "managed": false,
                    "mentionable": true
                })))
                .mount(server)
                .await
        }
        Endpoint::CreateChannel { channel_id, name } => {
            Mock::given(method("POST"))
                .and(path(format!("/guilds/{}/channels", guild_id)))
                .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                    "id": channel_id.to_string(),
                    "type": 0,
                    "guild_id": guild_id.to_string(),
                    "name": name,
                    "position": 0,
                    "permission_overwrites": []
                })))
                .mount(server)
                .await
        }
        Endpoint::CreateMessage { message_id } => {
            Mock::given(method("POST"))
                .and(path_regex(r"^/channels/\d+/messages$"))
                .respond_with(move |request: &Request| {
                    let channel_id = request
                        .url
                        .path_segments()
                        .and_then(|mut segments| segments.nth(1))
                        .unwrap_or_default()
                        .to_string();

                    ResponseTemplate::new(200).set_body_json(json!({
                        "id": message_id.to_string(),
                        "channel_id": channel_id,
                        "content": "",
                        "type": 0
                    }))
                })
                .mount(server)
                .await
        }
        Endpoint::AddRole => {
            Mock::given(method("PUT"))
                .and(path_regex(format!(r"^/guilds/{}/members/\d+/roles/\d+$", guild_id)))
                .respond_with(ResponseTemplate::new(204))
                .mount(server)
                .await
        }
        Endpoint::DeleteRole => {
            Mock::given(method("DELETE"))
                .and(path_regex(format!(r"^/guilds/{}/roles/\d+$", guild_id)))
                .respond_with(ResponseTemplate::new(204))
                .mount(server)
                .await
        }
        Endpoint::DeleteChannel => {
            Mock::given(method("DELETE"))
                .and(path_regex(r"^/channels/\d+$"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "type": 0 })))
                .mount(server)
                .await
        }
        Endpoint::RemoveMember => {
            Mock::given(method("DELETE"))
                .and(path_regex(format!(r"^/guilds/{}/members/\d+$", guild_id)))
                .respond_with(ResponseTemplate::new(204))
                .mount(server)
                .await
        }
        Endpoint::Failing {
            method: failing_method,
            path: failing_path,
            status,
        } => {
            Mock::given(method(failing_method))
                .and(path(failing_path))
                .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                    "message": "Unknown Channel",
                    "code": 10003
                })))
                .with_priority(1)
                .mount(server)
                .await
        }
    }
}

/// Mounts one mock per member page, each keyed on the `after` cursor it expects.
async fn mount_member_pages(server: &MockServer, guild_id: u64, members: Vec<Value>) {
    let mut pages: Vec<Vec<Value>> = members
        .chunks(MEMBERS_PAGE_LIMIT)
        .map(|page| page.to_vec())
        .collect();
    if members.len() % MEMBERS_PAGE_LIMIT == 0 {
        pages.push(Vec::new());
    }

    let mut after: Option<u64> = None;
    for page in pages {
        let mut mock = Mock::given(method("GET"))
            .and(path(format!("/guilds/{}/members", guild_id)))
            .and(query_param("limit", MEMBERS_PAGE_LIMIT.to_string()));

        // The first page has no cursor, so it sits behind the cursor-specific mocks
        let priority = match after {
            Some(after) => {
                mock = mock.and(query_param("after", after.to_string()));
                1
            }
            None => 10,
        };

        let highest_id = page.iter().filter_map(member_id).max();

        mock.respond_with(ResponseTemplate::new(200).set_body_json(&page))
            .with_priority(priority)
            .mount(server)
            .await;

        if highest_id.is_some() {
            after = highest_id;
        }
    }
}

fn member_id(member: &Value) -> Option<u64> {
    member["user"]["id"].as_str()?.parse().ok()
}
