//! Authenticated request construction and response classification.

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Method, Response,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{discord::DiscordApiError, AppError};

use super::DiscordClient;

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// User agent in the `DiscordBot ($url, $version)` shape Discord requires.
pub const BOT_USER_AGENT: &str = concat!(
    "DiscordBot (",
    env!("CARGO_PKG_NAME"),
    ", ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Header Discord records in the guild audit log next to the action.
pub const AUDIT_LOG_REASON: HeaderName = HeaderName::from_static("x-audit-log-reason");

impl DiscordClient {
    /// Sends an authenticated request and returns the raw response on success.
    ///
    /// Attaches the bot authorization, JSON content type and bot user agent headers,
    /// then merges `headers` on top so a caller-supplied header replaces a default one
    /// with the same name. A structured `body` is serialized to JSON before sending.
    ///
    /// A non-2xx response is logged with its body at error level and returned as a
    /// `DiscordApiError`; the log is diagnostic only and nothing is retried.
    ///
    /// # Arguments
    /// - `method` - HTTP method
    /// - `endpoint` - Path relative to the API base URL, starting with `/`
    /// - `body` - Optional JSON body
    /// - `headers` - Optional extra headers, e.g. an audit log reason
    ///
    /// # Returns
    /// - `Ok(Response)` - Discord answered with a 2xx status
    /// - `Err(AppError::DiscordApiErr)` - Discord answered with any other status
    /// - `Err(AppError::ReqwestErr)` - The request could not be sent
    /// - `Err(AppError::SerializeErr)` - The body could not be serialized
    pub async fn request<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> Result<Response, AppError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request_headers = self.default_headers()?;
        if let Some(headers) = headers {
            request_headers.extend(headers);
        }

        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(request_headers);

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        tracing::debug!("{} {}", method, endpoint);

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {}>", e));

        let error = DiscordApiError {
            method,
            endpoint: endpoint.to_string(),
            status,
            body,
        };

        tracing::error!("{}", error);
        tracing::error!("Error body: {}", error.body);

        Err(error.into())
    }

    /// Sends a request and decodes the JSON response body into `T`.
    ///
    /// Use plain `request` for endpoints answering `204 No Content`.
    pub async fn request_json<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(method, endpoint, body, headers).await?;

        Ok(response.json::<T>().await?)
    }

    /// Headers attached to every request.
    fn default_headers(&self) -> Result<HeaderMap, AppError> {
        let mut authorization = HeaderValue::from_str(&format!("Bot {}", self.bot_token))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_static(BOT_USER_AGENT));

        Ok(headers)
    }
}

/// Builds the audit log reason header, falling back to `default` when no reason is given.
///
/// # Returns
/// - `Ok(HeaderMap)` - Map holding the single `X-Audit-Log-Reason` header
/// - `Err(AppError::InvalidHeader)` - Reason contains characters not allowed in a header
pub fn audit_log_reason(reason: Option<&str>, default: &str) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUDIT_LOG_REASON,
        HeaderValue::from_str(reason.unwrap_or(default))?,
    );

    Ok(headers)
}
