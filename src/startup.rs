use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;

/// Log filter applied when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "slowroller=info";

/// Installs the global tracing subscriber.
///
/// Logs go to stdout through the `fmt` layer, filtered by `RUST_LOG` or
/// `DEFAULT_LOG_FILTER` when it is not set.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Builds the HTTP client used for Discord requests.
///
/// Redirects are never followed so the bot token is only ever sent to the API host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
