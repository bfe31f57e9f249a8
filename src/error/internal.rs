use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected input data
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a snowflake id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
