use std::num::NonZeroU64;

use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake id from String
///
/// Snowflakes are non-zero u64 values; zero is rejected here so the result can be
/// handed to serenity's id constructors without panicking.
///
/// # Arguments
/// - `value` - The String to attempt to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed non-zero id
/// - `Err(AppError::InternalErr(ParseStringId))` - Not a number, or zero
pub fn parse_snowflake(value: String) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result.get())
}
