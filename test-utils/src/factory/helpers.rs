//! Shared helper utilities for factory methods.

/// Counter for generating unique snowflake-sized IDs in tests.
///
/// Starts well above zero so every id is a valid non-zero snowflake, and increases
/// monotonically so members created in sequence are already sorted by id.
static COUNTER: std::sync::atomic::AtomicU64 =
    std::sync::atomic::AtomicU64::new(100_000_000_000_000_000);

/// Gets the next unique id for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
