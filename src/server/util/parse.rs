/// Parses a positive integer from a query string value.
///
/// # Arguments
/// - `value` - Raw query value, if the parameter was present
///
/// # Returns
/// - `Some(u64)` - Value is a whole number of at least 1
/// - `None` - Value is absent, empty, zero, negative or not a number
pub fn parse_positive_u64(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v as u64)
}

/// Parses an optional id filter such as `?project_id=3`.
///
/// Anything that is not a positive id is treated as no filter.
pub fn parse_id_filter(value: Option<&str>) -> Option<i32> {
    value
        .and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|v| *v > 0)
}
