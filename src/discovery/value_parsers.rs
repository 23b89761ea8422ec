use tracing::debug;

/// Parses an integer parameter value, treating malformed values as absent.
pub fn parse_integer(name: &str, value: Option<&str>) -> Option<i32> {
    let value = value?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(parameter = name, value, "Ignoring malformed integer parameter: {err}");
            None
        }
    }
}

/// Parses a boolean parameter value (`true`/`false`, case-insensitive), treating any other value
/// as absent.
pub fn parse_boolean(name: &str, value: Option<&str>) -> Option<bool> {
    let value = value?;
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        debug!(parameter = name, value, "Ignoring malformed boolean parameter.");
        None
    }
}
