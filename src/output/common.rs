//! Cell helpers shared by the row types

/// Quote a CSV field when it holds a delimiter, quote or line break (RFC 4180)
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// CSV column name for a table header (`Auto Apply` -> `auto_apply`)
pub(crate) fn csv_column(header: &str) -> String {
    header.to_lowercase().replace(' ', "_")
}

/// Render an optional value as an empty cell when absent
pub(crate) fn cell(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

/// Render a flag as Yes/No
pub(crate) fn yes_no(value: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    text.to_string()
}
