use chrono::{Local, NaiveDateTime};

/// Derive a file name stem from a query label
///
/// Lower-cases the label, spaces become `_`, `:` and `=` are dropped,
/// `>` becomes `gt` and `<` becomes `lt`.
pub fn safe_file_stem(label: &str) -> String {
    label
        .to_lowercase()
        .replace(' ', "_")
        .replace(':', "")
        .replace('=', "")
        .replace('>', "gt")
        .replace('<', "lt")
}

/// Current local time as ISO-8601 with microseconds and no offset
pub fn iso_timestamp_now() -> String {
    iso_timestamp(Local::now().naive_local())
}

pub(crate) fn iso_timestamp(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Display an optional number, `fallback` when missing
pub(crate) fn display_or(value: Option<u64>, fallback: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => fallback.to_string(),
    }
}
