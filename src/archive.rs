//! Archive path handling.
//!
//! Archive paths come from pipeline inputs authored on any agent OS, so both
//! `/` and `\` are treated as separators no matter where this runs.

/// Strip directory components and the trailing extension from an archive path.
///
/// `c:\java_demo.war` and `/usr/bin/java_demo.war` both yield `java_demo`.
pub fn archive_base_name(path: &str) -> String {
    let trimmed = path.trim_end_matches(is_separator);
    let file_name = trimmed.rsplit(is_separator).next().unwrap_or(trimmed);

    strip_extension(file_name).to_string()
}

#[inline]
fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Drop the last `.ext`; a leading dot is part of the name
fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}
