// crates/shared-kernel/src/path.rs

/// Returns `true` when the string already ends with a path separator.
///
/// `/` is accepted on every platform; `\` is additionally accepted where it is
/// a separator (Windows).
pub fn ends_with_separator(path: &str) -> bool {
    path.chars().next_back().is_some_and(std::path::is_separator)
}

/// Append the platform separator unless the path already ends with one.
///
/// No other normalisation is performed: `.`/`..` components and duplicate
/// separators are kept as given.
pub fn ensure_trailing_separator(path: &str) -> String {
    let mut normalized = path.to_owned();
    if !ends_with_separator(&normalized) {
        normalized.push(std::path::MAIN_SEPARATOR);
    }
    normalized
}
