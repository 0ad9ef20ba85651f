//! Path normalisation helpers.
//!
//! Every path argument passes through [`normalize_path_spec`] before it
//! reaches a connect or free-space call, so `C:\Data` and `C:\Data\`
//! are queried identically.

use std::path::{is_separator, MAIN_SEPARATOR};

/// Append the platform separator unless the path already ends with one.
///
/// An empty spec stays empty so it cannot turn into the root directory.
pub fn normalize_path_spec(spec: &str) -> String {
    if spec.is_empty() || spec.ends_with(is_separator) {
        spec.to_string()
    } else {
        let mut normalized = String::with_capacity(spec.len() + 1);
        normalized.push_str(spec);
        normalized.push(MAIN_SEPARATOR);
        normalized
    }
}

/// Reduce a UNC path to its `\\server\share` root.
///
/// Returns `None` when the path is not a UNC path or has no share component.
/// Both `\` and `/` are accepted as separators.
pub fn share_root(path: &str) -> Option<String> {
    let unc_sep = |c: char| c == '\\' || c == '/';

    let mut chars = path.chars();
    if !(chars.next().is_some_and(unc_sep) && chars.next().is_some_and(unc_sep)) {
        return None;
    }

    let mut parts = path[2..].split(unc_sep).filter(|p| !p.is_empty());
    let server = parts.next()?;
    let share = parts.next()?;

    Some(format!(r"\\{}\{}", server, share))
}
