//! Entry path containment checks (zip-slip guard).

use std::path::{Component, Path, PathBuf};

use crate::error::ExtractError;

/// Normalize an entry's stored name and reject anything that would resolve
/// outside the destination root once joined: absolute paths, Windows drive
/// prefixes, `..` segments, and names that normalize to nothing.
///
/// `.` components are dropped, so `./a/b` normalizes to `a/b`.
pub fn validate_entry_path(name: &Path) -> Result<PathBuf, ExtractError> {
    let illegal = || ExtractError::IllegalEntryPath(name.display().to_string());

    let mut normalized = PathBuf::new();
    for component in name.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(illegal());
            }
        }
    }
    if normalized.as_os_str().is_empty() {
        return Err(illegal());
    }
    Ok(normalized)
}
