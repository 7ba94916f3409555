//! Safe zip extraction: sequential entries, path containment, preserved modes.

pub mod safety;

pub use safety::validate_entry_path;

use log::debug;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use zip::ZipArchive;

use crate::error::ExtractError;

/// Unpack every entry of the zip at `src` under `dest_root`.
///
/// The destination root is created if absent. Entries are written strictly in
/// archive order; concurrency across archives is the worker pool's business,
/// not this function's. Each stored name must stay within `dest_root` after
/// normalization ([`validate_entry_path`]) or extraction stops with
/// [`ExtractError::IllegalEntryPath`]. Any I/O or decode failure likewise
/// aborts the whole archive; entries already written stay on disk.
pub fn extract_archive(src: &Path, dest_root: &Path) -> Result<(), ExtractError> {
    let file = File::open(src)?;
    let mut archive = ZipArchive::new(file)?;
    fs::create_dir_all(dest_root)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let rel = validate_entry_path(Path::new(&entry.name().to_owned()))?;
        let out_path = dest_root.join(rel);
        let mode = entry.unix_mode();

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&out_path)?;
            io::copy(&mut entry, &mut out)?;
        }
        set_entry_mode(&out_path, mode)?;
        debug!("extract: {} -> {}", src.display(), out_path.display());
    }
    Ok(())
}

#[cfg(unix)]
fn set_entry_mode(path: &Path, mode: Option<u32>) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if let Some(mode) = mode {
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn set_entry_mode(_path: &Path, _mode: Option<u32>) -> io::Result<()> {
    Ok(())
}
