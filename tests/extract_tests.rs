use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use zip::write::{SimpleFileOptions, ZipWriter};
use zipsweep::ExtractError;
use zipsweep::extract::extract_archive;

/// Write a zip at `path` with the given (name, body) file entries.
fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut zw = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, body) in entries {
        zw.start_file(*name, options).unwrap();
        zw.write_all(body.as_bytes()).unwrap();
    }
    zw.finish().unwrap();
}

#[test]
fn test_extract_writes_entries_with_contents() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("a.zip");
    let dest = tmp.path().join("dest");
    write_zip(&archive, &[("x.txt", "hello"), ("sub/y.txt", "nested")]);

    extract_archive(&archive, &dest).unwrap();

    assert_eq!(fs::read_to_string(dest.join("x.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(dest.join("sub/y.txt")).unwrap(), "nested");
}

#[test]
fn test_extract_creates_missing_dest_root() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("a.zip");
    let dest = tmp.path().join("a/b/c");
    write_zip(&archive, &[("f.txt", "x")]);

    extract_archive(&archive, &dest).unwrap();

    assert!(dest.join("f.txt").is_file());
}

#[test]
fn test_extract_rejects_parent_traversal() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("c.zip");
    let dest = tmp.path().join("dest");
    write_zip(&archive, &[("../../evil.txt", "pwned")]);

    let err = extract_archive(&archive, &dest).unwrap_err();

    assert!(matches!(err, ExtractError::IllegalEntryPath(_)));
    assert!(!tmp.path().join("evil.txt").exists());
    assert!(!dest.join("evil.txt").exists());
}

#[test]
fn test_extract_stops_at_bad_entry_keeps_earlier_writes() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("mixed.zip");
    let dest = tmp.path().join("dest");
    write_zip(&archive, &[("good.txt", "kept"), ("../evil.txt", "no")]);

    let err = extract_archive(&archive, &dest).unwrap_err();

    assert!(matches!(err, ExtractError::IllegalEntryPath(_)));
    // No rollback: the entry written before the violation stays on disk.
    assert_eq!(fs::read_to_string(dest.join("good.txt")).unwrap(), "kept");
    assert!(!tmp.path().join("evil.txt").exists());
}

#[test]
fn test_extract_garbage_is_zip_error() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("junk.zip");
    let dest = tmp.path().join("dest");
    fs::write(&archive, b"this is not a zip archive at all").unwrap();

    let err = extract_archive(&archive, &dest).unwrap_err();
    assert!(matches!(err, ExtractError::Zip(_)));
}

#[test]
fn test_extract_missing_archive_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = extract_archive(&tmp.path().join("nope.zip"), &tmp.path().join("dest")).unwrap_err();
    assert!(matches!(err, ExtractError::Io(_)));
}

#[cfg(unix)]
#[test]
fn test_extract_preserves_unix_mode() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("a.zip");
    let dest = tmp.path().join("dest");

    let file = File::create(&archive).unwrap();
    let mut zw = ZipWriter::new(file);
    let options = SimpleFileOptions::default().unix_permissions(0o754);
    zw.start_file("run.sh", options).unwrap();
    zw.write_all(b"#!/bin/sh\n").unwrap();
    zw.finish().unwrap();

    extract_archive(&archive, &dest).unwrap();

    let mode = fs::metadata(dest.join("run.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o754);
}

#[test]
fn test_extract_directory_entries() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("dirs.zip");
    let dest = tmp.path().join("dest");

    let file = File::create(&archive).unwrap();
    let mut zw = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    zw.add_directory("empty", options).unwrap();
    zw.start_file("filled/f.txt", options).unwrap();
    zw.write_all(b"x").unwrap();
    zw.finish().unwrap();

    extract_archive(&archive, &dest).unwrap();

    assert!(dest.join("empty").is_dir());
    assert!(dest.join("filled/f.txt").is_file());
}
