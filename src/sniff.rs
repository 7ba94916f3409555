//! Content-based format sniffing over the first bytes of a file.
//!
//! File extensions are never consulted, so renamed or extensionless archives
//! are still detected.

use log::debug;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How many leading bytes are read for sniffing. Enough for every signature
/// below, including the tar magic at offset 257.
pub const SNIFF_LEN: usize = 512;

/// Classification label for a file's true format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentTag {
    Zip,
    Gzip,
    Tar,
    /// Fallback when no signature matched or the file could not be read.
    Unknown,
}

impl ContentTag {
    /// MIME-style name for the tag.
    pub fn mime(self) -> &'static str {
        match self {
            ContentTag::Zip => "application/zip",
            ContentTag::Gzip => "application/gzip",
            ContentTag::Tar => "application/x-tar",
            ContentTag::Unknown => "application/octet-stream",
        }
    }
}

impl fmt::Display for ContentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Classify a byte prefix by magic number.
pub fn detect_tag(data: &[u8]) -> ContentTag {
    match data {
        // Local file header, empty archive, spanned archive.
        [0x50, 0x4B, 0x03, 0x04, ..]
        | [0x50, 0x4B, 0x05, 0x06, ..]
        | [0x50, 0x4B, 0x07, 0x08, ..] => ContentTag::Zip,
        [0x1F, 0x8B, ..] => ContentTag::Gzip,
        _ if is_tar_header(data) => ContentTag::Tar,
        _ => ContentTag::Unknown,
    }
}

fn is_tar_header(data: &[u8]) -> bool {
    data.len() >= 263 && data[257..263] == *b"ustar\0"
}

/// Sniff the tag for the file at `path` from at most its first
/// [`SNIFF_LEN`] bytes.
///
/// Open or read failures degrade to [`ContentTag::Unknown`] with a debug log
/// line; a single unreadable file must never abort the surrounding walk.
pub fn classify(path: &Path) -> ContentTag {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            debug!("sniff: cannot open {}: {}", path.display(), err);
            return ContentTag::Unknown;
        }
    };
    let mut buf = Vec::with_capacity(SNIFF_LEN);
    if let Err(err) = file.take(SNIFF_LEN as u64).read_to_end(&mut buf) {
        debug!("sniff: cannot read {}: {}", path.display(), err);
        return ContentTag::Unknown;
    }
    detect_tag(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_zip() {
        let header = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x00, 0x00];
        assert_eq!(detect_tag(&header), ContentTag::Zip);
    }

    #[test]
    fn test_detect_empty_zip() {
        let header = [0x50, 0x4B, 0x05, 0x06, 0x00, 0x00];
        assert_eq!(detect_tag(&header), ContentTag::Zip);
    }

    #[test]
    fn test_detect_gzip() {
        let header = [0x1F, 0x8B, 0x08, 0x00];
        assert_eq!(detect_tag(&header), ContentTag::Gzip);
    }

    #[test]
    fn test_detect_tar() {
        let mut header = [0u8; 512];
        header[257..263].copy_from_slice(b"ustar\0");
        assert_eq!(detect_tag(&header), ContentTag::Tar);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_tag(b"hello world"), ContentTag::Unknown);
        assert_eq!(detect_tag(&[]), ContentTag::Unknown);
    }

    #[test]
    fn test_truncated_tar_header_is_unknown() {
        let short = [0u8; 256];
        assert_eq!(detect_tag(&short), ContentTag::Unknown);
    }

    #[test]
    fn test_classify_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.txt");
        let mut f = File::create(&path).unwrap();
        f.write_all(&[0x50, 0x4B, 0x03, 0x04, 0x00, 0x00]).unwrap();
        assert_eq!(classify(&path), ContentTag::Zip);
    }

    #[test]
    fn test_classify_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.zip");
        std::fs::write(&path, "just some text").unwrap();
        assert_eq!(classify(&path), ContentTag::Unknown);
    }

    #[test]
    fn test_classify_missing_file_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope");
        assert_eq!(classify(&path), ContentTag::Unknown);
    }

    #[test]
    fn test_mime_names() {
        assert_eq!(ContentTag::Zip.mime(), "application/zip");
        assert_eq!(ContentTag::Unknown.mime(), "application/octet-stream");
        assert_eq!(format!("{}", ContentTag::Gzip), "application/gzip");
    }
}
