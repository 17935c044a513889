//! File export from base64 payloads

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use svrdash_core::{Error, Result};

/// MIME type used when the caller does not specify one
pub const DEFAULT_MIME_TYPE: &str = "application/pdf";

/// A decoded download: the exact byte sequence of the payload plus the
/// metadata a download trigger needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDownload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub filename: Option<String>,
}

/// Decode a base64 payload into a download blob
pub fn download_file(
    b64: &str,
    filename: Option<&str>,
    mime_type: Option<&str>,
) -> Result<FileDownload> {
    let bytes = STANDARD
        .decode(b64.trim())
        .map_err(|e| Error::DecodeError(format!("Invalid base64 payload: {}", e)))?;

    Ok(FileDownload {
        bytes,
        mime_type: mime_type.unwrap_or(DEFAULT_MIME_TYPE).to_string(),
        filename: filename.map(|f| f.to_string()),
    })
}

impl FileDownload {
    /// Materialize the blob under `dir` and return the written path.
    /// The written file is the whole side effect; nothing else persists.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let name = self.filename.as_deref().unwrap_or("download");
        let path = dir.join(name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_exact_bytes() {
        let download = download_file("aGVsbG8gd29ybGQ=", None, None).unwrap();
        assert_eq!(download.bytes, b"hello world");
        assert_eq!(download.mime_type, "application/pdf");
        assert!(download.filename.is_none());
    }

    #[test]
    fn test_explicit_mime_and_filename() {
        let download =
            download_file("AAEC", Some("report.bin"), Some("application/octet-stream")).unwrap();
        assert_eq!(download.bytes, vec![0, 1, 2]);
        assert_eq!(download.mime_type, "application/octet-stream");
        assert_eq!(download.filename.as_deref(), Some("report.bin"));
    }

    #[test]
    fn test_invalid_payload_is_decode_error() {
        let err = download_file("not base64!!", None, None).unwrap_err();
        assert!(matches!(err, Error::DecodeError(_)));
    }

    #[test]
    fn test_write_to_materializes_blob() {
        let dir = tempfile::tempdir().unwrap();
        let download = download_file("aGVsbG8=", Some("hello.txt"), Some("text/plain")).unwrap();

        let path = download.write_to(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "hello.txt");
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_write_to_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let download = download_file("aGVsbG8=", None, None).unwrap();

        let path = download.write_to(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "download");
    }
}
