//! Report file reading implementation
//!
//! This module turns a user-provided file into in-memory display content for
//! the report viewer. It is the only fallible leaf of the report log.
//!
//! # Display Model
//!
//! The viewer distinguishes exactly two content shapes, mirroring how report
//! files are presented:
//!
//! - **PDF** files become a `data:application/pdf;base64,…` URL, suitable for
//!   handing to an embedded document viewer
//! - **Everything else** becomes text via a lossy UTF-8 decode; binary
//!   uploads therefore display as replacement characters rather than failing
//!
//! # Detection
//!
//! PDF detection uses the file bytes (magic number), not the filename
//! extension, so a renamed PDF still renders as a document. The detected
//! media type recorded in [`FileMetadata`] is best-effort and may be `None`
//! for plain text.
//!
//! # Failure Semantics
//!
//! Reading either succeeds with the full content or signals a read failure.
//! There is no retry policy and no partial content.

use crate::{FilesError, FilesResult};
use base64::Engine as _;
use chrono::{DateTime, Utc};
use mms_types::NonEmptyText;
use std::fs;
use std::path::Path;

/// MIME type that triggers data-URL delivery instead of text.
const PDF_MIME: &str = "application/pdf";

/// Displayable content of a report file held in memory.
///
/// Serialised with an internal `kind` tag so API clients and the rendering
/// layer can branch on the shape without sniffing the payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum FileContent {
    /// UTF-8 text (lossy-decoded) for inline display
    Text(String),
    /// `data:` URL carrying base64-encoded bytes for an embedded viewer
    DataUrl(String),
}

impl FileContent {
    /// Returns the raw content string regardless of shape.
    pub fn as_str(&self) -> &str {
        match self {
            FileContent::Text(s) => s,
            FileContent::DataUrl(s) => s,
        }
    }

    /// True when the content is a `data:` URL rather than plain text.
    pub fn is_data_url(&self) -> bool {
        matches!(self, FileContent::DataUrl(_))
    }
}

/// Metadata captured when a report file is read
///
/// This is an in-memory record of what was read, kept alongside the content
/// for display purposes. It contains no patient identifiers.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct FileMetadata {
    /// Original filename from the source path
    pub original_filename: NonEmptyText,

    /// Size of the file in bytes
    pub size_bytes: u64,

    /// Detected media type (MIME type), if available
    ///
    /// This is a best-effort detection and should not be considered
    /// authoritative. May be `None` when the media type cannot be determined,
    /// which is the common case for plain text.
    pub media_type: Option<NonEmptyText>,

    /// UTC timestamp when the file was read
    pub read_at: DateTime<Utc>,
}

/// A report file read into memory, ready for display.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LoadedFile {
    pub metadata: FileMetadata,
    pub content: FileContent,
}

/// Reads a report file into memory for display
///
/// This is the whole contract the report log has with the filesystem: the
/// file is read once, in full, and converted into displayable content. The
/// source file is never modified and nothing is written anywhere.
///
/// # Arguments
///
/// * `source_path` - Path to the file to read
///
/// # Returns
///
/// A [`LoadedFile`] carrying the display content and read metadata.
///
/// # Errors
///
/// Returns `FilesError` if:
/// - The source file cannot be opened or read (I/O)
/// - The source path has no file name component
pub fn load_for_display(source_path: &Path) -> FilesResult<LoadedFile> {
    let original_filename = source_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| NonEmptyText::new(n).ok())
        .ok_or_else(|| FilesError::MissingFileName(source_path.display().to_string()))?;

    let bytes = fs::read(source_path).map_err(|e| {
        FilesError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read source file {}: {}", source_path.display(), e),
        ))
    })?;

    Ok(loaded_from_bytes(original_filename, &bytes))
}

/// Converts already-read bytes into displayable content
///
/// Total over any byte sequence: PDF bytes become a `data:` URL, anything
/// else becomes lossy-decoded text. Callers that received file content from
/// elsewhere (e.g. an upload) use this instead of [`load_for_display`].
pub fn content_from_bytes(bytes: &[u8]) -> FileContent {
    if detect_media_type(bytes).as_deref() == Some(PDF_MIME) {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        FileContent::DataUrl(format!("data:{};base64,{}", PDF_MIME, encoded))
    } else {
        FileContent::Text(String::from_utf8_lossy(bytes).into_owned())
    }
}

fn loaded_from_bytes(original_filename: NonEmptyText, bytes: &[u8]) -> LoadedFile {
    let media_type =
        detect_media_type(bytes).map(|m| NonEmptyText::new(m).expect("mime type is non-empty"));

    LoadedFile {
        metadata: FileMetadata {
            original_filename,
            size_bytes: bytes.len() as u64,
            media_type,
            read_at: Utc::now(),
        },
        content: content_from_bytes(bytes),
    }
}

/// Best-effort media type detection from file bytes.
fn detect_media_type(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|kind| kind.mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Minimal byte prefix that `infer` identifies as a PDF.
    const PDF_HEADER: &[u8] = b"%PDF-1.4\n%test\n";

    #[test]
    fn test_load_text_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("summary.txt");
        fs::write(&path, "Patient is recovering well.").unwrap();

        let loaded = load_for_display(&path).unwrap();

        assert_eq!(loaded.metadata.original_filename.as_str(), "summary.txt");
        assert_eq!(loaded.metadata.size_bytes, 27);
        assert_eq!(
            loaded.content,
            FileContent::Text("Patient is recovering well.".into())
        );
        assert!(!loaded.content.is_data_url());
    }

    #[test]
    fn test_load_pdf_becomes_data_url() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scan.pdf");
        fs::write(&path, PDF_HEADER).unwrap();

        let loaded = load_for_display(&path).unwrap();

        assert_eq!(
            loaded.metadata.media_type.as_ref().map(|t| t.as_str()),
            Some("application/pdf")
        );
        match &loaded.content {
            FileContent::DataUrl(url) => {
                assert!(url.starts_with("data:application/pdf;base64,"));
            }
            other => panic!("expected data URL, got {:?}", other),
        }
    }

    #[test]
    fn test_pdf_detection_ignores_extension() {
        // A PDF renamed to .txt still renders as a document
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mislabelled.txt");
        fs::write(&path, PDF_HEADER).unwrap();

        let loaded = load_for_display(&path).unwrap();
        assert!(loaded.content.is_data_url());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_for_display(Path::new("/non-existent/report.txt"));
        assert!(matches!(result, Err(FilesError::Io(_))));
    }

    #[test]
    fn test_binary_content_decodes_lossily() {
        let bytes = vec![0xFF, 0xFE, 0x00, 0x41];
        let content = content_from_bytes(&bytes);

        match content {
            FileContent::Text(text) => {
                assert!(text.contains('\u{FFFD}'));
                assert!(text.contains('A'));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_content_from_bytes_empty() {
        assert_eq!(content_from_bytes(&[]), FileContent::Text(String::new()));
    }

    #[test]
    fn test_data_url_round_trips_bytes() {
        let content = content_from_bytes(PDF_HEADER);
        let url = match &content {
            FileContent::DataUrl(url) => url,
            other => panic!("expected data URL, got {:?}", other),
        };

        let encoded = url
            .strip_prefix("data:application/pdf;base64,")
            .expect("data URL prefix");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(decoded, PDF_HEADER);
    }

    #[test]
    fn test_file_content_serialization_tags_kind() {
        let text = FileContent::Text("hello".into());
        let json = serde_json::to_string(&text).unwrap();
        assert!(json.contains("\"kind\":\"text\""));

        let url = FileContent::DataUrl("data:application/pdf;base64,AA==".into());
        let json = serde_json::to_string(&url).unwrap();
        assert!(json.contains("\"kind\":\"data_url\""));

        let back: FileContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, url);
    }

    #[test]
    fn test_metadata_for_plain_text_has_no_media_type() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "plain notes").unwrap();

        let loaded = load_for_display(&path).unwrap();
        assert!(loaded.metadata.media_type.is_none());
    }
}
