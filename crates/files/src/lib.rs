//! # MMS Files
//!
//! In-memory report file reading for the MMS medical report log.
//!
//! ## Design Principles
//!
//! Following the MMS report-viewing model:
//!
//! - Uploaded files are read fully into memory and displayed, never persisted
//! - PDF content is delivered as a `data:` URL so an embedding viewer can
//!   render it without touching the filesystem
//! - Any other content is delivered as text (lossy UTF-8 decode)
//! - Media-type detection is best-effort and never authoritative
//!
//! The rendering layer that actually displays the content is an opaque
//! collaborator; this crate's only obligation is "succeeds with file content,
//! or signals a read failure".
//!
//! ## Example Usage
//!
//! ```no_run
//! use mms_files::load_for_display;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = load_for_display(Path::new("discharge-summary.txt"))?;
//! println!("{} ({} bytes)", loaded.metadata.original_filename, loaded.metadata.size_bytes);
//! # Ok(())
//! # }
//! ```

mod files;

pub use files::{content_from_bytes, load_for_display, FileContent, FileMetadata, LoadedFile};

/// Errors that can occur during file reading
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// The source path has no usable file name component
    #[error("Source path has no file name: {0}")]
    MissingFileName(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FilesResult<T> = std::result::Result<T, FilesError>;
