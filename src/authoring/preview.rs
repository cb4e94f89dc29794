//! Local preview handle for a selected image.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tracing::debug;

/// Local preview of the image selected for authoring.
///
/// Backed by a named temp file holding the raw bytes, so the
/// presentation layer has a resolvable path to display. The file is
/// removed when the last clone is dropped, which is how an abandoned or
/// reset draft releases its preview instead of leaking it for the
/// session lifetime.
#[derive(Clone)]
pub struct PreviewHandle {
    inner: Arc<PreviewInner>,
}

struct PreviewInner {
    /// Original file name of the selection, for display.
    file_name: String,
    file: NamedTempFile,
}

impl PreviewHandle {
    /// Materialize the selected bytes into a temp file.
    pub fn new(bytes: &[u8], file_name: impl Into<String>) -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self {
            inner: Arc::new(PreviewInner {
                file_name: file_name.into(),
                file,
            }),
        })
    }

    /// Path of the materialized preview.
    pub fn path(&self) -> &Path {
        self.inner.file.path()
    }

    /// Original file name of the selection.
    pub fn file_name(&self) -> &str {
        &self.inner.file_name
    }
}

impl PartialEq for PreviewHandle {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl std::fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("file_name", &self.inner.file_name)
            .field("path", &self.path())
            .finish()
    }
}

impl Drop for PreviewInner {
    fn drop(&mut self) {
        debug!(file_name = %self.file_name, "releasing preview");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_holds_the_bytes() {
        let handle = PreviewHandle::new(b"fake-jpeg", "shoe.jpg").unwrap();
        let contents = std::fs::read(handle.path()).unwrap();
        assert_eq!(contents, b"fake-jpeg");
        assert_eq!(handle.file_name(), "shoe.jpg");
    }

    #[test]
    fn file_is_released_when_last_clone_drops() {
        let handle = PreviewHandle::new(b"bytes", "a.png").unwrap();
        let path = handle.path().to_path_buf();
        let clone = handle.clone();

        drop(handle);
        assert!(path.exists(), "still held by the clone");

        drop(clone);
        assert!(!path.exists(), "released with the last handle");
    }

    #[test]
    fn clones_compare_equal() {
        let handle = PreviewHandle::new(b"bytes", "a.png").unwrap();
        let clone = handle.clone();
        assert_eq!(handle, clone);

        let other = PreviewHandle::new(b"bytes", "a.png").unwrap();
        assert_ne!(handle, other);
    }
}
