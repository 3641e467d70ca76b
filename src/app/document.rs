use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};
use super::text_ops::extract_filename;

/// The controller's view of the open document: where it lives on disk,
/// if anywhere. The text itself stays in the editor widget's buffer
/// and is passed in and out of these methods on demand.
///
/// The binding only moves after the underlying read or write call
/// succeeds; a failed operation leaves it exactly as it was.
pub struct Document {
    file_path: Option<PathBuf>,
    display_name: String,
}

impl Document {
    pub fn untitled() -> Self {
        Self {
            file_path: None,
            display_name: "Untitled".to_string(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Forget the current file binding (File/New).
    pub fn reset(&mut self) {
        self.file_path = None;
        self.display_name = "Untitled".to_string();
    }

    /// Read the whole file at `path` as UTF-8 and bind to it, returning
    /// the content for the caller to place into the widget buffer.
    pub fn open(&mut self, path: PathBuf) -> Result<String> {
        let content = fs::read_to_string(&path).map_err(AppError::Read)?;
        self.display_name = extract_filename(&path);
        self.file_path = Some(path);
        Ok(content)
    }

    /// Overwrite the bound path with `text`. Returns `None` when the
    /// document has never been saved; the caller falls back to save-as.
    pub fn save(&self, text: &str) -> Option<Result<PathBuf>> {
        let path = self.file_path.clone()?;
        Some(fs::write(&path, text).map(|_| path).map_err(AppError::Write))
    }

    /// Write `text` to `path` and bind to it.
    pub fn save_as(&mut self, path: PathBuf, text: &str) -> Result<()> {
        fs::write(&path, text).map_err(AppError::Write)?;
        self.display_name = extract_filename(&path);
        self.file_path = Some(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_untitled_has_no_path() {
        let doc = Document::untitled();
        assert!(doc.path().is_none());
        assert_eq!(doc.display_name(), "Untitled");
    }

    #[test]
    fn test_open_binds_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, "Hello\nWorld").unwrap();

        let mut doc = Document::untitled();
        let content = doc.open(path.clone()).unwrap();
        assert_eq!(content, "Hello\nWorld");
        assert_eq!(doc.path(), Some(path.as_path()));
        assert_eq!(doc.display_name(), "hello.txt");
    }

    #[test]
    fn test_open_missing_file_leaves_binding_unchanged() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "kept").unwrap();

        let mut doc = Document::untitled();
        doc.open(good.clone()).unwrap();

        let missing = dir.path().join("missing.txt");
        assert!(matches!(doc.open(missing), Err(AppError::Read(_))));
        assert_eq!(doc.path(), Some(good.as_path()));
        assert_eq!(doc.display_name(), "good.txt");
    }

    #[test]
    fn test_open_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x48, 0x00]).unwrap();

        let mut doc = Document::untitled();
        assert!(doc.open(path).is_err());
        assert!(doc.path().is_none());
    }

    #[test]
    fn test_save_unbound_defers_to_save_as() {
        let doc = Document::untitled();
        assert!(doc.save("anything").is_none());
    }

    #[test]
    fn test_save_as_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let content = "line one\nline two\nпривет\n";

        let mut doc = Document::untitled();
        doc.save_as(path.clone(), content).unwrap();
        assert_eq!(doc.path(), Some(path.as_path()));

        let mut reopened = Document::untitled();
        assert_eq!(reopened.open(path).unwrap(), content);
    }

    #[test]
    fn test_save_overwrites_bound_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut doc = Document::untitled();
        doc.save_as(path.clone(), "first").unwrap();
        doc.save("second").unwrap().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_save_as_failure_keeps_binding() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");

        let mut doc = Document::untitled();
        doc.save_as(good.clone(), "content").unwrap();

        let bad = dir.path().join("no-such-dir").join("out.txt");
        assert!(matches!(doc.save_as(bad, "content"), Err(AppError::Write(_))));
        assert_eq!(doc.path(), Some(good.as_path()));
    }

    #[test]
    fn test_reset_clears_binding() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut doc = Document::untitled();
        doc.save_as(path, "content").unwrap();
        doc.reset();
        assert!(doc.path().is_none());
        assert_eq!(doc.display_name(), "Untitled");
    }
}
