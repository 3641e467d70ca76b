use std::path::{Path, PathBuf};

/// Extract the file name component of a path for display purposes.
///
/// Returns "Unknown" if the path has no usable file name.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Apply the default ".txt" extension to a save path when the user
/// typed a bare name. Paths that already carry an extension, whatever
/// it is, are left alone.
pub fn ensure_txt_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("txt")
    } else {
        path
    }
}
