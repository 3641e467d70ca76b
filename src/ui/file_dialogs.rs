use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_filters::text_files_filter;

fn run_chooser(kind: FileDialogType, directory: Option<&Path>) -> Option<PathBuf> {
    let mut chooser = NativeFileChooser::new(kind);
    chooser.set_filter(&text_files_filter());
    if let Some(dir) = directory {
        let _ = chooser.set_directory(&dir);
    }
    chooser.show(); // blocks until close
    let filename = chooser.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

/// Native open dialog. `directory` preselects the starting location;
/// cancelling returns `None`.
pub fn native_open_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, directory)
}

/// Native save dialog. The default ".txt" extension is applied by the
/// caller once a name is chosen.
pub fn native_save_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, directory)
}
