use std::path::{Path, PathBuf};

use fltk::{
    dialog,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::document::Document;
use super::style::{FONT_SIZES, FontFamily, StyleState};
use super::text_ops::ensure_txt_extension;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

pub const APP_TITLE: &str = "DriftPad";

/// The session controller. Owns the widgets, the file binding and the
/// display style; every menu item and keyboard shortcut ends up in one
/// of the methods below, run to completion on the UI thread.
pub struct EditorState {
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub window: Window,
    pub menu: MenuBar,
    pub status_bar: Frame,
    pub document: Document,
    pub style: StyleState,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<PathBuf>,
}

impl EditorState {
    pub fn new(
        editor: TextEditor,
        buffer: TextBuffer,
        window: Window,
        menu: MenuBar,
        status_bar: Frame,
    ) -> Self {
        Self {
            editor,
            buffer,
            window,
            menu,
            status_bar,
            document: Document::untitled(),
            style: StyleState::default(),
            last_open_directory: None,
        }
    }

    // --- User feedback ---

    pub fn set_status(&mut self, text: &str) {
        self.status_bar.set_label(text);
    }

    pub fn update_window_title(&mut self) {
        self.window
            .set_label(&format!("{} - {}", self.document.display_name(), APP_TITLE));
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.buffer.set_text("");
        self.document.reset();
        self.update_window_title();
        self.set_status("New file created");
    }

    pub fn file_open(&mut self) {
        let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) else {
            return;
        };
        self.remember_directory(&path);
        match self.document.open(path.clone()) {
            Ok(content) => {
                self.buffer.set_text(&content);
                self.update_window_title();
                self.set_status(&format!("Opened: {}", path.display()));
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    pub fn file_save(&mut self) {
        let text = self.buffer.text();
        match self.document.save(&text) {
            None => self.file_save_as(),
            Some(Ok(path)) => self.set_status(&format!("Saved: {}", path.display())),
            Some(Err(e)) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) else {
            return;
        };
        let path = ensure_txt_extension(path);
        self.remember_directory(&path);
        let text = self.buffer.text();
        match self.document.save_as(path.clone(), &text) {
            Ok(()) => {
                self.update_window_title();
                self.set_status(&format!("Saved as: {}", path.display()));
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    /// Ask for confirmation before quitting. Returns `true` if the app
    /// should exit. Unsaved buffer content is not checked.
    pub fn confirm_quit(&mut self) -> bool {
        dialog::choice2_default("Do you really want to quit?", "Quit", "Cancel", "") == Some(0)
    }

    // --- Edit operations (delegated to the text widget) ---

    pub fn edit_undo(&mut self) {
        self.editor.kf_undo();
    }

    pub fn edit_redo(&mut self) {
        self.editor.kf_redo();
    }

    pub fn edit_cut(&mut self) {
        self.editor.kf_cut();
    }

    pub fn edit_copy(&mut self) {
        self.editor.kf_copy();
    }

    pub fn edit_paste(&mut self) {
        self.editor.kf_paste();
    }

    /// Select the whole buffer and park the cursor at the start.
    pub fn select_all(&mut self) {
        let len = self.buffer.length();
        self.buffer.select(0, len);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    /// Delete all buffer content. The file binding is untouched, which
    /// is what separates this from `file_new`.
    pub fn clear_all(&mut self) {
        self.buffer.set_text("");
    }

    // --- Format ---

    /// Re-resolve the style tuple and apply it to the whole document's
    /// rendering. Called after every style-affecting change.
    pub fn apply_font(&mut self) {
        self.editor.set_text_font(self.style.font());
        self.editor.set_text_size(self.style.size);
        self.editor.redraw();
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.style.family = family;
        self.sync_format_menu();
        self.apply_font();
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.style.size = size;
        self.sync_format_menu();
        self.apply_font();
    }

    pub fn toggle_bold(&mut self) {
        self.style.toggle_bold();
        self.sync_format_menu();
        self.apply_font();
    }

    pub fn toggle_italic(&mut self) {
        self.style.toggle_italic();
        self.sync_format_menu();
        self.apply_font();
    }

    /// Keep the Format menu's radio and checkbox items in line with the
    /// current style, so the keyboard toggles and the menu items never
    /// disagree.
    pub fn sync_format_menu(&self) {
        for family in FontFamily::ALL {
            let path = format!("Format/Font/{}", family.label());
            self.set_menu_checked(&path, self.style.family == family);
        }
        for size in FONT_SIZES {
            let path = format!("Format/Font Size/{}", size);
            self.set_menu_checked(&path, self.style.size == size);
        }
        self.set_menu_checked("Format/Bold", self.style.bold);
        self.set_menu_checked("Format/Italic", self.style.italic);
    }

    fn set_menu_checked(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}
