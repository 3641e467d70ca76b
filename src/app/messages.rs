use super::style::FontFamily;

/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    SelectAll,
    ClearAll,

    // Format
    SetFontFamily(FontFamily),
    SetFontSize(i32),
    ToggleBold,
    ToggleItalic,

    // Help
    ShowAbout,
}
