use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::style::{FONT_SIZES, FontFamily};

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal | MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Redo", Shortcut::Ctrl | 'y', MenuFlag::Normal | MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal | MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Select All", Shortcut::Ctrl | 'a', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SelectAll) });
    menu.add("Edit/Clear All", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearAll) });

    // Format
    for family in FontFamily::ALL {
        menu.add(&format!("Format/Font/{}", family.label()), Shortcut::None, MenuFlag::Radio, { let s = *s; move |_| s.send(Message::SetFontFamily(family)) });
    }
    for size in FONT_SIZES {
        menu.add(&format!("Format/Font Size/{}", size), Shortcut::None, MenuFlag::Radio, { let s = *s; move |_| s.send(Message::SetFontSize(size)) });
    }
    menu.add("Format/Bold", Shortcut::Ctrl | 'b', MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleBold) });
    menu.add("Format/Italic", Shortcut::Ctrl | 'i', MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleItalic) });

    // Help
    menu.add("Help/About DriftPad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
