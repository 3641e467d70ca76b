use fltk::{
    enums::{Align, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_bar: Frame,
}

/// Build the main window: menu bar on top, the text area filling the
/// middle, and the status line pinned at the bottom.
pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "Untitled - DriftPad");
    wind.set_xclass("DriftPad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut status_bar = Frame::default();
    status_bar.set_frame(FrameType::DownBox);
    status_bar.set_label("Ready");
    status_bar.set_label_size(12);
    status_bar.set_align(Align::Left | Align::Inside);
    flex.fixed(&status_bar, 24);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        buffer,
        status_bar,
    }
}
