use fltk::{app, enums::Event, prelude::*};

use drift_pad::app::messages::Message;
use drift_pad::app::state::EditorState;
use drift_pad::ui::dialogs::about::show_about_dialog;
use drift_pad::ui::main_window::build_main_window;
use drift_pad::ui::menu::build_menu;

fn main() {
    let fl_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window();
    build_menu(&mut widgets.menu, &sender);

    // Route the window-manager close button through the same quit
    // confirmation as File/Exit.
    widgets.wind.set_callback({
        let sender = sender;
        move |_| {
            if app::event() == Event::Close {
                sender.send(Message::FileQuit);
            }
        }
    });

    let mut state = EditorState::new(
        widgets.text_editor,
        widgets.buffer,
        widgets.wind,
        widgets.menu,
        widgets.status_bar,
    );

    state.apply_font();
    state.sync_format_menu();
    state.update_window_title();
    state.window.show();

    while fl_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit => {
                    if state.confirm_quit() {
                        fl_app.quit();
                    }
                }

                Message::EditUndo => state.edit_undo(),
                Message::EditRedo => state.edit_redo(),
                Message::EditCut => state.edit_cut(),
                Message::EditCopy => state.edit_copy(),
                Message::EditPaste => state.edit_paste(),
                Message::SelectAll => state.select_all(),
                Message::ClearAll => state.clear_all(),

                Message::SetFontFamily(family) => state.set_font_family(family),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::ToggleBold => state.toggle_bold(),
                Message::ToggleItalic => state.toggle_italic(),

                Message::ShowAbout => show_about_dialog(),
            }
        }
    }
}
