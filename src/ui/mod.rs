//! Widget construction and wiring. Everything here builds FLTK widgets
//! and registers callbacks that send [`crate::app::Message`] values;
//! no session state lives on this side.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
