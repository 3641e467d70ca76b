//! A small, no-frills desktop text editor built on FLTK.
//!
//! The crate splits into two layers: [`app`] owns the session state and
//! the command handlers, [`ui`] builds the widgets and wires menu items
//! and keyboard shortcuts to [`app::messages::Message`] values that the
//! event loop in `main` dispatches back into the session controller.

pub mod app;
pub mod ui;
