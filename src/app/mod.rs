//! Application layer: session state and command handling.
//!
//! # Structure
//!
//! - `state` - the session controller every command goes through
//! - `document` - the file binding of the open document
//! - `style` - the display style applied to the whole document
//! - `messages` - the command set dispatched through the FLTK channel
//! - `error`, `text_ops`, `file_filters` - support pieces

pub mod document;
pub mod error;
pub mod file_filters;
pub mod messages;
pub mod state;
pub mod style;
pub mod text_ops;

// Re-exports for convenient external access
pub use document::Document;
pub use error::{AppError, Result};
pub use messages::Message;
pub use state::EditorState;
pub use style::{FONT_SIZES, FontFamily, StyleState};
