//! Annotation layer and keyboard classification for a chemical structure editor.
//!
//! The [`draw`] module holds the drawable annotation contract and its Cairo
//! rendering, [`input`] classifies browser key codes, and [`config`] loads
//! user defaults for both.

pub mod config;
pub mod draw;
pub mod input;
pub mod scene;
pub mod util;

pub use config::Config;
pub use draw::DrawingObject;
pub use input::{KeyCategory, KeyCode, KeyTable};
