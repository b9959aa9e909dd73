//! Keyboard input classification.
//!
//! Native key codes arrive from the host as plain integers. This module wraps
//! them in [`KeyCode`] values tagged with [`KeyCategory`] flags so editor code
//! can ask "is this an arrow key?" without knowing platform constants.

pub mod key_code;
pub mod table;

pub use key_code::{KeyCategory, KeyCode};
pub use table::{KeyEntry, KeyTable, KeyTableError};
