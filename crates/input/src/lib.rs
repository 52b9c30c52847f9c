//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`]. Reading
//! the events stays with the caller; this crate only decides what a key means.

pub mod map;

pub use tui_dodge_types as types;

pub use map::{handle_key_event, is_interrupt, is_press};
