//! TUI Dodge (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_dodge::{core,input,term,types}`;
//! the implementation lives in dedicated crates under `crates/`.

pub use tui_dodge_core as core;
pub use tui_dodge_input as input;
pub use tui_dodge_term as term;
pub use tui_dodge_types as types;
