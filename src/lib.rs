pub mod browser;
pub mod catalog;
pub mod content;
pub mod editor;
pub mod effects;
pub mod log;
pub mod output;
pub mod persist;
pub mod shell;
pub mod system;
pub mod terminal;
pub mod theme;
pub mod vfs;
mod vfs_persist;

pub use system::System;
pub use terminal::{Request, Response, Terminal, TerminalConfig};
