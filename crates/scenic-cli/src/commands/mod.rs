//! Command handlers, one module per action.

pub mod completions;
pub mod config;
pub mod init;
pub mod scene;
pub mod templates;
