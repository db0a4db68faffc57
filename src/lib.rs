//! Tokenize Copilot: turns contract field names into `#[TOKEN]#` placeholders.

pub mod app;
pub mod cli;
pub mod engine;
pub mod input;
pub mod logging;
pub mod ui;
