pub mod commands;
pub mod config;
pub mod generate;
pub mod options;
pub mod themes;
pub mod tui;
