//! Command handlers for the `longpaths` CLI

pub mod check;
pub mod config;

pub use check::{handle_check_command, CheckArgs};
pub use config::{handle_config_command, ConfigArgs};
