// Command line front end for the family tree
// This crate wires configuration, storage, editing and export together

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;

pub use app::{FamilyTreeApp, SaveOutcome, TreeStats};
pub use cli::{Cli, Command};
pub use commands::run;
pub use config::AppConfig;
