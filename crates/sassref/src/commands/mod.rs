//! CLI subcommands.

pub mod build;
pub mod config;
pub mod contents;
pub mod init;
