//! Command-line interface for hiit.

pub mod args;
pub mod commands;
