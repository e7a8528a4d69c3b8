//! Configuration management for hiit.
//!
//! This module handles the config file in `~/.hiit/` and the validated
//! workout parameters built from CLI arguments and file defaults.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Settings, SoundSettings, WorkoutConfig, WorkoutDefaults};
