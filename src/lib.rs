//! hiit - A command-line interval workout timer
//!
//! This crate counts down exercise and rest intervals across a configurable
//! number of rounds, redrawing the terminal once per second and playing
//! audio cues at phase boundaries.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod sequencer;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use config::{Settings, WorkoutConfig};
pub use error::HiitError;
pub use sequencer::Sequencer;
