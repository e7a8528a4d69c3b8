//! Error types for hiit.

use thiserror::Error;

/// Errors that can occur while configuring or running a workout.
#[derive(Error, Debug)]
pub enum HiitError {
    /// Invalid or missing configuration (CLI parameters or config file).
    ///
    /// Always detected before the countdown starts.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A sound clip could not be loaded or the audio output could not be
    /// opened. Fatal at startup; never occurs once the workout is running.
    #[error("Sound error: {0}")]
    AssetLoad(String),

    /// The display sink failed to write to the terminal.
    #[error("Display error: {0}")]
    Display(String),
}
