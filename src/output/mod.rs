//! Display sinks for the countdown.
//!
//! Two implementations of the same contract: a full-screen terminal
//! countdown and a line-oriented JSON stream for scripting.

mod json;
mod terminal;

pub use json::JsonDisplay;
pub use terminal::{format_duration, TerminalDisplay};

/// Message shown when the final round ends.
pub const COMPLETION_MESSAGE: &str = "Extra fries are done for today!";
