//! Command implementations for the hiit CLI.

mod completions;
mod workout;

pub use completions::completions;
pub use workout::workout;
