//! Shared types and traits for the workout loop.

pub mod frame;
pub mod traits;

pub use frame::{BreakKind, TickFrame};
