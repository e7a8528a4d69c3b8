//! The workout sequencer.
//!
//! Drives the full workout from pre-start countdown to completion:
//! - One display update and optional sound cue per second
//! - Nested progression over rounds, exercises, and rests
//! - Ephemeral session state, destroyed when the run completes

pub mod clock;
pub mod engine;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use engine::Sequencer;
pub use session::{Phase, SessionState};
