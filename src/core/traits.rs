//! Capability traits injected into the sequencer.
//!
//! The sequencer drives the workout through these two seams: a display
//! sink that redraws the full state every second, and a fire-and-forget
//! sound player. Tests substitute recording implementations to assert on
//! the emitted tick and cue sequences without a terminal or audio device.

use crate::audio::SoundClip;
use crate::core::frame::TickFrame;
use crate::error::HiitError;

/// Renders workout state to the user.
///
/// Every call replaces whatever was shown before; implementations own
/// clearing and redrawing.
#[cfg_attr(test, mockall::automock)]
pub trait DisplaySink {
    /// Draw one tick of workout state.
    fn render(&mut self, frame: &TickFrame) -> Result<(), HiitError>;

    /// Draw one tick of the pre-start countdown.
    fn render_countdown(&mut self, remaining: u32) -> Result<(), HiitError>;

    /// Draw the completion message after the final round.
    fn render_complete(&mut self) -> Result<(), HiitError>;
}

/// Plays a named sound clip.
///
/// Non-blocking: the call returns immediately and playback overlaps the
/// following ticks. A cue that cannot be honored is dropped, never an
/// error, so audio can never stall or abort the countdown.
#[cfg_attr(test, mockall::automock)]
pub trait SoundPlayer {
    /// Request playback of a clip.
    fn play(&self, clip: SoundClip);
}
