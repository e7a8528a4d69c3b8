//! Audio cues for the workout loop.
//!
//! Clips are short WAV files pre-loaded into memory at startup and mixed
//! into a cpal output stream. The sequencer only ever names a clip; the
//! player owns the samples and the audio thread.

mod clip;
mod loader;
mod player;

pub use clip::SoundClip;
pub use loader::{load_clip, ClipBank, ClipData};
pub use player::{CpalPlayer, NoopPlayer};

/// Default directory the clip files are loaded from.
pub const DEFAULT_SOUND_DIR: &str = "sounds";
