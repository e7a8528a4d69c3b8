//! The fixed set of named sound clips.

use serde::Serialize;

/// A named audio cue.
///
/// The set is fixed; each variant maps to one WAV file in the sound
/// directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundClip {
    /// Start of an exercise.
    ShortWhistle,
    /// End of an exercise, before the rest.
    LongWhistle,
    /// End of a round.
    Buzzer,
    /// Per-second warning on the final seconds of a countdown.
    Beep,
}

impl SoundClip {
    /// All clips, in bank order.
    pub const ALL: [Self; 4] = [
        Self::ShortWhistle,
        Self::LongWhistle,
        Self::Buzzer,
        Self::Beep,
    ];

    /// File name of this clip inside the sound directory.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::ShortWhistle => "whistle_short.wav",
            Self::LongWhistle => "whistle_long.wav",
            Self::Buzzer => "buzzer.wav",
            Self::Beep => "beep.wav",
        }
    }

    /// Position of this clip in [`Self::ALL`] and in the clip bank.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::ShortWhistle => 0,
            Self::LongWhistle => 1,
            Self::Buzzer => 2,
            Self::Beep => 3,
        }
    }
}
