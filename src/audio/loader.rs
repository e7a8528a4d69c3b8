//! WAV clip loading.
//!
//! Clips are decoded once at startup into normalized mono f32 buffers so
//! the audio callback never touches the filesystem.

use std::path::Path;
use std::sync::Arc;

use hound::{SampleFormat, WavReader};

use crate::audio::clip::SoundClip;
use crate::error::HiitError;

/// A decoded clip: mono samples at the file's native rate.
#[derive(Debug, Clone)]
pub struct ClipData {
    /// Normalized samples in -1.0..=1.0.
    pub samples: Vec<f32>,
    /// Sample rate of the file.
    pub sample_rate: u32,
}

/// Load and decode a single WAV file.
///
/// Integer and float formats are both accepted; multi-channel files are
/// downmixed to mono.
///
/// # Errors
///
/// Returns `HiitError::AssetLoad` naming the path if the file is missing
/// or cannot be decoded.
pub fn load_clip(path: &Path) -> Result<ClipData, HiitError> {
    let reader = WavReader::open(path)
        .map_err(|e| HiitError::AssetLoad(format!("{}: {e}", path.display())))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Int => {
            let full_scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<Result<_, _>>()
                .map_err(|e| HiitError::AssetLoad(format!("{}: {e}", path.display())))?
        }
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| HiitError::AssetLoad(format!("{}: {e}", path.display())))?,
    };

    Ok(ClipData {
        samples: downmix(samples, spec.channels),
        sample_rate: spec.sample_rate,
    })
}

/// Average interleaved channels into a mono buffer.
fn downmix(samples: Vec<f32>, channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return samples;
    }

    let channels = channels as usize;
    samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// All four clips, loaded from one directory.
#[derive(Clone, Debug)]
pub struct ClipBank {
    clips: [Arc<ClipData>; 4],
}

impl ClipBank {
    /// Load every clip from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `HiitError::AssetLoad` on the first clip that fails,
    /// naming its path.
    pub fn load(dir: &Path) -> Result<Self, HiitError> {
        fn one(dir: &Path, clip: SoundClip) -> Result<Arc<ClipData>, HiitError> {
            Ok(Arc::new(load_clip(&dir.join(clip.file_name()))?))
        }

        Ok(Self {
            clips: [
                one(dir, SoundClip::ShortWhistle)?,
                one(dir, SoundClip::LongWhistle)?,
                one(dir, SoundClip::Buzzer)?,
                one(dir, SoundClip::Beep)?,
            ],
        })
    }

    /// Look up a clip by name.
    #[must_use]
    pub fn get(&self, clip: SoundClip) -> Arc<ClipData> {
        Arc::clone(&self.clips[clip.index()])
    }
}
