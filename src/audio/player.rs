//! Fire-and-forget clip playback over a cpal output stream.
//!
//! `play` pushes a clip id onto a lock-free SPSC queue; the audio
//! callback pops pending cues into active voices and mixes them into the
//! output buffer. Internally everything is f32; conversion to the device
//! format happens when writing the output frame.

use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample, Stream, StreamConfig};
use ringbuf::{
    traits::{Consumer, Producer, Split},
    HeapRb,
};

use crate::audio::clip::SoundClip;
use crate::audio::loader::{ClipBank, ClipData};
use crate::core::traits::SoundPlayer;
use crate::error::HiitError;

type CueProducer = ringbuf::HeapProd<SoundClip>;
type CueConsumer = ringbuf::HeapCons<SoundClip>;

/// Pending cues between the tick loop and the audio callback.
const CUE_QUEUE_CAPACITY: usize = 16;

/// Simultaneously sounding clips; further cues are dropped.
const MAX_VOICES: usize = 8;

fn cue_channel(capacity: usize) -> (CueProducer, CueConsumer) {
    let rb = HeapRb::<SoundClip>::new(capacity);
    rb.split()
}

/// One playing clip instance.
struct Voice {
    clip: Arc<ClipData>,
    position: f64,
    step: f64,
}

impl Voice {
    fn new(clip: Arc<ClipData>, output_rate: f32) -> Self {
        let step = f64::from(clip.sample_rate) / f64::from(output_rate);
        Self {
            clip,
            position: 0.0,
            step,
        }
    }

    /// Next mono sample, linearly interpolated at the output rate.
    fn next_sample(&mut self) -> f32 {
        let data = &self.clip.samples;
        let index = self.position as usize;
        if index >= data.len() {
            return 0.0;
        }

        let current = data[index];
        let next = data.get(index + 1).copied().unwrap_or(0.0);
        let frac = self.position.fract() as f32;

        self.position += self.step;
        current + (next - current) * frac
    }

    fn finished(&self) -> bool {
        self.position as usize >= self.clip.samples.len()
    }
}

/// Plays pre-loaded clips on the default audio output device.
pub struct CpalPlayer {
    cues: Mutex<CueProducer>,
    _stream: Stream,
}

impl CpalPlayer {
    /// Open the default output device and start the mixing stream.
    ///
    /// # Errors
    ///
    /// Returns `HiitError::AssetLoad` if no output device is available or
    /// the stream cannot be built or started.
    pub fn new(bank: ClipBank, volume: f32) -> Result<Self, HiitError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or_else(|| {
            HiitError::AssetLoad("No audio output device found (try --silent)".to_string())
        })?;

        let supported = device
            .default_output_config()
            .map_err(|e| HiitError::AssetLoad(format!("No default audio output config: {e}")))?;

        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();
        let channels = config.channels as usize;
        let sample_rate = config.sample_rate.0 as f32;

        let (producer, consumer) = cue_channel(CUE_QUEUE_CAPACITY);

        let stream = match sample_format {
            SampleFormat::F32 => {
                build_stream::<f32>(&device, &config, channels, sample_rate, bank, consumer, volume)
            }
            SampleFormat::I16 => {
                build_stream::<i16>(&device, &config, channels, sample_rate, bank, consumer, volume)
            }
            SampleFormat::U16 => {
                build_stream::<u16>(&device, &config, channels, sample_rate, bank, consumer, volume)
            }
            other => Err(HiitError::AssetLoad(format!(
                "Unsupported sample format: {other:?}"
            ))),
        }?;

        stream
            .play()
            .map_err(|e| HiitError::AssetLoad(format!("Failed to start audio stream: {e}")))?;

        Ok(Self {
            cues: Mutex::new(producer),
            _stream: stream,
        })
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    channels: usize,
    sample_rate: f32,
    bank: ClipBank,
    mut cues: CueConsumer,
    volume: f32,
) -> Result<Stream, HiitError>
where
    T: SizedSample + FromSample<f32>,
{
    let mut voices: Vec<Voice> = Vec::with_capacity(MAX_VOICES);

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                while let Some(clip) = cues.try_pop() {
                    if voices.len() < MAX_VOICES {
                        voices.push(Voice::new(bank.get(clip), sample_rate));
                    }
                }

                for frame in data.chunks_mut(channels) {
                    let mut mixed = 0.0_f32;
                    for voice in &mut voices {
                        mixed += voice.next_sample();
                    }
                    voices.retain(|v| !v.finished());

                    let value = T::from_sample((mixed * volume).clamp(-1.0, 1.0));
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                }
            },
            |err| eprintln!("audio stream error: {err}"),
            None,
        )
        .map_err(|e| HiitError::AssetLoad(format!("Failed to build audio stream: {e}")))
}

impl SoundPlayer for CpalPlayer {
    fn play(&self, clip: SoundClip) {
        if let Ok(mut cues) = self.cues.lock() {
            // Queue full: drop the cue rather than block the tick loop.
            let _ = cues.try_push(clip);
        }
    }
}

/// Player used with `--silent`: accepts every cue and plays nothing.
pub struct NoopPlayer;

impl SoundPlayer for NoopPlayer {
    fn play(&self, _clip: SoundClip) {}
}
