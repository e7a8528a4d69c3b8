//! Workout command implementation.
//!
//! Wires the sequencer to its collaborators: a display sink chosen by the
//! output format, a sound player (real or no-op), and the system clock.

use std::io;
use std::path::PathBuf;

use crate::audio::{ClipBank, CpalPlayer, NoopPlayer};
use crate::cli::args::{Cli, OutputFormat};
use crate::config::{Settings, WorkoutConfig};
use crate::core::traits::{DisplaySink, SoundPlayer};
use crate::error::HiitError;
use crate::output::{JsonDisplay, TerminalDisplay};
use crate::sequencer::{Sequencer, SystemClock};

/// Run a full workout from the parsed CLI arguments and loaded settings.
///
/// # Errors
///
/// Returns `HiitError::Config` for invalid parameters and
/// `HiitError::AssetLoad` if sound clips or the audio output are
/// unavailable (unless `--silent` is given).
pub fn workout(cli: &Cli, settings: &Settings) -> Result<(), HiitError> {
    let config = WorkoutConfig::from_sources(cli, settings)?;

    let silent = cli.silent || !settings.sound.enabled;
    if silent {
        drive(&config, cli.output, &NoopPlayer)
    } else {
        let bank = ClipBank::load(&sound_dir(cli, settings))?;
        let player = CpalPlayer::new(bank, settings.sound.volume)?;
        drive(&config, cli.output, &player)
    }
}

fn drive(
    config: &WorkoutConfig,
    output: OutputFormat,
    player: &dyn SoundPlayer,
) -> Result<(), HiitError> {
    let mut clock = SystemClock;
    let mut display: Box<dyn DisplaySink> = match output {
        OutputFormat::Pretty => Box::new(TerminalDisplay::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonDisplay::new(io::stdout())),
    };

    Sequencer::new(config, display.as_mut(), player, &mut clock).run()
}

/// Resolve the clip directory: CLI flag, then config file, then `./sounds`.
fn sound_dir(cli: &Cli, settings: &Settings) -> PathBuf {
    cli.sound_dir
        .clone()
        .or_else(|| settings.sound.dir.clone())
        .unwrap_or_else(|| PathBuf::from(crate::audio::DEFAULT_SOUND_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_sound_dir_defaults_to_local_sounds() {
        let cli = parse(&["hiit", "-r", "1", "-e", "1", "-d", "10"]);
        let settings = Settings::default();
        assert_eq!(sound_dir(&cli, &settings), PathBuf::from("sounds"));
    }

    #[test]
    fn test_sound_dir_cli_flag_wins() {
        let cli = parse(&[
            "hiit", "-r", "1", "-e", "1", "-d", "10", "--sound-dir", "/tmp/clips",
        ]);
        let mut settings = Settings::default();
        settings.sound.dir = Some(PathBuf::from("/etc/clips"));
        assert_eq!(sound_dir(&cli, &settings), PathBuf::from("/tmp/clips"));
    }

    #[test]
    fn test_workout_rejects_zero_rounds_before_touching_audio() {
        let cli = parse(&["hiit", "-r", "0", "-e", "1", "-d", "10"]);
        let settings = Settings::default();
        assert!(matches!(
            workout(&cli, &settings),
            Err(HiitError::Config(_))
        ));
    }
}
