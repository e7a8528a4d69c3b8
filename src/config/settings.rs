//! Configuration settings for hiit.
//!
//! File-backed defaults are loaded from `~/.hiit/config.yaml`; the
//! validated [`WorkoutConfig`] merges them with CLI arguments.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::Cli;
use crate::config::Paths;
use crate::error::HiitError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Default workout parameters.
    pub workout: WorkoutDefaults,
    /// Sound playback settings.
    pub sound: SoundSettings,
}

/// File-backed defaults for the optional workout parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutDefaults {
    /// Rest between exercises, in seconds.
    #[serde(default = "default_exercise_break")]
    pub exercise_break: u32,
    /// Rest between rounds, in seconds.
    #[serde(default = "default_round_break")]
    pub round_break: u32,
    /// Length of the pre-start countdown, in seconds.
    #[serde(default = "default_countdown")]
    pub countdown: u32,
}

/// Sound playback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    /// Play audio cues.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Directory containing the sound clips (default: `./sounds`).
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Playback volume, 0.0 to 1.0.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

// Default value functions for serde
const fn default_exercise_break() -> u32 {
    15
}

const fn default_round_break() -> u32 {
    60
}

const fn default_countdown() -> u32 {
    10
}

const fn default_true() -> bool {
    true
}

const fn default_volume() -> f32 {
    0.8
}

impl Default for WorkoutDefaults {
    fn default() -> Self {
        Self {
            exercise_break: default_exercise_break(),
            round_break: default_round_break(),
            countdown: default_countdown(),
        }
    }
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            dir: None,
            volume: default_volume(),
        }
    }
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// If the config file doesn't exist, returns default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or contains an out-of-range volume.
    pub fn load() -> Result<Self, HiitError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load settings from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or contains an out-of-range volume.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, HiitError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            HiitError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let settings: Self = serde_yaml::from_str(&contents).map_err(|e| {
            HiitError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), HiitError> {
        if !(0.0..=1.0).contains(&self.sound.volume) {
            return Err(HiitError::Config(format!(
                "Sound volume must be between 0.0 and 1.0, got {}",
                self.sound.volume
            )));
        }
        Ok(())
    }
}

/// Validated workout parameters, immutable for the session.
///
/// Constructed once from CLI arguments and file-backed defaults, then
/// passed down to the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutConfig {
    /// Number of rounds (at least 1).
    pub rounds: u32,
    /// Exercises per round (at least 1).
    pub exercises_per_round: u32,
    /// Duration of one exercise, in seconds.
    pub exercise_duration: u32,
    /// Rest between exercises, in seconds.
    pub exercise_break: u32,
    /// Rest between rounds, in seconds.
    pub round_break: u32,
    /// Length of the pre-start countdown, in seconds.
    pub countdown: u32,
}

impl WorkoutConfig {
    /// Create a validated workout configuration.
    ///
    /// # Errors
    ///
    /// Returns `HiitError::Config` if `rounds` or `exercises_per_round`
    /// is zero.
    pub fn new(
        rounds: u32,
        exercises_per_round: u32,
        exercise_duration: u32,
        exercise_break: u32,
        round_break: u32,
        countdown: u32,
    ) -> Result<Self, HiitError> {
        if rounds == 0 {
            return Err(HiitError::Config(
                "A workout needs at least one round".to_string(),
            ));
        }
        if exercises_per_round == 0 {
            return Err(HiitError::Config(
                "A workout needs at least one exercise per round".to_string(),
            ));
        }

        Ok(Self {
            rounds,
            exercises_per_round,
            exercise_duration,
            exercise_break,
            round_break,
            countdown,
        })
    }

    /// Build the configuration from CLI arguments and loaded settings.
    ///
    /// CLI flags win over the config file, which wins over the built-in
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `HiitError::Config` if a required parameter is missing or
    /// out of range.
    pub fn from_sources(cli: &Cli, settings: &Settings) -> Result<Self, HiitError> {
        let rounds = cli
            .rounds
            .ok_or_else(|| HiitError::Config("Missing required parameter: rounds".to_string()))?;
        let exercises = cli.exercises.ok_or_else(|| {
            HiitError::Config("Missing required parameter: exercises".to_string())
        })?;
        let duration = cli
            .duration
            .ok_or_else(|| HiitError::Config("Missing required parameter: duration".to_string()))?;

        Self::new(
            rounds,
            exercises,
            duration,
            cli.exercise_break.unwrap_or(settings.workout.exercise_break),
            cli.round_break.unwrap_or(settings.workout.round_break),
            cli.countdown.unwrap_or(settings.workout.countdown),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_workout_config_defaults() {
        let config = WorkoutConfig::new(3, 5, 45, 15, 60, 10).unwrap();
        assert_eq!(config.rounds, 3);
        assert_eq!(config.exercise_break, 15);
        assert_eq!(config.round_break, 60);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(WorkoutConfig::new(0, 5, 45, 15, 60, 10).is_err());
    }

    #[test]
    fn test_zero_exercises_rejected() {
        assert!(WorkoutConfig::new(3, 0, 45, 15, 60, 10).is_err());
    }

    #[test]
    fn test_zero_duration_allowed() {
        let config = WorkoutConfig::new(1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(config.exercise_duration, 0);
    }

    #[test]
    fn test_from_sources_applies_file_defaults() {
        let cli = Cli::parse_from(["hiit", "-r", "2", "-e", "3", "-d", "30"]);
        let settings = Settings::default();
        let config = WorkoutConfig::from_sources(&cli, &settings).unwrap();

        assert_eq!(config.exercise_break, 15);
        assert_eq!(config.round_break, 60);
        assert_eq!(config.countdown, 10);
    }

    #[test]
    fn test_from_sources_cli_wins_over_file() {
        let cli = Cli::parse_from(["hiit", "-r", "2", "-e", "3", "-d", "30", "-b", "5"]);
        let mut settings = Settings::default();
        settings.workout.exercise_break = 25;
        settings.workout.round_break = 90;

        let config = WorkoutConfig::from_sources(&cli, &settings).unwrap();
        assert_eq!(config.exercise_break, 5);
        assert_eq!(config.round_break, 90);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(&dir.path().join("config.yaml")).unwrap();
        assert!(settings.sound.enabled);
        assert_eq!(settings.workout.exercise_break, 15);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "workout:\n  round_break: 120").unwrap();

        let settings = Settings::load_from_path(&path).unwrap();
        assert_eq!(settings.workout.round_break, 120);
        assert_eq!(settings.workout.exercise_break, 15);
    }

    #[test]
    fn test_load_rejects_out_of_range_volume() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "sound:\n  volume: 1.5").unwrap();

        assert!(Settings::load_from_path(&path).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "workout: [not a map").unwrap();

        assert!(Settings::load_from_path(&path).is_err());
    }
}
