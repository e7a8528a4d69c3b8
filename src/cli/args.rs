use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "hiit")]
#[command(about = "A command-line interval workout timer")]
#[command(long_about = "hiit - A command-line interval workout timer

Counts down exercise and rest intervals across a configurable number of
rounds, redrawing the terminal once per second and playing audio cues at
phase boundaries: a short whistle at the start of each exercise, beeps on
the final seconds, a long whistle before each rest, and a buzzer at the
end of each round.

QUICK START:
  hiit -r 3 -e 5 -d 45                 3 rounds of 5 x 45s exercises
  hiit -r 3 -e 5 -d 45 -b 20 -B 90     custom rest lengths
  hiit -r 1 -e 8 -d 30 --silent        no audio cues

Sound clips are loaded from ./sounds by default (whistle_short.wav,
whistle_long.wav, buzzer.wav, beep.wav). Use --sound-dir or the config
file (~/.hiit/config.yaml) to point somewhere else.")]
#[command(version, propagate_version = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Number of rounds in the workout
    #[arg(short, long, required = true)]
    pub rounds: Option<u32>,

    /// Number of exercises per round
    #[arg(short, long, required = true)]
    pub exercises: Option<u32>,

    /// Duration of one exercise, in seconds
    #[arg(short, long, required = true)]
    pub duration: Option<u32>,

    /// Rest between exercises, in seconds (default: 15)
    #[arg(short = 'b', long)]
    pub exercise_break: Option<u32>,

    /// Rest between rounds, in seconds (default: 60)
    #[arg(short = 'B', long)]
    pub round_break: Option<u32>,

    /// Length of the pre-start countdown, in seconds (default: 10)
    #[arg(long)]
    pub countdown: Option<u32>,

    /// Disable audio cues
    #[arg(long)]
    pub silent: bool,

    /// Directory containing the sound clips
    #[arg(long, value_name = "DIR")]
    pub sound_dir: Option<PathBuf>,

    /// Output format for countdown ticks
    ///
    /// Use 'pretty' for a full-screen terminal countdown (default),
    /// or 'json' for one machine-readable line per tick.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for countdown ticks.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full-screen terminal countdown.
    #[default]
    Pretty,
    /// One JSON line per tick.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    ///
    /// Outputs a completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: hiit completions bash > ~/.bash_completion.d/hiit
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}
