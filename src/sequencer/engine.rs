//! The countdown engine.
//!
//! Runs the whole workout on one thread. Every tick renders the current
//! state, optionally requests a sound cue, then pauses until the next
//! tick boundary. Counting loops over a duration `N` include both
//! endpoints, so an `N`-second interval shows `N + 1` values ending on 0
//! before the workout advances.

use crate::audio::SoundClip;
use crate::config::WorkoutConfig;
use crate::core::frame::{BreakKind, TickFrame};
use crate::core::traits::{DisplaySink, SoundPlayer};
use crate::error::HiitError;
use crate::sequencer::clock::Clock;
use crate::sequencer::session::{Phase, SessionState};

/// Exercise seconds that get a warning beep (`remaining <= 3`).
const FINAL_SECONDS_BEEPED: u32 = 3;

/// Pre-start seconds that get a warning beep.
const PRESTART_SECONDS_BEEPED: u32 = 4;

/// Drives one workout from pre-start countdown to completion.
pub struct Sequencer<'a> {
    config: &'a WorkoutConfig,
    display: &'a mut dyn DisplaySink,
    player: &'a dyn SoundPlayer,
    clock: &'a mut dyn Clock,
    state: SessionState,
}

impl<'a> Sequencer<'a> {
    /// Wire a sequencer to its collaborators.
    pub fn new(
        config: &'a WorkoutConfig,
        display: &'a mut dyn DisplaySink,
        player: &'a dyn SoundPlayer,
        clock: &'a mut dyn Clock,
    ) -> Self {
        Self {
            config,
            display,
            player,
            clock,
            state: SessionState::new(),
        }
    }

    /// Run the workout to completion.
    ///
    /// Consumes the sequencer; the session state does not outlive the
    /// run.
    ///
    /// # Errors
    ///
    /// Propagates the first display failure. Sound cues are
    /// fire-and-forget and cannot fail here.
    pub fn run(mut self) -> Result<(), HiitError> {
        self.pre_start()?;

        let rounds = self.config.rounds;
        let exercises = self.config.exercises_per_round;

        for round in 1..=rounds {
            for exercise in 1..=exercises {
                self.run_exercise(round, exercise)?;

                if exercise != exercises {
                    self.player.play(SoundClip::LongWhistle);
                    self.apply_break(
                        round,
                        exercise + 1,
                        BreakKind::Exercise,
                        self.config.exercise_break,
                    )?;
                }
            }

            self.player.play(SoundClip::Buzzer);

            if round != rounds {
                self.apply_break(round + 1, 0, BreakKind::Round, self.config.round_break)?;
            }
        }

        self.state.observe(rounds, exercises, Phase::Done, 0);
        self.display.render_complete()
    }

    /// The "We start in N" countdown, beeping on the final seconds.
    fn pre_start(&mut self) -> Result<(), HiitError> {
        for remaining in (1..=self.config.countdown).rev() {
            self.observe(1, 0, Phase::PreStart, remaining);
            self.display.render_countdown(remaining)?;
            if remaining <= PRESTART_SECONDS_BEEPED {
                self.player.play(SoundClip::Beep);
            }
            self.clock.pause();
        }
        Ok(())
    }

    /// One exercise: a whistle, then `duration + 1` countdown ticks.
    fn run_exercise(&mut self, round: u32, exercise: u32) -> Result<(), HiitError> {
        self.player.play(SoundClip::ShortWhistle);

        let duration = self.config.exercise_duration;
        for elapsed in 0..=duration {
            let remaining = duration - elapsed;
            self.observe(round, exercise, Phase::Countdown, remaining);
            self.display.render(&TickFrame::exercise(
                round,
                self.config.rounds,
                exercise,
                self.config.exercises_per_round,
                remaining,
            ))?;
            if remaining <= FINAL_SECONDS_BEEPED {
                self.player.play(SoundClip::Beep);
            }
            self.clock.pause();
        }
        Ok(())
    }

    /// A rest of `break_sec` seconds, labeled with the upcoming
    /// round/exercise context (`exercise` is the *next* index; 0 for a
    /// round break).
    fn apply_break(
        &mut self,
        round: u32,
        exercise: u32,
        kind: BreakKind,
        break_sec: u32,
    ) -> Result<(), HiitError> {
        let phase = match kind {
            BreakKind::Exercise => Phase::ExerciseBreak,
            BreakKind::Round => Phase::RoundBreak,
        };

        for elapsed in 0..=break_sec {
            let remaining = break_sec - elapsed;
            self.observe(round, exercise, phase, remaining);
            self.display.render(&TickFrame::during_break(
                round,
                self.config.rounds,
                exercise,
                self.config.exercises_per_round,
                kind,
                remaining,
            ))?;
            self.clock.pause();
        }
        Ok(())
    }

    fn observe(&mut self, round: u32, exercise: u32, phase: Phase, remaining: u32) {
        self.state.observe(round, exercise, phase, remaining);
        debug_assert!(self
            .state
            .in_bounds(self.config.rounds, self.config.exercises_per_round));
    }
}
