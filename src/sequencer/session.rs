//! Ephemeral per-run session state.

use std::fmt;

/// Which part of the workout the current tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The "We start in N" countdown before the first round.
    PreStart,
    /// An exercise countdown.
    Countdown,
    /// Rest between two exercises.
    ExerciseBreak,
    /// Rest between two rounds.
    RoundBreak,
    /// The workout is over.
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreStart => write!(f, "Pre-start"),
            Self::Countdown => write!(f, "Countdown"),
            Self::ExerciseBreak => write!(f, "Exercise break"),
            Self::RoundBreak => write!(f, "Round break"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// Where the run currently is.
///
/// Mutated only by the sequencer's own loop and dropped when the run
/// completes. Invariants, observed at every tick:
/// `1 <= current_round <= rounds`,
/// `current_exercise <= exercises_per_round` (0 during the pre-start
/// countdown and round breaks), `seconds_remaining >= 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Current round, 1-based.
    pub current_round: u32,
    /// Current exercise, 1-based; 0 before the round starts.
    pub current_exercise: u32,
    /// Current phase.
    pub phase: Phase,
    /// Seconds left in the current phase.
    pub seconds_remaining: u32,
}

impl SessionState {
    /// State at the very beginning of a run.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_round: 1,
            current_exercise: 0,
            phase: Phase::PreStart,
            seconds_remaining: 0,
        }
    }

    /// Record the position of the tick about to be emitted.
    pub fn observe(&mut self, round: u32, exercise: u32, phase: Phase, remaining: u32) {
        self.current_round = round;
        self.current_exercise = exercise;
        self.phase = phase;
        self.seconds_remaining = remaining;
    }

    /// Check the tick invariants against the configured totals.
    ///
    /// Only meaningful while the run is in progress.
    #[must_use]
    pub fn in_bounds(&self, rounds: u32, exercises_per_round: u32) -> bool {
        (1..=rounds).contains(&self.current_round)
            && self.current_exercise <= exercises_per_round
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.current_round, 1);
        assert_eq!(state.current_exercise, 0);
        assert_eq!(state.phase, Phase::PreStart);
    }

    #[test]
    fn test_observe_updates_position() {
        let mut state = SessionState::new();
        state.observe(2, 3, Phase::Countdown, 7);
        assert_eq!(state.current_round, 2);
        assert_eq!(state.current_exercise, 3);
        assert_eq!(state.phase, Phase::Countdown);
        assert_eq!(state.seconds_remaining, 7);
    }

    #[test]
    fn test_in_bounds() {
        let mut state = SessionState::new();
        state.observe(2, 0, Phase::RoundBreak, 30);
        assert!(state.in_bounds(3, 5));

        state.observe(4, 0, Phase::RoundBreak, 30);
        assert!(!state.in_bounds(3, 5));

        state.observe(1, 6, Phase::Countdown, 10);
        assert!(!state.in_bounds(3, 5));
    }

    #[test]
    fn test_phase_display_names() {
        assert_eq!(Phase::PreStart.to_string(), "Pre-start");
        assert_eq!(Phase::ExerciseBreak.to_string(), "Exercise break");
    }
}
