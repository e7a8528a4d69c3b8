//! Display payload emitted once per tick.

use serde::Serialize;

/// Which kind of rest a break tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    /// Rest between two exercises of the same round.
    Exercise,
    /// Rest between two rounds.
    Round,
}

impl BreakKind {
    /// Label shown next to the break countdown.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exercise => "Exercise",
            Self::Round => "Round",
        }
    }
}

/// One second of workout state, as handed to the display sink.
///
/// During a break the frame carries the *upcoming* round/exercise context
/// with `time_counter` pinned to zero, and the break countdown in
/// `break_kind`/`break_remaining`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickFrame {
    /// Current round, 1-based.
    pub round: u32,
    /// Total number of rounds.
    pub rounds_total: u32,
    /// Current exercise, 1-based (0 during a round break).
    pub exercise: u32,
    /// Total exercises per round.
    pub exercise_total: u32,
    /// Seconds remaining in the current exercise.
    pub time_counter: u32,
    /// Set while resting.
    pub break_kind: Option<BreakKind>,
    /// Seconds remaining in the current break.
    pub break_remaining: Option<u32>,
}

impl TickFrame {
    /// Frame for an exercise countdown tick.
    #[must_use]
    pub const fn exercise(
        round: u32,
        rounds_total: u32,
        exercise: u32,
        exercise_total: u32,
        remaining: u32,
    ) -> Self {
        Self {
            round,
            rounds_total,
            exercise,
            exercise_total,
            time_counter: remaining,
            break_kind: None,
            break_remaining: None,
        }
    }

    /// Frame for a break tick, labeled with the upcoming context.
    #[must_use]
    pub const fn during_break(
        round: u32,
        rounds_total: u32,
        exercise: u32,
        exercise_total: u32,
        kind: BreakKind,
        remaining: u32,
    ) -> Self {
        Self {
            round,
            rounds_total,
            exercise,
            exercise_total,
            time_counter: 0,
            break_kind: Some(kind),
            break_remaining: Some(remaining),
        }
    }
}
