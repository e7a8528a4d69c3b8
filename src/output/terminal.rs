//! Full-screen terminal countdown.

use std::io::Write;

use chrono::{DateTime, Duration, Local};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::core::frame::TickFrame;
use crate::core::traits::DisplaySink;
use crate::error::HiitError;
use crate::output::COMPLETION_MESSAGE;

/// Redraws the whole workout state once per tick.
///
/// Writes to any `io::Write` so tests can capture the output; the real
/// program hands it stdout.
pub struct TerminalDisplay<W: Write> {
    out: W,
    started_at: DateTime<Local>,
}

impl<W: Write> TerminalDisplay<W> {
    /// Create a display writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            started_at: Local::now(),
        }
    }

    fn clear(&mut self) -> Result<(), HiitError> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|e| HiitError::Display(format!("Failed to clear terminal: {e}")))
    }

    fn write_line(&mut self, line: &str) -> Result<(), HiitError> {
        writeln!(self.out, "{line}")
            .map_err(|e| HiitError::Display(format!("Failed to write to terminal: {e}")))
    }

    fn flush(&mut self) -> Result<(), HiitError> {
        self.out
            .flush()
            .map_err(|e| HiitError::Display(format!("Failed to flush terminal: {e}")))
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn render(&mut self, frame: &TickFrame) -> Result<(), HiitError> {
        self.clear()?;

        self.write_line(&format!(
            "{} {}/{}",
            "Round:".dimmed(),
            frame.round,
            frame.rounds_total
        ))?;
        self.write_line(&format!(
            "{} {}/{}",
            "Exercise:".dimmed(),
            frame.exercise,
            frame.exercise_total
        ))?;

        let counter = format!("{:02}", frame.time_counter);
        let counter = if frame.break_kind.is_none() && frame.time_counter <= 3 {
            counter.red().bold()
        } else {
            counter.bold()
        };
        self.write_line(&counter.to_string())?;

        if let (Some(kind), Some(remaining)) = (frame.break_kind, frame.break_remaining) {
            self.write_line(&format!("{} break: {remaining:02}", kind.label()).yellow().to_string())?;
        }

        self.flush()
    }

    fn render_countdown(&mut self, remaining: u32) -> Result<(), HiitError> {
        self.clear()?;
        self.write_line(&format!("We start in {remaining}").bold().to_string())?;
        self.flush()
    }

    fn render_complete(&mut self) -> Result<(), HiitError> {
        // Leave the final tick on screen and print underneath it.
        self.write_line("")?;
        self.write_line(&COMPLETION_MESSAGE.green().bold().to_string())?;

        let elapsed = Local::now().signed_duration_since(self.started_at);
        self.write_line(&format!("Total time: {}", format_duration(elapsed)).dimmed().to_string())?;
        self.flush()
    }
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::BreakKind;

    fn rendered(frame: &TickFrame) -> String {
        let mut buf = Vec::new();
        let mut display = TerminalDisplay::new(&mut buf);
        display.render(frame).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_shows_round_exercise_and_counter() {
        let out = rendered(&TickFrame::exercise(1, 3, 2, 5, 45));
        assert!(out.contains("Round:"));
        assert!(out.contains("1/3"));
        assert!(out.contains("2/5"));
        assert!(out.contains("45"));
    }

    #[test]
    fn test_render_zero_pads_the_counter() {
        let out = rendered(&TickFrame::exercise(1, 1, 1, 1, 7));
        assert!(out.contains("07"));
    }

    #[test]
    fn test_render_shows_break_line_while_resting() {
        let out = rendered(&TickFrame::during_break(1, 2, 2, 3, BreakKind::Exercise, 9));
        assert!(out.contains("Exercise break: 09"));
        assert!(out.contains("00"), "time counter is pinned to zero");
    }

    #[test]
    fn test_render_omits_break_line_during_exercise() {
        let out = rendered(&TickFrame::exercise(1, 2, 2, 3, 30));
        assert!(!out.contains("break:"));
    }

    #[test]
    fn test_render_countdown() {
        let mut buf = Vec::new();
        let mut display = TerminalDisplay::new(&mut buf);
        display.render_countdown(9).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("We start in 9"));
    }

    #[test]
    fn test_render_complete_keeps_last_state_visible() {
        let mut buf = Vec::new();
        let mut display = TerminalDisplay::new(&mut buf);
        display.render_complete().unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains(COMPLETION_MESSAGE));
        assert!(out.contains("Total time:"));
        // No clear sequence: the message lands under the final tick.
        assert!(!out.contains("\u{1b}[2J"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(42)), "42s");
        assert_eq!(format_duration(Duration::seconds(90)), "1m 30s");
        assert_eq!(format_duration(Duration::seconds(3725)), "1h 02m 05s");
        assert_eq!(format_duration(Duration::seconds(0)), "0s");
    }
}
