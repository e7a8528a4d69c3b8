//! Line-oriented JSON countdown output.
//!
//! One JSON object per tick, suitable for piping into other tools.

use std::io::Write;

use serde_json::json;

use crate::core::frame::TickFrame;
use crate::core::traits::DisplaySink;
use crate::error::HiitError;
use crate::output::COMPLETION_MESSAGE;

/// Emits each tick as a single JSON line.
pub struct JsonDisplay<W: Write> {
    out: W,
}

impl<W: Write> JsonDisplay<W> {
    /// Create a display writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    fn write_value(&mut self, value: &serde_json::Value) -> Result<(), HiitError> {
        writeln!(self.out, "{value}")
            .map_err(|e| HiitError::Display(format!("Failed to write output: {e}")))
    }
}

impl<W: Write> DisplaySink for JsonDisplay<W> {
    fn render(&mut self, frame: &TickFrame) -> Result<(), HiitError> {
        let value = serde_json::to_value(frame)
            .map_err(|e| HiitError::Display(format!("Failed to serialize tick: {e}")))?;
        self.write_value(&value)
    }

    fn render_countdown(&mut self, remaining: u32) -> Result<(), HiitError> {
        self.write_value(&json!({ "countdown": remaining }))
    }

    fn render_complete(&mut self) -> Result<(), HiitError> {
        self.write_value(&json!({ "complete": true, "message": COMPLETION_MESSAGE }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::BreakKind;

    fn lines(buf: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_render_emits_one_parseable_line_per_tick() {
        let mut buf = Vec::new();
        let mut display = JsonDisplay::new(&mut buf);
        display.render(&TickFrame::exercise(1, 2, 1, 3, 30)).unwrap();
        display
            .render(&TickFrame::during_break(1, 2, 2, 3, BreakKind::Exercise, 15))
            .unwrap();

        let lines = lines(&buf);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["round"], 1);
        assert_eq!(lines[0]["time_counter"], 30);
        assert_eq!(lines[1]["break_kind"], "exercise");
        assert_eq!(lines[1]["break_remaining"], 15);
        assert_eq!(lines[1]["time_counter"], 0);
    }

    #[test]
    fn test_render_countdown_line() {
        let mut buf = Vec::new();
        let mut display = JsonDisplay::new(&mut buf);
        display.render_countdown(10).unwrap();

        let lines = lines(&buf);
        assert_eq!(lines[0]["countdown"], 10);
    }

    #[test]
    fn test_render_complete_line() {
        let mut buf = Vec::new();
        let mut display = JsonDisplay::new(&mut buf);
        display.render_complete().unwrap();

        let lines = lines(&buf);
        assert_eq!(lines[0]["complete"], true);
        assert_eq!(lines[0]["message"], COMPLETION_MESSAGE);
    }
}
