//! Canvas that records calls, for renderer tests

use crate::{Canvas, Color565, DisplayError, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillScreen(Color565),
    FillRect { x: i32, y: i32, w: i32, h: i32, color: Color565 },
    Rect { x: i32, y: i32, w: i32, h: i32, color: Color565 },
    RoundRect { x: i32, y: i32, w: i32, h: i32, color: Color565 },
    Line { from: (i32, i32), to: (i32, i32), color: Color565 },
    Text { text: String, x: i32, y: i32, style: TextStyle },
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).count()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_screen(&mut self, color: Color565) -> Result<(), DisplayError> {
        self.ops.push(Op::FillScreen(color));
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color565) -> Result<(), DisplayError> {
        self.ops.push(Op::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color565) -> Result<(), DisplayError> {
        self.ops.push(Op::Rect { x, y, w, h, color });
        Ok(())
    }

    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        _radius: i32,
        color: Color565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::RoundRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color565) -> Result<(), DisplayError> {
        self.ops.push(Op::Line {
            from: (x0, y0),
            to: (x1, y1),
            color,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) -> Result<(), DisplayError> {
        self.ops.push(Op::Text {
            text: text.into(),
            x,
            y,
            style,
        });
        Ok(())
    }
}
