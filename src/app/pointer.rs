use ratatui::layout::Rect;

use crate::gesture::GestureInput;

/// Terminal rows are roughly twice as tall as columns are wide.
const ROW_ASPECT: f32 = 2.0;

/// Cell-to-point conversion for the popover body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointScale {
    pub(crate) per_column: f32,
    pub(crate) per_row: f32,
}

impl PointScale {
    pub(crate) fn for_body(body: Rect, viewport_width: f32) -> Self {
        let columns = f32::from(body.width.max(1));
        let per_column = if viewport_width.is_finite() && viewport_width > 0.0 {
            viewport_width / columns
        } else {
            1.0
        };
        Self {
            per_column,
            per_row: per_column * ROW_ASPECT,
        }
    }

    pub(crate) fn to_columns(self, points: f32) -> i32 {
        if !points.is_finite() {
            return 0;
        }
        (points / self.per_column).round() as i32
    }
}

impl Default for PointScale {
    fn default() -> Self {
        Self {
            per_column: 1.0,
            per_row: ROW_ASPECT,
        }
    }
}

/// Turns a left-button press/drag/release sequence into gesture phases with
/// per-event point deltas.
#[derive(Debug, Default)]
pub(crate) struct PointerTracker {
    last: Option<(u16, u16)>,
}

impl PointerTracker {
    pub(crate) fn is_pressed(&self) -> bool {
        self.last.is_some()
    }

    pub(crate) fn press(&mut self, column: u16, row: u16) -> GestureInput {
        self.last = Some((column, row));
        GestureInput::began()
    }

    pub(crate) fn drag(&mut self, column: u16, row: u16, scale: PointScale) -> Option<GestureInput> {
        let (dx, dy) = self.step(column, row, scale)?;
        Some(GestureInput::changed(dx, dy))
    }

    pub(crate) fn release(
        &mut self,
        column: u16,
        row: u16,
        scale: PointScale,
    ) -> Option<GestureInput> {
        let (dx, dy) = self.step(column, row, scale)?;
        self.last = None;
        Some(GestureInput::ended(dx, dy))
    }

    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    fn step(&mut self, column: u16, row: u16, scale: PointScale) -> Option<(f32, f32)> {
        let (last_column, last_row) = self.last?;
        self.last = Some((column, row));
        let dx = (f32::from(column) - f32::from(last_column)) * scale.per_column;
        let dy = (f32::from(row) - f32::from(last_row)) * scale.per_row;
        Some((dx, dy))
    }
}
