use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, trace};

use crate::command::Command;
use crate::gesture::GestureInput;
use crate::input::map_key_to_command_with_preset;
use crate::ui::{popover_layout, tab_at};

use super::core::App;
use super::pointer::PointScale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InputOutcome {
    pub redraw: bool,
    pub command: Option<Command>,
}

impl InputOutcome {
    fn redraw() -> Self {
        Self {
            redraw: true,
            command: None,
        }
    }

    fn command(command: Command) -> Self {
        Self {
            redraw: false,
            command: Some(command),
        }
    }
}

impl App {
    /// Recomputes hit areas and the cell-to-point scale for a new screen size.
    pub(crate) fn resize(&mut self, area: Rect) {
        self.layout = popover_layout(area);
        self.scale = PointScale::for_body(self.layout.body, self.config.popover.width);
        debug!(
            columns = self.layout.body.width,
            points_per_column = self.scale.per_column,
            "popover resized"
        );
    }

    pub(crate) fn handle_input_event(&mut self, event: Event) -> InputOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                map_key_to_command_with_preset(key, self.keymap)
                    .map(InputOutcome::command)
                    .unwrap_or_default()
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::FocusLost => {
                self.pointer.reset();
                self.navigator.interrupt();
                InputOutcome::redraw()
            }
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, width, height));
                InputOutcome::redraw()
            }
            _ => InputOutcome::default(),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> InputOutcome {
        let (column, row) = (mouse.column, mouse.row);
        let gesture = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(page) = tab_at(
                    &self.layout,
                    self.navigator.controller().pages().ordered_pages(),
                    column,
                    row,
                ) {
                    return InputOutcome::command(Command::SelectPage { page });
                }
                if !self.layout.body.contains(Position::new(column, row)) {
                    return InputOutcome::default();
                }
                if self.pointer.is_pressed() {
                    // Release got lost somewhere; close the stale stream first.
                    self.navigator
                        .handle_gesture(GestureInput::cancelled(0.0, 0.0));
                }
                Some(self.pointer.press(column, row))
            }
            MouseEventKind::Drag(MouseButton::Left) => self.pointer.drag(column, row, self.scale),
            MouseEventKind::Up(MouseButton::Left) => self.pointer.release(column, row, self.scale),
            _ => None,
        };

        let Some(gesture) = gesture else {
            return InputOutcome::default();
        };
        trace!(phase = ?gesture.phase, dx = gesture.dx, dy = gesture.dy, "pointer gesture");
        self.navigator.handle_gesture(gesture);
        InputOutcome::redraw()
    }
}
