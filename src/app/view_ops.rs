use std::time::Instant;

use crate::error::AppResult;
use crate::transition::TransitionState;
use crate::ui::{PagePane, PopoverView, draw_popover};

use super::core::App;
use super::terminal_session::TerminalSurface;

const IDLE_HINT: &str = "drag or use arrows to switch pages, q to quit";

impl App {
    /// Pages to draw and where, in body columns.
    pub(crate) fn visible_panes(&self, now: Instant) -> Vec<PagePane> {
        let controller = self.navigator.controller();
        let current = controller.current_page();
        let width = self.config.popover.width;
        let pane = |page, offset: f32| PagePane {
            page,
            offset: self.scale.to_columns(offset),
        };

        match *controller.state() {
            TransitionState::Dragging { .. } | TransitionState::Cancelling { .. } => {
                let mut panes = vec![pane(current, controller.current_drag_offset())];
                if let Some(preview) = controller.neighbor_preview() {
                    panes.push(pane(preview.page, preview.offset));
                }
                panes
            }
            TransitionState::Committing {
                from, direction, ..
            } => {
                let offset = controller.current_drag_offset();
                let outgoing = offset - direction.neighbor_edge_sign() * width;
                vec![pane(current, offset), pane(from, outgoing)]
            }
            TransitionState::Idle => match self.state.observer_panes(now, width) {
                Some(observed) => observed
                    .into_iter()
                    .map(|(page, offset)| pane(page, offset))
                    .collect(),
                None => vec![pane(current, 0.0)],
            },
        }
    }

    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.navigator.controller().state().is_animating() || self.state.observer_running(now)
    }

    pub(crate) fn draw(&self, surface: &mut impl TerminalSurface) -> AppResult<()> {
        let now = Instant::now();
        let panes = self.visible_panes(now);
        let status = if self.state.status.message.is_empty() {
            IDLE_HINT
        } else {
            self.state.status.message.as_str()
        };
        let view = PopoverView {
            pages: self.navigator.controller().pages().ordered_pages(),
            current: self.navigator.current_page(),
            panes,
            status,
        };
        let layout = self.layout;
        surface.draw(|frame| draw_popover(frame, layout, &view))?;
        Ok(())
    }
}
