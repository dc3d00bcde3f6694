use std::time::Instant;

use crate::event::NavDirection;
use crate::gesture::{GestureDeltaAccumulator, GestureDirection, GestureInput, GesturePhase};
use crate::page::Page;

use super::controller::PageTransitionController;

/// Raw input phases in, page transitions out: feeds the accumulator's running
/// totals to the controller and fronts the direct-selection entry points.
pub struct PageNavigator {
    accumulator: GestureDeltaAccumulator,
    controller: PageTransitionController,
}

impl PageNavigator {
    pub fn new(controller: PageTransitionController) -> Self {
        Self {
            accumulator: GestureDeltaAccumulator::new(),
            controller,
        }
    }

    pub fn controller(&self) -> &PageTransitionController {
        &self.controller
    }

    pub fn current_page(&self) -> Page {
        self.controller.current_page()
    }

    pub fn handle_gesture(&mut self, input: GestureInput) {
        // A rejected start must not wipe the stream still in progress.
        if input.phase == GesturePhase::Began && !self.controller.gesture_began() {
            return;
        }
        let Some(sample) = self.accumulator.handle(input) else {
            return;
        };
        let total = sample.total;
        match sample.phase {
            GesturePhase::Began => {}
            GesturePhase::Changed => self.controller.gesture_changed(total.dx, total.dy),
            GesturePhase::Ended => self.controller.gesture_ended(total.dx, total.dy),
            GesturePhase::Cancelled => self.controller.gesture_cancelled(total.dx, total.dy),
        }
    }

    pub fn interrupt(&mut self) {
        self.accumulator.reset();
        self.controller.interrupt();
    }

    pub fn select_page(&mut self, page: Page) -> bool {
        self.accumulator.reset();
        self.controller.select_page(page)
    }

    /// 0-based position within the page sequence.
    pub fn select_nth(&mut self, index: usize) -> bool {
        match self.controller.pages().nth(index) {
            Some(page) => self.select_page(page),
            None => false,
        }
    }

    pub fn select_adjacent(&mut self, direction: NavDirection) -> bool {
        let gesture_direction = match direction {
            NavDirection::Forward => GestureDirection::Left,
            NavDirection::Backward => GestureDirection::Right,
        };
        let current = self.controller.current_page();
        match self.controller.pages().adjacent(current, gesture_direction) {
            Some(page) => self.select_page(page),
            None => false,
        }
    }

    pub fn cycle(&mut self, forward: bool) -> bool {
        let current = self.controller.current_page();
        let target = self.controller.pages().cycle(current, forward);
        self.select_page(target)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    pub fn fire_due(&mut self) -> bool {
        self.controller.fire_due()
    }
}
