use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::gesture::GestureInput;
use crate::host::{Collaborators, ManualClock, RecordingSink};
use crate::page::{Page, PageSequence};
use crate::transition::{PageNavigator, PageTransitionController, TransitionSettings};

pub(super) const WIDTH: f32 = 260.0;
pub(super) const COMMIT_MS: u64 = 250;
pub(super) const CANCEL_MS: u64 = 350;

pub(super) struct Harness {
    pub navigator: PageNavigator,
    pub sink: RecordingSink,
    pub clock: ManualClock,
    pub width: Rc<Cell<f32>>,
    pub reduced: Rc<Cell<bool>>,
}

impl Harness {
    pub fn at(page: Page) -> Self {
        Self::with_settings(page, TransitionSettings::default())
    }

    pub fn with_settings(page: Page, settings: TransitionSettings) -> Self {
        let sink = RecordingSink::new();
        let clock = ManualClock::default();
        let width = Rc::new(Cell::new(WIDTH));
        let reduced = Rc::new(Cell::new(false));
        let host = Collaborators::new(Rc::clone(&width), Rc::clone(&reduced), sink.clone())
            .with_clock(clock.clone());
        let controller =
            PageTransitionController::new(PageSequence::canonical(), page, settings, host);
        Self {
            navigator: PageNavigator::new(controller),
            sink,
            clock,
            width,
            reduced,
        }
    }

    pub fn controller(&self) -> &PageTransitionController {
        self.navigator.controller()
    }

    pub fn page(&self) -> Page {
        self.navigator.current_page()
    }

    pub fn offset(&self) -> f32 {
        self.controller().current_drag_offset()
    }

    pub fn begin(&mut self) {
        self.navigator.handle_gesture(GestureInput::began());
    }

    pub fn change(&mut self, dx: f32, dy: f32) {
        self.navigator.handle_gesture(GestureInput::changed(dx, dy));
    }

    pub fn end(&mut self) {
        self.navigator.handle_gesture(GestureInput::ended(0.0, 0.0));
    }

    pub fn cancel(&mut self) {
        self.navigator.handle_gesture(GestureInput::cancelled(0.0, 0.0));
    }

    /// Began plus one changed event carrying the whole translation.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.begin();
        self.change(dx, dy);
    }

    pub fn swipe(&mut self, dx: f32, dy: f32) {
        self.drag(dx, dy);
        self.end();
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.navigator.fire_due();
    }
}
