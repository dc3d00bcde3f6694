use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use crate::event::PageChange;

use super::clock::SystemClock;

/// Width of the popover content area in points. Read on demand, so hosts may
/// change it between events (grid column count, window resize).
pub trait ViewportSource {
    fn current_viewport_width(&self) -> f32;
}

pub trait MotionPreference {
    fn is_reduced_motion_enabled(&self) -> bool;
}

pub trait PageChangeSink {
    fn on_page_changed(&mut self, change: &PageChange);
}

pub trait Clock {
    fn now(&self) -> Instant;
}

impl ViewportSource for f32 {
    fn current_viewport_width(&self) -> f32 {
        *self
    }
}

impl ViewportSource for Rc<Cell<f32>> {
    fn current_viewport_width(&self) -> f32 {
        self.get()
    }
}

impl MotionPreference for bool {
    fn is_reduced_motion_enabled(&self) -> bool {
        *self
    }
}

impl MotionPreference for Rc<Cell<bool>> {
    fn is_reduced_motion_enabled(&self) -> bool {
        self.get()
    }
}

impl<F> PageChangeSink for F
where
    F: FnMut(&PageChange),
{
    fn on_page_changed(&mut self, change: &PageChange) {
        self(change)
    }
}

/// Sink that keeps every notification; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    log: Rc<RefCell<Vec<PageChange>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<PageChange> {
        self.log.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    pub fn last(&self) -> Option<PageChange> {
        self.log.borrow().last().copied()
    }
}

impl PageChangeSink for RecordingSink {
    fn on_page_changed(&mut self, change: &PageChange) {
        self.log.borrow_mut().push(*change);
    }
}

/// Everything a controller consumes from its host, injected at construction.
pub struct Collaborators {
    pub viewport: Box<dyn ViewportSource>,
    pub motion: Box<dyn MotionPreference>,
    pub sink: Box<dyn PageChangeSink>,
    pub clock: Box<dyn Clock>,
}

impl Collaborators {
    pub fn new(
        viewport: impl ViewportSource + 'static,
        motion: impl MotionPreference + 'static,
        sink: impl PageChangeSink + 'static,
    ) -> Self {
        Self {
            viewport: Box::new(viewport),
            motion: Box::new(motion),
            sink: Box::new(sink),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}
