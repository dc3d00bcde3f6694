use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::event::{ChangeSource, NavDirection, PageChange};
use crate::gesture::{GestureDirection, SwipeCommitPolicy};
use crate::host::Collaborators;
use crate::page::{Page, PageSequence};

use super::spec::{MotionTimings, TransitionKind};
use super::state::{NeighborPreview, OffsetAnimation, TransitionState};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionSettings {
    pub policy: SwipeCommitPolicy,
    pub timings: MotionTimings,
    /// Whether an OS-cancelled stream may still commit on its accumulated
    /// translation (momentum semantics). Off: cancelled streams always
    /// snap back.
    pub cancelled_gestures_commit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnwindStep {
    FinishAnimation,
    ReleaseSuppression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingStep {
    due: Instant,
    step: UnwindStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackedGesture {
    origin: Page,
}

/// Turns accumulated gesture translations into page transitions.
///
/// All entry points are total: degenerate input resolves to a no-op or to a
/// snap-back, never to an error. Timed steps are held as a single pending
/// deadline which the host drives through [`next_deadline`] and
/// [`fire_due`]; a later transition replaces it.
///
/// [`next_deadline`]: PageTransitionController::next_deadline
/// [`fire_due`]: PageTransitionController::fire_due
pub struct PageTransitionController {
    pages: PageSequence,
    settings: TransitionSettings,
    current: Page,
    state: TransitionState,
    pending: Option<PendingStep>,
    gesture: Option<TrackedGesture>,
    host: Collaborators,
}

impl PageTransitionController {
    pub fn new(
        pages: PageSequence,
        start: Page,
        settings: TransitionSettings,
        host: Collaborators,
    ) -> Self {
        let current = if pages.contains(start) {
            start
        } else {
            pages.first()
        };
        Self {
            pages,
            settings,
            current,
            state: TransitionState::Idle,
            pending: None,
            gesture: None,
            host,
        }
    }

    pub fn pages(&self) -> &PageSequence {
        &self.pages
    }

    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TransitionState::Dragging { .. })
    }

    pub fn is_tracking_gesture(&self) -> bool {
        self.gesture.is_some()
    }

    /// Horizontal offset of the current page, sampled at the injected clock.
    pub fn current_drag_offset(&self) -> f32 {
        match &self.state {
            TransitionState::Idle => 0.0,
            TransitionState::Dragging { offset, .. } => *offset,
            TransitionState::Committing { animation, .. }
            | TransitionState::Cancelling { animation, .. } => {
                animation.sample(self.host.clock.now())
            }
        }
    }

    /// The page entering from the drag edge, while dragging and while a
    /// released drag settles back.
    pub fn neighbor_preview(&self) -> Option<NeighborPreview> {
        let (direction, page) = match self.state {
            TransitionState::Dragging {
                direction,
                neighbor: Some(page),
                ..
            } => (direction, page),
            TransitionState::Cancelling {
                direction: Some(direction),
                neighbor: Some(page),
                ..
            } => (direction, page),
            _ => return None,
        };
        Some(NeighborPreview {
            page,
            offset: self.current_drag_offset()
                + direction.neighbor_edge_sign() * self.viewport_width(),
        })
    }

    /// True while an observer must not animate page swaps on its own: during
    /// the offset animation and for a grace period after it.
    pub fn is_suppressing(&self) -> bool {
        self.state.is_animating()
            || matches!(
                self.pending,
                Some(PendingStep {
                    step: UnwindStep::ReleaseSuppression,
                    ..
                })
            )
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    /// Runs every scheduled step that is due. Returns whether anything ran.
    pub fn fire_due(&mut self) -> bool {
        let mut fired = false;
        while let Some(pending) = self.pending {
            let now = self.host.clock.now();
            if pending.due > now {
                break;
            }
            self.pending = None;
            fired = true;
            match pending.step {
                UnwindStep::FinishAnimation => self.finish_animation(now),
                UnwindStep::ReleaseSuppression => {
                    debug!(page = %self.current, "transition suppression released");
                }
            }
        }
        fired
    }

    /// Starts tracking a stream. Rejected while another stream is tracked or
    /// an animation is still in flight.
    pub fn gesture_began(&mut self) -> bool {
        if self.gesture.is_some() || !self.state.is_idle() {
            debug!(
                state = self.state.name(),
                "gesture start ignored while a transition is in progress"
            );
            return false;
        }
        self.gesture = Some(TrackedGesture {
            origin: self.current,
        });
        trace!(page = %self.current, "gesture began");
        true
    }

    pub fn gesture_changed(&mut self, dx: f32, dy: f32) {
        if self.gesture.is_none() {
            return;
        }
        let width = self.viewport_width();
        match self.state {
            TransitionState::Idle => {
                if !self.settings.policy.is_mostly_horizontal(dx, dy) {
                    return;
                }
                let Some(direction) = GestureDirection::from_dx(dx) else {
                    return;
                };
                let Some(neighbor) = self.interactive_neighbor(direction) else {
                    trace!(page = %self.current, ?direction, "no live preview for this swipe");
                    return;
                };
                let offset = clamp_offset(dx, width);
                debug!(
                    from = "idle",
                    to = "dragging",
                    page = %self.current,
                    %neighbor,
                    offset,
                    ?direction,
                    "drag started"
                );
                self.state = TransitionState::Dragging {
                    offset,
                    direction,
                    neighbor: Some(neighbor),
                };
            }
            TransitionState::Dragging {
                direction,
                neighbor,
                ..
            } => {
                let offset = clamp_offset(dx, width);
                let (direction, neighbor) = match GestureDirection::from_dx(dx) {
                    Some(next) => (next, self.interactive_neighbor(next)),
                    None => (direction, neighbor),
                };
                self.state = TransitionState::Dragging {
                    offset,
                    direction,
                    neighbor,
                };
            }
            TransitionState::Committing { .. } | TransitionState::Cancelling { .. } => {}
        }
    }

    pub fn gesture_ended(&mut self, dx: f32, dy: f32) {
        self.finish_gesture(dx, dy, true);
    }

    pub fn gesture_cancelled(&mut self, dx: f32, dy: f32) {
        self.finish_gesture(dx, dy, self.settings.cancelled_gestures_commit);
    }

    /// The stream was cut off (focus lost, window closing). Resolves like a
    /// release that may not commit: a live drag snaps back, and a stream
    /// that never started dragging runs the same unwind as a short release.
    pub fn interrupt(&mut self) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        match self.state {
            TransitionState::Dragging {
                offset,
                direction,
                neighbor,
            } => {
                debug!(origin = %gesture.origin, offset, "drag interrupted");
                self.begin_cancel(offset, Some(direction), neighbor);
            }
            TransitionState::Idle if !self.is_snap_path(None) => {
                debug!(origin = %gesture.origin, "stream interrupted before dragging");
                self.begin_cancel(0.0, None, None);
            }
            _ => {}
        }
    }

    /// Keyboard/menu entry point. Bypasses the gesture pipeline and always
    /// lets the observer animate the swap.
    pub fn select_page(&mut self, target: Page) -> bool {
        if !self.pages.contains(target) {
            warn!(%target, "selected page is not part of the sequence");
            return false;
        }
        if target == self.current {
            trace!(%target, "page already selected");
            return false;
        }
        if !self.state.is_idle() {
            debug!(
                state = self.state.name(),
                "settling in-flight transition for direct selection"
            );
        }
        self.gesture = None;
        self.state = TransitionState::Idle;
        self.pending = None;

        let from = self.current;
        self.current = target;
        let direction = NavDirection::between(from, target);
        let reduced = self.reduced_motion();
        let transition = self
            .settings
            .timings
            .spec(TransitionKind::Select, reduced, direction);
        debug!(%from, to = %target, ?direction, "page selected directly");
        self.notify(PageChange {
            from,
            to: target,
            direction,
            source: ChangeSource::Direct,
            animated: !reduced,
            transition,
            suppressed: false,
        });
        true
    }

    fn finish_gesture(&mut self, dx: f32, dy: f32, may_commit: bool) {
        if self.gesture.take().is_none() {
            return;
        }
        let width = self.viewport_width();
        let direction = GestureDirection::from_dx(dx);
        let commit_target = if may_commit && self.settings.policy.should_commit(dx, dy, width) {
            direction.and_then(|direction| {
                self.pages
                    .adjacent(self.current, direction)
                    .map(|target| (direction, target))
            })
        } else {
            None
        };

        match self.state {
            TransitionState::Dragging {
                offset,
                direction: drag_direction,
                neighbor,
            } => match commit_target {
                Some((direction, target)) if self.allows_interactive(direction) => {
                    self.begin_commit(offset, direction, target, width);
                }
                _ => self.begin_cancel(offset, Some(drag_direction), neighbor),
            },
            TransitionState::Idle => {
                let snap_path = self.is_snap_path(direction);
                match commit_target {
                    Some((direction, target)) if snap_path => self.snap_to(target, direction),
                    Some((direction, target)) => self.begin_commit(0.0, direction, target, width),
                    None if snap_path => {
                        trace!(page = %self.current, dx, dy, "snap swipe below threshold");
                    }
                    None => self.begin_cancel(0.0, None, None),
                }
            }
            TransitionState::Committing { .. } | TransitionState::Cancelling { .. } => {}
        }
    }

    fn begin_commit(&mut self, offset: f32, direction: GestureDirection, target: Page, width: f32) {
        let from = self.current;
        self.current = target;
        let start = offset + direction.neighbor_edge_sign() * width;
        let reduced = self.reduced_motion();
        let nav = direction.nav_direction();
        let spec = self.settings.timings.spec(TransitionKind::Commit, reduced, nav);
        let now = self.host.clock.now();
        debug!(
            from = %from,
            to = %target,
            offset = start,
            ?direction,
            "drag committed"
        );
        self.state = TransitionState::Committing {
            from,
            target,
            direction,
            animation: OffsetAnimation::to_zero(start, now, spec.duration),
        };
        self.schedule(now + spec.duration, UnwindStep::FinishAnimation);
        self.notify(PageChange {
            from,
            to: target,
            direction: nav,
            source: ChangeSource::Gesture,
            animated: !reduced,
            transition: spec,
            suppressed: true,
        });
    }

    fn begin_cancel(
        &mut self,
        offset: f32,
        direction: Option<GestureDirection>,
        neighbor: Option<Page>,
    ) {
        let reduced = self.reduced_motion();
        let nav = if offset > 0.0 {
            NavDirection::Forward
        } else {
            NavDirection::Backward
        };
        let spec = self.settings.timings.spec(TransitionKind::Cancel, reduced, nav);
        let now = self.host.clock.now();
        debug!(page = %self.current, offset, "drag cancelled");
        self.state = TransitionState::Cancelling {
            direction,
            neighbor,
            animation: OffsetAnimation::to_zero(offset, now, spec.duration),
        };
        self.schedule(now + spec.duration, UnwindStep::FinishAnimation);
    }

    fn snap_to(&mut self, target: Page, direction: GestureDirection) {
        let from = self.current;
        self.current = target;
        self.pending = None;
        let reduced = self.reduced_motion();
        let nav = direction.nav_direction();
        let transition = self.settings.timings.spec(TransitionKind::Select, reduced, nav);
        debug!(%from, to = %target, ?direction, "swipe snapped without live preview");
        self.notify(PageChange {
            from,
            to: target,
            direction: nav,
            source: ChangeSource::Snap,
            animated: !reduced,
            transition,
            suppressed: false,
        });
    }

    fn finish_animation(&mut self, now: Instant) {
        if !self.state.is_animating() {
            return;
        }
        debug!(
            from = self.state.name(),
            to = "idle",
            page = %self.current,
            "offset animation finished"
        );
        self.state = TransitionState::Idle;
        let grace = self.settings.timings.suppression_grace(self.reduced_motion());
        self.schedule(now + grace, UnwindStep::ReleaseSuppression);
    }

    fn schedule(&mut self, due: Instant, step: UnwindStep) {
        if let Some(previous) = self.pending.replace(PendingStep { due, step }) {
            trace!(replaced = ?previous.step, next = ?step, "pending step pre-empted");
        }
    }

    fn notify(&mut self, change: PageChange) {
        self.host.sink.on_page_changed(&change);
    }

    fn interactive_neighbor(&self, direction: GestureDirection) -> Option<Page> {
        let neighbor = self.pages.adjacent(self.current, direction)?;
        self.allows_interactive(direction).then_some(neighbor)
    }

    fn allows_interactive(&self, direction: GestureDirection) -> bool {
        self.settings
            .policy
            .allows_interactive_drag(self.current, direction, &self.pages)
    }

    fn is_snap_path(&self, direction: Option<GestureDirection>) -> bool {
        self.current.is_anchor()
            || direction.is_some_and(|direction| !self.allows_interactive(direction))
    }

    fn viewport_width(&self) -> f32 {
        let width = self.host.viewport.current_viewport_width();
        if width.is_finite() { width.max(0.0) } else { 0.0 }
    }

    fn reduced_motion(&self) -> bool {
        self.host.motion.is_reduced_motion_enabled()
    }
}

fn clamp_offset(dx: f32, width: f32) -> f32 {
    if dx.is_nan() {
        return 0.0;
    }
    dx.clamp(-width, width)
}
