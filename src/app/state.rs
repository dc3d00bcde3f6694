use std::time::Instant;

use crate::command::ActionId;
use crate::event::{NavDirection, PageChange};
use crate::page::Page;
use crate::transition::{TransitionSpec, TransitionStyle};

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

/// A page swap the host animates itself (direct selection, snaps).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverTransition {
    pub from: Page,
    pub to: Page,
    pub spec: TransitionSpec,
    pub started_at: Instant,
}

impl ObserverTransition {
    pub fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < self.spec.duration
    }

    /// Offset of the incoming page, or `None` once settled or for cuts.
    pub fn offset(&self, now: Instant, width: f32) -> Option<f32> {
        let TransitionStyle::Slide(direction) = self.spec.style else {
            return None;
        };
        if !self.is_running(now) {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let remaining = 1.0 - (elapsed / self.spec.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(leading_edge(direction, width) * remaining)
    }

    /// Incoming and outgoing pages with their offsets while running.
    pub fn panes(&self, now: Instant, width: f32) -> Option<[(Page, f32); 2]> {
        let TransitionStyle::Slide(direction) = self.spec.style else {
            return None;
        };
        let incoming = self.offset(now, width)?;
        let outgoing = incoming - leading_edge(direction, width);
        Some([(self.to, incoming), (self.from, outgoing)])
    }
}

fn leading_edge(direction: NavDirection, width: f32) -> f32 {
    match direction {
        NavDirection::Forward => width,
        NavDirection::Backward => -width,
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub status: StatusState,
    pub observer: Option<ObserverTransition>,
}

impl AppState {
    pub fn on_page_changed(&mut self, change: &PageChange, now: Instant) {
        self.status.message = format!(
            "{} -> {} ({:?}{})",
            change.from,
            change.to,
            change.source,
            if change.suppressed { ", suppressed" } else { "" }
        );
        self.observer = (change.animated && !change.suppressed).then_some(ObserverTransition {
            from: change.from,
            to: change.to,
            spec: change.transition,
            started_at: now,
        });
    }

    pub fn observer_panes(&self, now: Instant, width: f32) -> Option<[(Page, f32); 2]> {
        self.observer.and_then(|observer| observer.panes(now, width))
    }

    pub fn observer_running(&self, now: Instant) -> bool {
        self.observer.is_some_and(|observer| observer.is_running(now))
    }
}
