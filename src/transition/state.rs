use std::time::{Duration, Instant};

use crate::gesture::GestureDirection;
use crate::page::Page;

/// Linear settle of the drag offset toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnimation {
    from: f32,
    started_at: Instant,
    duration: Duration,
}

impl OffsetAnimation {
    pub fn to_zero(from: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            started_at,
            duration,
        }
    }

    pub fn start_offset(&self) -> f32 {
        self.from
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn deadline(&self) -> Instant {
        self.started_at + self.duration
    }

    pub fn sample(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from * (1.0 - progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    Idle,
    /// `neighbor` is `None` while the drag points at a page that cannot be
    /// previewed (past either end, or the anchor).
    Dragging {
        offset: f32,
        direction: GestureDirection,
        neighbor: Option<Page>,
    },
    /// The current page already equals `target`; only the offset is moving.
    Committing {
        from: Page,
        target: Page,
        direction: GestureDirection,
        animation: OffsetAnimation,
    },
    /// A released drag keeps its neighbor on screen until the offset is
    /// back at rest.
    Cancelling {
        direction: Option<GestureDirection>,
        neighbor: Option<Page>,
        animation: OffsetAnimation,
    },
}

impl TransitionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Committing { .. } | Self::Cancelling { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Committing { .. } => "committing",
            Self::Cancelling { .. } => "cancelling",
        }
    }
}

/// Where the renderer should draw the page entering during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborPreview {
    pub page: Page,
    pub offset: f32,
}
