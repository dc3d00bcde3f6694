use crate::event::NavDirection;

/// Horizontal direction of a swipe.
///
/// `Left` moves content toward higher page indices (reveals the next page),
/// `Right` toward lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureDirection {
    Left,
    Right,
}

impl GestureDirection {
    /// Direction implied by a horizontal translation; `None` for zero or NaN.
    pub fn from_dx(dx: f32) -> Option<Self> {
        if dx < 0.0 {
            Some(Self::Left)
        } else if dx > 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }

    pub fn nav_direction(self) -> NavDirection {
        match self {
            Self::Left => NavDirection::Forward,
            Self::Right => NavDirection::Backward,
        }
    }

    /// Sign of the horizontal position where the neighbor enters from.
    pub fn neighbor_edge_sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One raw event from a pointing or trackpad source. `dx`/`dy` are
/// incremental since the previous event of the same stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureInput {
    pub phase: GesturePhase,
    pub dx: f32,
    pub dy: f32,
}

impl GestureInput {
    pub fn began() -> Self {
        Self {
            phase: GesturePhase::Began,
            dx: 0.0,
            dy: 0.0,
        }
    }

    pub fn changed(dx: f32, dy: f32) -> Self {
        Self {
            phase: GesturePhase::Changed,
            dx,
            dy,
        }
    }

    pub fn ended(dx: f32, dy: f32) -> Self {
        Self {
            phase: GesturePhase::Ended,
            dx,
            dy,
        }
    }

    pub fn cancelled(dx: f32, dy: f32) -> Self {
        Self {
            phase: GesturePhase::Cancelled,
            dx,
            dy,
        }
    }
}

/// Running translation of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccumulatedDelta {
    pub dx: f32,
    pub dy: f32,
}

impl AccumulatedDelta {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// What the accumulator hands to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub total: AccumulatedDelta,
}

#[cfg(test)]
mod tests {
    use crate::event::NavDirection;

    use super::{GestureDirection, GesturePhase};

    #[test]
    fn from_dx_maps_sign_to_direction() {
        assert_eq!(GestureDirection::from_dx(-1.0), Some(GestureDirection::Left));
        assert_eq!(GestureDirection::from_dx(3.0), Some(GestureDirection::Right));
        assert_eq!(GestureDirection::from_dx(0.0), None);
        assert_eq!(GestureDirection::from_dx(f32::NAN), None);
    }

    #[test]
    fn left_swipe_navigates_forward() {
        assert_eq!(
            GestureDirection::Left.nav_direction(),
            NavDirection::Forward
        );
        assert_eq!(
            GestureDirection::Right.nav_direction(),
            NavDirection::Backward
        );
    }

    #[test]
    fn only_ended_and_cancelled_are_terminal() {
        assert!(!GesturePhase::Began.is_terminal());
        assert!(!GesturePhase::Changed.is_terminal());
        assert!(GesturePhase::Ended.is_terminal());
        assert!(GesturePhase::Cancelled.is_terminal());
    }
}
