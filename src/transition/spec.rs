use std::time::Duration;

use crate::event::NavDirection;

pub const DEFAULT_COMMIT_DURATION: Duration = Duration::from_millis(250);
pub const DEFAULT_CANCEL_DURATION: Duration = Duration::from_millis(350);
pub const DEFAULT_SELECT_DURATION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Offset settles after a committed drag.
    Commit,
    /// Offset snaps back after an abandoned drag.
    Cancel,
    /// Observer-driven swap for direct selection and snaps.
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStyle {
    Slide(NavDirection),
    Opacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub style: TransitionStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionTimings {
    pub commit: Duration,
    pub cancel: Duration,
    pub select: Duration,
}

impl Default for MotionTimings {
    fn default() -> Self {
        Self {
            commit: DEFAULT_COMMIT_DURATION,
            cancel: DEFAULT_CANCEL_DURATION,
            select: DEFAULT_SELECT_DURATION,
        }
    }
}

impl MotionTimings {
    /// The single source of animation parameters for both gesture and
    /// direct-selection paths. Reduced motion only touches the animation
    /// layer: zero duration and a plain opacity cut.
    pub fn spec(
        &self,
        kind: TransitionKind,
        reduced_motion: bool,
        direction: NavDirection,
    ) -> TransitionSpec {
        if reduced_motion {
            return TransitionSpec {
                duration: Duration::ZERO,
                style: TransitionStyle::Opacity,
            };
        }
        let duration = match kind {
            TransitionKind::Commit => self.commit,
            TransitionKind::Cancel => self.cancel,
            TransitionKind::Select => self.select,
        };
        TransitionSpec {
            duration,
            style: TransitionStyle::Slide(direction),
        }
    }

    /// How long suppression outlives a finished offset animation.
    pub fn suppression_grace(&self, reduced_motion: bool) -> Duration {
        if reduced_motion {
            Duration::ZERO
        } else {
            self.commit
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::event::NavDirection;

    use super::{MotionTimings, TransitionKind, TransitionStyle};

    #[test]
    fn reduced_motion_collapses_every_kind() {
        let timings = MotionTimings::default();
        for kind in [
            TransitionKind::Commit,
            TransitionKind::Cancel,
            TransitionKind::Select,
        ] {
            let spec = timings.spec(kind, true, NavDirection::Forward);
            assert_eq!(spec.duration, Duration::ZERO);
            assert_eq!(spec.style, TransitionStyle::Opacity);
        }
        assert_eq!(timings.suppression_grace(true), Duration::ZERO);
    }

    #[test]
    fn cancel_is_softer_than_commit_by_default() {
        let timings = MotionTimings::default();
        let commit = timings.spec(TransitionKind::Commit, false, NavDirection::Backward);
        let cancel = timings.spec(TransitionKind::Cancel, false, NavDirection::Backward);
        assert!(cancel.duration > commit.duration);
        assert_eq!(commit.style, TransitionStyle::Slide(NavDirection::Backward));
        assert_eq!(timings.suppression_grace(false), commit.duration);
    }
}
