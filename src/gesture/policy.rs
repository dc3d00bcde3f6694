use crate::page::{Page, PageSequence};

use super::GestureDirection;

pub const DEFAULT_MINIMUM_SWIPE_THRESHOLD: f32 = 30.0;
pub const DEFAULT_COMMIT_FRACTION: f32 = 0.4;

/// Pure commit/interaction decisions for a horizontal page swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeCommitPolicy {
    pub minimum_swipe_threshold: f32,
    pub commit_fraction: f32,
}

impl Default for SwipeCommitPolicy {
    fn default() -> Self {
        Self {
            minimum_swipe_threshold: DEFAULT_MINIMUM_SWIPE_THRESHOLD,
            commit_fraction: DEFAULT_COMMIT_FRACTION,
        }
    }
}

impl SwipeCommitPolicy {
    pub fn new(minimum_swipe_threshold: f32, commit_fraction: f32) -> Self {
        Self {
            minimum_swipe_threshold,
            commit_fraction,
        }
    }

    /// Never below the fixed minimum; non-positive or NaN widths fall back
    /// to it.
    pub fn commit_threshold(&self, viewport_width: f32) -> f32 {
        let proportional = if viewport_width > 0.0 {
            viewport_width * self.commit_fraction
        } else {
            0.0
        };
        self.minimum_swipe_threshold.max(proportional)
    }

    /// Equal magnitudes are not horizontal.
    pub fn is_mostly_horizontal(&self, dx: f32, dy: f32) -> bool {
        dx.abs() > dy.abs()
    }

    pub fn should_commit(&self, dx: f32, dy: f32, viewport_width: f32) -> bool {
        self.is_mostly_horizontal(dx, dy) && dx.abs() >= self.commit_threshold(viewport_width)
    }

    /// Live-following drags never enter or leave the anchor page; it is only
    /// reached by a snap once the threshold is crossed.
    pub fn allows_interactive_drag(
        &self,
        current: Page,
        direction: GestureDirection,
        pages: &PageSequence,
    ) -> bool {
        if current.is_anchor() {
            return false;
        }
        !pages
            .adjacent(current, direction)
            .is_some_and(|neighbor| neighbor.is_anchor())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::gesture::GestureDirection;
    use crate::page::{Page, PageSequence};

    use super::SwipeCommitPolicy;

    #[test]
    fn threshold_uses_fraction_on_wide_popovers() {
        let policy = SwipeCommitPolicy::default();
        assert_eq!(policy.commit_threshold(260.0), 104.0);
        assert_eq!(policy.commit_threshold(50.0), 30.0);
    }

    #[test]
    fn degenerate_widths_fall_back_to_minimum() {
        let policy = SwipeCommitPolicy::default();
        assert_eq!(policy.commit_threshold(0.0), 30.0);
        assert_eq!(policy.commit_threshold(-500.0), 30.0);
        assert_eq!(policy.commit_threshold(f32::NAN), 30.0);
    }

    #[test]
    fn diagonal_ties_are_not_horizontal() {
        let policy = SwipeCommitPolicy::default();
        assert!(!policy.is_mostly_horizontal(50.0, -50.0));
        assert!(policy.is_mostly_horizontal(-51.0, 50.0));
        assert!(!policy.should_commit(40.0, 60.0, 260.0));
    }

    #[test]
    fn should_commit_at_exact_threshold() {
        let policy = SwipeCommitPolicy::default();
        assert!(policy.should_commit(-104.0, 0.0, 260.0));
        assert!(!policy.should_commit(-103.9, 0.0, 260.0));
    }

    #[test]
    fn interactive_drag_excludes_anchor_entry_and_exit() {
        let policy = SwipeCommitPolicy::default();
        let pages = PageSequence::canonical();
        let cases = [
            (Page::Dock, GestureDirection::Left, false),
            (Page::Dock, GestureDirection::Right, false),
            (Page::Recents, GestureDirection::Right, false),
            (Page::Recents, GestureDirection::Left, true),
            (Page::Favorites, GestureDirection::Left, true),
            (Page::Favorites, GestureDirection::Right, true),
            (Page::Actions, GestureDirection::Left, true),
            (Page::Actions, GestureDirection::Right, true),
        ];
        for (page, direction, expected) in cases {
            assert_eq!(
                policy.allows_interactive_drag(page, direction, &pages),
                expected,
                "{page} {direction:?}"
            );
        }
    }

    proptest! {
        #[test]
        fn threshold_is_monotonic_and_bounded(a in -1000.0f32..2000.0, b in -1000.0f32..2000.0) {
            let policy = SwipeCommitPolicy::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(policy.commit_threshold(lo) <= policy.commit_threshold(hi));
            prop_assert!(policy.commit_threshold(lo) >= policy.minimum_swipe_threshold);
        }

        #[test]
        fn vertical_dominant_never_commits(dx in -5000.0f32..5000.0, extra in 0.0f32..5000.0, up in any::<bool>()) {
            let policy = SwipeCommitPolicy::default();
            let magnitude = dx.abs() + extra;
            let dy = if up { -magnitude } else { magnitude };
            prop_assert!(!policy.should_commit(dx, dy, 260.0));
        }
    }
}
