use tracing::trace;

use super::types::{AccumulatedDelta, GestureInput, GesturePhase, GestureSample};

/// Sums incremental deltas over the lifetime of one gesture stream.
///
/// Nothing is carried across streams: the total resets on `Began` and after
/// every terminal phase. Phases arriving outside an active stream are
/// dropped, since some sources open with a `Changed`.
#[derive(Debug, Clone, Default)]
pub struct GestureDeltaAccumulator {
    active: Option<AccumulatedDelta>,
}

impl GestureDeltaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn total(&self) -> AccumulatedDelta {
        self.active.unwrap_or(AccumulatedDelta::ZERO)
    }

    pub fn began(&mut self) {
        self.active = Some(AccumulatedDelta::ZERO);
    }

    pub fn changed(&mut self, dx: f32, dy: f32) -> Option<AccumulatedDelta> {
        let total = self.active.as_mut()?;
        total.dx += dx;
        total.dy += dy;
        Some(*total)
    }

    /// Ends the stream and reports the final total once. Used for both
    /// `Ended` and `Cancelled`; whether a cancelled total may commit is the
    /// caller's decision.
    pub fn finish(&mut self, dx: f32, dy: f32) -> Option<AccumulatedDelta> {
        let mut total = self.active.take()?;
        total.dx += dx;
        total.dy += dy;
        Some(total)
    }

    /// Drops the current stream without reporting.
    pub fn reset(&mut self) {
        self.active = None;
    }

    pub fn handle(&mut self, input: GestureInput) -> Option<GestureSample> {
        let total = match input.phase {
            GesturePhase::Began => {
                self.began();
                Some(AccumulatedDelta::ZERO)
            }
            phase if phase.is_terminal() => self.finish(input.dx, input.dy),
            _ => self.changed(input.dx, input.dy),
        };
        if total.is_none() {
            trace!(phase = ?input.phase, "gesture phase outside an active stream dropped");
        }
        total.map(|total| GestureSample {
            phase: input.phase,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::gesture::{AccumulatedDelta, GestureInput, GesturePhase};

    use super::GestureDeltaAccumulator;

    #[test]
    fn changed_events_accumulate_running_total() {
        let mut acc = GestureDeltaAccumulator::new();
        acc.handle(GestureInput::began());
        acc.handle(GestureInput::changed(-10.0, 2.0));
        let sample = acc
            .handle(GestureInput::changed(-15.0, -1.0))
            .expect("stream is active");
        assert_eq!(sample.phase, GesturePhase::Changed);
        assert_eq!(sample.total, AccumulatedDelta::new(-25.0, 1.0));
    }

    #[test]
    fn terminal_phase_reports_once_then_resets() {
        let mut acc = GestureDeltaAccumulator::new();
        acc.began();
        acc.changed(40.0, 0.0);
        let end = acc.handle(GestureInput::ended(5.0, 1.0)).expect("active");
        assert_eq!(end.total, AccumulatedDelta::new(45.0, 1.0));
        assert!(!acc.is_active());
        assert_eq!(acc.total(), AccumulatedDelta::ZERO);
        assert!(acc.handle(GestureInput::ended(0.0, 0.0)).is_none());
    }

    #[test]
    fn cancelled_still_reports_accumulated_total() {
        let mut acc = GestureDeltaAccumulator::new();
        acc.began();
        acc.changed(-120.0, 3.0);
        let sample = acc
            .handle(GestureInput::cancelled(0.0, 0.0))
            .expect("active");
        assert_eq!(sample.phase, GesturePhase::Cancelled);
        assert_eq!(sample.total, AccumulatedDelta::new(-120.0, 3.0));
    }

    #[test]
    fn changed_without_began_is_noop() {
        let mut acc = GestureDeltaAccumulator::new();
        assert!(acc.handle(GestureInput::changed(-30.0, 0.0)).is_none());
        assert!(acc.handle(GestureInput::cancelled(-30.0, 0.0)).is_none());
        assert_eq!(acc.total(), AccumulatedDelta::ZERO);
    }

    #[test]
    fn new_stream_starts_from_zero() {
        let mut acc = GestureDeltaAccumulator::new();
        acc.began();
        acc.changed(90.0, 0.0);
        acc.began();
        let sample = acc.handle(GestureInput::changed(1.0, 0.0)).expect("active");
        assert_eq!(sample.total, AccumulatedDelta::new(1.0, 0.0));
    }
}
