mod accumulator;
mod policy;
mod types;

pub use accumulator::GestureDeltaAccumulator;
pub use policy::SwipeCommitPolicy;
pub use types::{AccumulatedDelta, GestureDirection, GestureInput, GesturePhase, GestureSample};
