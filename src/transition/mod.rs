mod controller;
mod navigator;
mod spec;
mod state;

#[cfg(test)]
mod tests;

pub use controller::{PageTransitionController, TransitionSettings};
pub use navigator::PageNavigator;
pub use spec::{MotionTimings, TransitionKind, TransitionSpec, TransitionStyle};
pub use state::{NeighborPreview, OffsetAnimation, TransitionState};
