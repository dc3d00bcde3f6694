mod clock;
mod traits;

pub use clock::{ManualClock, SystemClock};
pub use traits::{
    Clock, Collaborators, MotionPreference, PageChangeSink, RecordingSink, ViewportSource,
};
