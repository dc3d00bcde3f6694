mod sequence;
mod types;

pub use sequence::PageSequence;
pub use types::Page;
