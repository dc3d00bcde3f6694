mod layout;
mod popover;

pub use layout::{POPOVER_COLUMNS, POPOVER_ROWS, PopoverLayout, popover_layout};
pub use popover::{PagePane, PopoverView, draw_popover, tab_at};
