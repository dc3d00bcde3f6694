use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Popover footprint in terminal cells before clamping to the screen.
pub const POPOVER_COLUMNS: u16 = 52;
pub const POPOVER_ROWS: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverLayout {
    pub frame: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn popover_layout(area: Rect) -> PopoverLayout {
    let frame = centered_rect(area, POPOVER_COLUMNS, POPOVER_ROWS);
    let inner = Rect::new(
        frame.x.saturating_add(1),
        frame.y.saturating_add(1),
        frame.width.saturating_sub(2),
        frame.height.saturating_sub(2),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    PopoverLayout {
        frame,
        tabs: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Equal-width segments across `row`, one per tab. The last segment absorbs
/// the remainder.
pub fn tab_segments(row: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || row.width == 0 {
        return Vec::new();
    }
    let count = count.min(row.width as usize) as u16;
    let base = row.width / count;
    (0..count)
        .map(|index| {
            let x = row.x + index * base;
            let width = if index + 1 == count {
                row.width - index * base
            } else {
                base
            };
            Rect::new(x, row.y, width, row.height)
        })
        .collect()
}

/// Visible part of `area` after shifting it `offset` columns, plus how many
/// leading columns fell off the left edge.
pub fn shifted_rect(area: Rect, offset: i32) -> Option<(Rect, u16)> {
    let left = i32::from(area.x) + offset;
    let right = left + i32::from(area.width);
    let clip_left = left.max(i32::from(area.x));
    let clip_right = right.min(i32::from(area.x) + i32::from(area.width));
    if clip_right <= clip_left {
        return None;
    }
    let skipped = (clip_left - left) as u16;
    let rect = Rect::new(
        clip_left as u16,
        area.y,
        (clip_right - clip_left) as u16,
        area.height,
    );
    Some((rect, skipped))
}
