use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::page::Page;

use super::layout::{PopoverLayout, shifted_rect, tab_segments};

/// A page drawn into the body at a horizontal offset in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePane {
    pub page: Page,
    pub offset: i32,
}

#[derive(Debug, Clone)]
pub struct PopoverView<'a> {
    pub pages: &'a [Page],
    pub current: Page,
    pub panes: Vec<PagePane>,
    pub status: &'a str,
}

pub fn draw_popover(frame: &mut Frame<'_>, layout: PopoverLayout, view: &PopoverView<'_>) {
    if layout.frame.width < 3 || layout.frame.height < 3 {
        return;
    }

    frame.render_widget(Clear, layout.frame);
    let block = Block::default()
        .title(" pager ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, layout.frame);

    draw_tabs(frame, layout.tabs, view.pages, view.current);
    for pane in &view.panes {
        draw_pane(frame, layout.body, view.pages, *pane);
    }

    let status = Paragraph::new(view.status).style(Style::default().fg(Color::Gray));
    frame.render_widget(status, layout.status);
}

fn draw_tabs(frame: &mut Frame<'_>, row: Rect, pages: &[Page], current: Page) {
    for (page, segment) in pages.iter().zip(tab_segments(row, pages.len())) {
        let style = if *page == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let tab = Paragraph::new(page.title())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(tab, segment);
    }
}

fn draw_pane(frame: &mut Frame<'_>, body: Rect, pages: &[Page], pane: PagePane) {
    let Some((area, skipped)) = shifted_rect(body, pane.offset) else {
        return;
    };
    let position = pages
        .iter()
        .position(|page| *page == pane.page)
        .map_or(0, |index| index + 1);

    let mut lines = vec![
        Line::from(""),
        Line::from(pane.page.title()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format!("page {position} of {}", pages.len())),
    ];
    if pane.page.is_anchor() {
        lines.push(Line::from("home page, reachable from the tabs"));
    } else {
        lines.push(Line::from("drag sideways to switch pages"));
    }

    // Clipped panes scroll their text so it stays glued to the moving edge.
    let paragraph = Paragraph::new(lines).scroll((0, skipped));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Tab under the given cell, if any.
pub fn tab_at(layout: &PopoverLayout, pages: &[Page], column: u16, row: u16) -> Option<Page> {
    if row != layout.tabs.y {
        return None;
    }
    pages
        .iter()
        .zip(tab_segments(layout.tabs, pages.len()))
        .find(|(_, segment)| column >= segment.x && column < segment.x + segment.width)
        .map(|(page, _)| *page)
}
