use crate::error::{AppError, AppResult};
use crate::gesture::GestureDirection;

use super::Page;

/// Canonical, ordered list of the pages available in a popover session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSequence {
    pages: Vec<Page>,
}

impl Default for PageSequence {
    fn default() -> Self {
        Self::canonical()
    }
}

impl PageSequence {
    pub fn canonical() -> Self {
        Self {
            pages: Page::ALL.to_vec(),
        }
    }

    /// Builds a sequence from any subset of pages. Input order is ignored:
    /// pages are sorted by `order_index` and de-duplicated.
    pub fn new(pages: impl IntoIterator<Item = Page>) -> AppResult<Self> {
        let mut pages: Vec<Page> = pages.into_iter().collect();
        pages.sort_by_key(|page| page.order_index());
        pages.dedup();
        if pages.is_empty() {
            return Err(AppError::invalid_argument(
                "page sequence requires at least one page",
            ));
        }
        Ok(Self { pages })
    }

    pub fn ordered_pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn first(&self) -> Page {
        self.pages[0]
    }

    pub fn contains(&self, page: Page) -> bool {
        self.position(page).is_some()
    }

    pub fn position(&self, page: Page) -> Option<usize> {
        self.pages.iter().position(|candidate| *candidate == page)
    }

    pub fn nth(&self, index: usize) -> Option<Page> {
        self.pages.get(index).copied()
    }

    /// Neighbor of `of` in the given direction. `Left` reveals the next page,
    /// `Right` the previous one. No wraparound.
    pub fn adjacent(&self, of: Page, direction: GestureDirection) -> Option<Page> {
        let idx = self.position(of)?;
        match direction {
            GestureDirection::Left => self.nth(idx + 1),
            GestureDirection::Right => idx.checked_sub(1).and_then(|prev| self.nth(prev)),
        }
    }

    /// Tab-style cycling with wraparound; unknown pages restart at the first.
    pub fn cycle(&self, of: Page, forward: bool) -> Page {
        let Some(idx) = self.position(of) else {
            return self.first();
        };
        let len = self.pages.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.pages[next]
    }
}
