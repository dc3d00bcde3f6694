use std::fmt;

use crate::error::{AppError, AppResult};

/// A navigable page of the popover.
///
/// The declaration order is the canonical order; `order_index` is stable for
/// the process lifetime and drives both adjacency and transition direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Dock,
    Recents,
    Favorites,
    Actions,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dock, Page::Recents, Page::Favorites, Page::Actions];

    /// The page exempt from live drag previews.
    pub const ANCHOR: Page = Page::Dock;

    pub fn order_index(self) -> usize {
        match self {
            Self::Dock => 0,
            Self::Recents => 1,
            Self::Favorites => 2,
            Self::Actions => 3,
        }
    }

    pub fn is_anchor(self) -> bool {
        self == Self::ANCHOR
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Dock => "dock",
            Self::Recents => "recents",
            Self::Favorites => "favorites",
            Self::Actions => "actions",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dock => "Dock",
            Self::Recents => "Recents",
            Self::Favorites => "Favorites",
            Self::Actions => "Actions",
        }
    }

    pub fn parse(value: &str) -> AppResult<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.id().eq_ignore_ascii_case(value))
            .ok_or_else(|| AppError::invalid_argument(format!("unknown page id: {value}")))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
