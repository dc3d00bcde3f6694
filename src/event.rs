use crossterm::event::Event;

use crate::command::{ActionId, Command, CommandOutcome};
use crate::page::Page;
use crate::transition::TransitionSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Forward,
    Backward,
}

impl NavDirection {
    /// Derived from page order alone, independent of what triggered the change.
    pub fn between(from: Page, to: Page) -> Self {
        if to.order_index() >= from.order_index() {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Describes *why* the active page changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// Live-following drag released past the threshold.
    Gesture,
    /// Non-interactive swipe committed at gesture end.
    Snap,
    /// Keyboard shortcut, tab bar or menu.
    Direct,
}

/// Notification delivered to page-change observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: Page,
    pub to: Page,
    pub direction: NavDirection,
    pub source: ChangeSource,
    pub animated: bool,
    /// Parameters an observer uses when it animates the swap itself.
    pub transition: TransitionSpec,
    /// The controller's own offset animation already shows the change;
    /// observers must not run their own transition.
    pub suppressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    PageChanged(PageChange),
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
}
