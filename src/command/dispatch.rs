use tracing::debug;

use crate::event::{AppEvent, NavDirection};
use crate::transition::PageNavigator;

use super::types::{Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

/// Routes a command onto the direct-selection entry points. Page-change
/// notifications reach observers through the navigator's sink, not here.
pub fn dispatch(navigator: &mut PageNavigator, cmd: Command) -> CommandDispatchResult {
    let action_id = cmd.action_id();
    let changed = match cmd {
        Command::SelectPage { page } => Some(navigator.select_page(page)),
        Command::SelectNth { index } => Some(navigator.select_nth(index)),
        Command::NextPage => Some(navigator.select_adjacent(NavDirection::Forward)),
        Command::PrevPage => Some(navigator.select_adjacent(NavDirection::Backward)),
        Command::CyclePage { forward } => Some(navigator.cycle(forward)),
        Command::Quit => None,
    };
    let outcome = match changed {
        Some(true) => CommandOutcome::Applied,
        Some(false) => CommandOutcome::Noop,
        None => CommandOutcome::QuitRequested,
    };
    debug!(action = action_id.as_str(), ?outcome, "command dispatched");

    CommandDispatchResult {
        outcome,
        emitted_events: vec![AppEvent::CommandExecuted {
            id: action_id,
            outcome,
        }],
    }
}
