use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectPage { page: Page },
    /// 0-based position in the page sequence.
    SelectNth { index: usize },
    NextPage,
    PrevPage,
    CyclePage { forward: bool },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    SelectPage,
    SelectNth,
    NextPage,
    PrevPage,
    CyclePage,
    Quit,
    Gesture,
    Input,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelectPage => "select-page",
            Self::SelectNth => "select-nth",
            Self::NextPage => "next-page",
            Self::PrevPage => "prev-page",
            Self::CyclePage => "cycle-page",
            Self::Quit => "quit",
            Self::Gesture => "gesture",
            Self::Input => "input",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::SelectPage { .. } => ActionId::SelectPage,
            Self::SelectNth { .. } => ActionId::SelectNth,
            Self::NextPage => ActionId::NextPage,
            Self::PrevPage => ActionId::PrevPage,
            Self::CyclePage { .. } => ActionId::CyclePage,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
