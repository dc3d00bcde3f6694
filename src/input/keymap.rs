use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Vim,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "vim" => Self::Vim,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent) -> Option<Command> {
    map_key_to_command_with_preset(key, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(key: KeyEvent, preset: KeymapPreset) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match preset {
        KeymapPreset::Default => map_default_key(key),
        KeymapPreset::Vim => map_vim_key(key),
    }
}

fn map_default_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(digit @ '1'..='9') => Some(Command::SelectNth {
            index: digit as usize - '1' as usize,
        }),
        KeyCode::Left => Some(Command::PrevPage),
        KeyCode::Right => Some(Command::NextPage),
        KeyCode::Tab => Some(Command::CyclePage { forward: true }),
        KeyCode::BackTab => Some(Command::CyclePage { forward: false }),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn map_vim_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('h') => Some(Command::PrevPage),
        KeyCode::Char('l') => Some(Command::NextPage),
        KeyCode::Char('g') => Some(Command::SelectNth { index: 0 }),
        _ => map_default_key(key),
    }
}
