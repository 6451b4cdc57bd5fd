use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, mode: Mode) -> Option<Command> {
    map_key_to_command_with_preset(key, mode, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    mode: Mode,
    preset: KeymapPreset,
) -> Option<Command> {
    match mode {
        Mode::Normal => match preset {
            KeymapPreset::Default => map_normal_mode_key_default(key),
            KeymapPreset::Emacs => map_normal_mode_key_emacs(key),
        },
        // Menu-mode keys drive the overlay selection directly.
        Mode::Menu => None,
    }
}

fn map_normal_mode_key_default(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Command::ScrollDown { lines: 1 }),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::ScrollUp { lines: 1 }),
        KeyCode::Char(' ') | KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::Char('b') | KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Command::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Command::Bottom),
        KeyCode::Char('n') | KeyCode::Tab => Some(Command::NextSection),
        KeyCode::Char('p') | KeyCode::BackTab => Some(Command::PrevSection),
        KeyCode::Char(digit @ '1'..='9') => Some(Command::GotoSection {
            index: digit as usize - '0' as usize,
        }),
        KeyCode::Char('m') | KeyCode::Enter => Some(Command::OpenMenu),
        KeyCode::Char('d') => Some(Command::DebugStatusToggle),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn map_normal_mode_key_emacs(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('x') => Some(Command::OpenMenu),
            KeyCode::Char('v') => Some(Command::PageUp),
            KeyCode::Char('<') => Some(Command::Top),
            KeyCode::Char('>') => Some(Command::Bottom),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Command::ScrollDown { lines: 1 }),
            KeyCode::Char('p') => Some(Command::ScrollUp { lines: 1 }),
            KeyCode::Char('v') => Some(Command::PageDown),
            KeyCode::Char('g') => Some(Command::Cancel),
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::PageUp => Some(Command::PageUp),
        _ => map_normal_mode_key_default(key),
    }
}
