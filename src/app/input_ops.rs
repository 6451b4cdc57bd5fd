use crossterm::event::{KeyCode, KeyEvent};

use crate::command::{ActionId, Command};
use crate::config::Config;
use crate::error::AppResult;
use crate::event::AppEvent;
use crate::input::keymap::{KeymapPreset, map_key_to_command_with_preset};

use super::core::{App, InteractionSubsystem};
use super::state::{AppState, MenuRequest, Mode};

#[derive(Debug, Clone, Default)]
pub(crate) struct KeyEventOutcome {
    pub redraw: bool,
    pub clear_terminal: bool,
    pub quit_requested: bool,
    pub command: Option<Command>,
}

impl InteractionSubsystem {
    pub(crate) fn handle_key_event(
        &mut self,
        state: &mut AppState,
        key: KeyEvent,
        config: &Config,
        section_count: usize,
    ) -> AppResult<KeyEventOutcome> {
        if state.mode == Mode::Menu {
            return Ok(self.handle_menu_key(state, key, section_count));
        }

        let preset = KeymapPreset::parse(&config.keymap.preset);
        let Some(command) = map_key_to_command_with_preset(key, state.mode, preset) else {
            return Ok(KeyEventOutcome::default());
        };

        if matches!(command, Command::Quit) {
            return Ok(KeyEventOutcome {
                quit_requested: true,
                ..KeyEventOutcome::default()
            });
        }

        // Keyboard scrolling moves in line-step units; the keymap stays
        // config-free and reports single steps.
        let command = match command {
            Command::ScrollDown { lines } => Command::ScrollDown {
                lines: lines.saturating_mul(config.scroll.line_step),
            },
            Command::ScrollUp { lines } => Command::ScrollUp {
                lines: lines.saturating_mul(config.scroll.line_step),
            },
            other => other,
        };

        Ok(KeyEventOutcome {
            command: Some(command),
            ..KeyEventOutcome::default()
        })
    }

    fn handle_menu_key(
        &mut self,
        state: &mut AppState,
        key: KeyEvent,
        section_count: usize,
    ) -> KeyEventOutcome {
        let last = section_count.saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.menu.selected = state.menu.selected.saturating_sub(1);
                KeyEventOutcome {
                    redraw: true,
                    ..KeyEventOutcome::default()
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.menu.selected = (state.menu.selected + 1).min(last);
                KeyEventOutcome {
                    redraw: true,
                    ..KeyEventOutcome::default()
                }
            }
            KeyCode::Enter => KeyEventOutcome {
                redraw: true,
                command: Some(Command::GotoSection {
                    index: state.menu.selected + 1,
                }),
                ..KeyEventOutcome::default()
            },
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => {
                self.pending_menu.push_back(MenuRequest::Close);
                KeyEventOutcome {
                    redraw: true,
                    clear_terminal: true,
                    ..KeyEventOutcome::default()
                }
            }
            _ => KeyEventOutcome::default(),
        }
    }
}

impl App {
    /// Applies queued menu transitions. Deferred so dispatch, key handling,
    /// and navigation side effects all funnel mode changes through one
    /// place.
    pub(crate) fn apply_menu_requests(&mut self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(request) = self.interaction.pending_menu.pop_front() {
            match request {
                MenuRequest::Open => {
                    if self.state.mode != Mode::Menu {
                        let from = self.state.mode;
                        self.state.mode = Mode::Menu;
                        self.state.menu.selected = self.nav.controller.active_index();
                        self.state.status.last_action_id = Some(ActionId::OpenMenu);
                        self.state.status.message = "menu opened".to_string();
                        events.push(AppEvent::ModeChanged {
                            from,
                            to: Mode::Menu,
                        });
                    }
                }
                MenuRequest::Close => {
                    if self.state.mode == Mode::Menu {
                        self.state.mode = Mode::Normal;
                        self.state.status.last_action_id = Some(ActionId::CloseMenu);
                        self.state.status.message = "menu closed".to_string();
                        events.push(AppEvent::ModeChanged {
                            from: Mode::Menu,
                            to: Mode::Normal,
                        });
                    }
                }
            }
        }
        events
    }
}
