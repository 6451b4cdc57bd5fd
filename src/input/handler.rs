use std::time::Instant;

use crossterm::event::{Event, KeyEventKind, MouseEventKind};

use crate::command::Command;
use crate::error::AppResult;

use crate::app::App;
use crate::app::terminal_session::TerminalSurface;

pub(crate) struct InputEventOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) command: Option<Command>,
}

impl InputEventOutcome {
    fn none() -> Self {
        Self {
            quit_requested: false,
            command: None,
        }
    }

    fn command(command: Command) -> Self {
        Self {
            quit_requested: false,
            command: Some(command),
        }
    }
}

impl App {
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        session: &mut impl TerminalSurface,
        needs_redraw: &mut bool,
        last_input_at: &mut Instant,
    ) -> AppResult<InputEventOutcome> {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                *last_input_at = Instant::now();
                let section_count = self.nav.controller.items().len();
                let outcome = self.interaction.handle_key_event(
                    &mut self.state,
                    key,
                    &self.config,
                    section_count,
                )?;
                if outcome.clear_terminal {
                    session.clear()?;
                }
                if outcome.redraw {
                    *needs_redraw = true;
                }
                Ok(InputEventOutcome {
                    quit_requested: outcome.quit_requested,
                    command: outcome.command,
                })
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => {
                    *last_input_at = Instant::now();
                    Ok(InputEventOutcome::command(Command::ScrollDown {
                        lines: self.config.scroll.wheel_step,
                    }))
                }
                MouseEventKind::ScrollUp => {
                    *last_input_at = Instant::now();
                    Ok(InputEventOutcome::command(Command::ScrollUp {
                        lines: self.config.scroll.wheel_step,
                    }))
                }
                _ => Ok(InputEventOutcome::none()),
            },
            Event::Resize(_, _) => {
                *last_input_at = Instant::now();
                *needs_redraw = true;
                Ok(InputEventOutcome::none())
            }
            _ => Ok(InputEventOutcome::none()),
        }
    }
}
