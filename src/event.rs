use crossterm::event::Event;

use crate::app::Mode;
use crate::command::{ActionId, Command, CommandOutcome};

/// Why a navigation happened. Carried on events so consumers can tell a
/// deliberate jump from passive scroll tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavReason {
    /// Incremental movement (next-section, prev-section).
    Step,
    /// Direct jump (goto-section, menu selection).
    Jump,
    /// Derived from scroll position while reading.
    Scroll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    /// A smooth scroll toward `target` was requested. The viewport layer
    /// owns the resulting animation; the active section is untouched until
    /// scroll notifications catch up.
    NavigationRequested {
        target: String,
        reason: NavReason,
    },
    SectionChanged {
        from: String,
        to: String,
        reason: NavReason,
    },
    HeaderVisibilityChanged {
        visible: bool,
    },
    ModeChanged {
        from: Mode,
        to: Mode,
    },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    AnimationTick,
    Wake,
}
