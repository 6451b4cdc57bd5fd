mod actors;
mod animator;
mod core;
mod event_bus;
mod event_loop;
mod input_ops;
mod state;
pub(crate) mod terminal_session;
mod view_ops;

#[cfg(test)]
mod tests;

pub use self::core::{App, InteractionSubsystem, NavSubsystem, ViewSubsystem};
pub use state::{AppState, MenuRequest, MenuState, Mode, StatusState};
