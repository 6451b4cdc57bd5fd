use std::collections::VecDeque;

use crate::app::{AppState, MenuRequest, Mode};
use crate::error::AppResult;
use crate::event::{AppEvent, NavReason};
use crate::scroll::NavController;

use super::core::{
    bottom, page_down, page_up, resolve_section_index, resolve_section_step, scroll_down,
    scroll_up, set_debug_status_visible, top,
};
use super::types::{ActionId, Command, CommandOutcome, ViewMetrics};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

pub fn dispatch(
    app: &mut AppState,
    cmd: Command,
    nav: &NavController,
    metrics: ViewMetrics,
    menu_requests: &mut VecDeque<MenuRequest>,
) -> AppResult<CommandDispatchResult> {
    let action_id = cmd.action_id();
    let mut emitted_events = Vec::new();

    let outcome = match cmd {
        Command::ScrollDown { lines } => scroll_down(app, metrics, lines),
        Command::ScrollUp { lines } => scroll_up(app, metrics, lines),
        Command::PageDown => page_down(app, metrics),
        Command::PageUp => page_up(app, metrics),
        Command::Top => top(app, metrics),
        Command::Bottom => bottom(app, metrics),
        Command::NextSection | Command::PrevSection => {
            let forward = action_id == ActionId::NextSection;
            app.status.last_action_id = Some(action_id);
            match resolve_section_step(nav, forward) {
                Some(item) => {
                    app.status.message = format!("navigating to {}", item.label);
                    emitted_events.push(AppEvent::NavigationRequested {
                        target: item.id.clone(),
                        reason: NavReason::Step,
                    });
                    Ok(CommandOutcome::Applied)
                }
                None => {
                    let edge = if forward { "last" } else { "first" };
                    app.status.message = format!("already at the {edge} section");
                    Ok(CommandOutcome::Noop)
                }
            }
        }
        Command::GotoSection { index } => {
            app.status.last_action_id = Some(ActionId::GotoSection);
            // Digit keys are bound unconditionally, so an out-of-range
            // number is ordinary input, not a dispatch failure.
            match resolve_section_index(nav, index) {
                Ok(item) => {
                    app.status.message = format!("navigating to {}", item.label);
                    emitted_events.push(AppEvent::NavigationRequested {
                        target: item.id.clone(),
                        reason: NavReason::Jump,
                    });
                    Ok(CommandOutcome::Applied)
                }
                Err(err) => {
                    app.status.message = err.to_string();
                    Ok(CommandOutcome::Noop)
                }
            }
        }
        Command::OpenMenu => {
            menu_requests.push_back(MenuRequest::Open);
            app.status.last_action_id = Some(ActionId::OpenMenu);
            app.status.message = "opening menu".to_string();
            Ok(CommandOutcome::Applied)
        }
        Command::CloseMenu => {
            menu_requests.push_back(MenuRequest::Close);
            app.status.last_action_id = Some(ActionId::CloseMenu);
            app.status.message = "closing menu".to_string();
            Ok(CommandOutcome::Applied)
        }
        Command::DebugStatusShow => set_debug_status_visible(app, true, ActionId::DebugStatusShow),
        Command::DebugStatusHide => set_debug_status_visible(app, false, ActionId::DebugStatusHide),
        Command::DebugStatusToggle => {
            let visible = !app.debug_status_visible;
            set_debug_status_visible(app, visible, ActionId::DebugStatusToggle)
        }
        Command::Cancel => {
            if app.mode == Mode::Menu {
                menu_requests.push_back(MenuRequest::Close);
            }
            app.status.last_action_id = Some(ActionId::Cancel);
            app.status.message = "canceled".to_string();
            Ok(CommandOutcome::Applied)
        }
        Command::Quit => {
            app.status.last_action_id = Some(ActionId::Quit);
            app.status.message = "quit requested".to_string();
            Ok(CommandOutcome::QuitRequested)
        }
    }?;

    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    Ok(CommandDispatchResult {
        outcome,
        emitted_events,
    })
}
