use crate::app::AppState;
use crate::content::NavItem;
use crate::error::{AppError, AppResult};
use crate::scroll::NavController;

use super::types::{ActionId, CommandOutcome, ViewMetrics};

pub(crate) fn scroll_down(
    app: &mut AppState,
    metrics: ViewMetrics,
    lines: usize,
) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::ScrollDown);
    scroll_to(app, metrics, app.scroll_offset.saturating_add(lines), "bottom")
}

pub(crate) fn scroll_up(
    app: &mut AppState,
    metrics: ViewMetrics,
    lines: usize,
) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::ScrollUp);
    scroll_to(app, metrics, app.scroll_offset.saturating_sub(lines), "top")
}

pub(crate) fn page_down(app: &mut AppState, metrics: ViewMetrics) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::PageDown);
    scroll_to(
        app,
        metrics,
        app.scroll_offset.saturating_add(metrics.page_step.max(1)),
        "bottom",
    )
}

pub(crate) fn page_up(app: &mut AppState, metrics: ViewMetrics) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::PageUp);
    scroll_to(
        app,
        metrics,
        app.scroll_offset.saturating_sub(metrics.page_step.max(1)),
        "top",
    )
}

pub(crate) fn top(app: &mut AppState, metrics: ViewMetrics) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::Top);
    scroll_to(app, metrics, 0, "top")
}

pub(crate) fn bottom(app: &mut AppState, metrics: ViewMetrics) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::Bottom);
    scroll_to(app, metrics, metrics.max_offset, "bottom")
}

fn scroll_to(
    app: &mut AppState,
    metrics: ViewMetrics,
    target: usize,
    edge: &str,
) -> AppResult<CommandOutcome> {
    let target = target.min(metrics.max_offset);
    if target == app.scroll_offset {
        app.status.message = format!("already at the {edge}");
        return Ok(CommandOutcome::Noop);
    }

    app.scroll_offset = target;
    app.status.message = format!("row {}/{}", app.scroll_offset, metrics.max_offset);
    Ok(CommandOutcome::Applied)
}

/// Next/previous navigation target relative to the active section, or None
/// at the edge of the list.
pub(crate) fn resolve_section_step(nav: &NavController, forward: bool) -> Option<&NavItem> {
    let active = nav.active_index();
    let target = if forward {
        active.checked_add(1).filter(|idx| *idx < nav.items().len())?
    } else {
        active.checked_sub(1)?
    };
    Some(&nav.items()[target])
}

/// 1-based section lookup used by goto-section and the menu overlay.
pub(crate) fn resolve_section_index(nav: &NavController, index: usize) -> AppResult<&NavItem> {
    if index == 0 || index > nav.items().len() {
        return Err(AppError::invalid_argument(format!(
            "section number must be between 1 and {}",
            nav.items().len()
        )));
    }
    Ok(&nav.items()[index - 1])
}

pub(crate) fn set_debug_status_visible(
    app: &mut AppState,
    visible: bool,
    action_id: ActionId,
) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(action_id);
    if app.debug_status_visible == visible {
        let state = if visible { "on" } else { "off" };
        app.status.message = format!("debug status unchanged ({state})");
        return Ok(CommandOutcome::Noop);
    }

    app.debug_status_visible = visible;
    let state = if visible { "on" } else { "off" };
    app.status.message = format!("debug status: {state}");
    Ok(CommandOutcome::Applied)
}

#[cfg(test)]
mod tests {
    use crate::app::AppState;
    use crate::content::NavItem;
    use crate::scroll::{NavController, NavPolicy};

    use super::super::types::ViewMetrics;
    use super::{bottom, resolve_section_index, resolve_section_step, scroll_down, scroll_up};

    fn metrics(max_offset: usize) -> ViewMetrics {
        ViewMetrics {
            viewport_height: 20,
            max_offset,
            page_step: 18,
        }
    }

    fn make_nav(ids: &[&str], initial: usize) -> NavController {
        let items = ids
            .iter()
            .map(|id| NavItem {
                id: id.to_string(),
                label: id.to_string(),
            })
            .collect();
        NavController::new(items, initial, NavPolicy::default()).expect("nav should initialize")
    }

    #[test]
    fn scroll_clamps_to_document_bounds() {
        let mut app = AppState::default();
        scroll_down(&mut app, metrics(10), 50).expect("scroll should apply");
        assert_eq!(app.scroll_offset, 10);

        let outcome = scroll_down(&mut app, metrics(10), 1).expect("scroll should dispatch");
        assert_eq!(outcome, crate::command::CommandOutcome::Noop);
        assert_eq!(app.status.message, "already at the bottom");

        scroll_up(&mut app, metrics(10), 99).expect("scroll should apply");
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn bottom_is_a_noop_when_already_there() {
        let mut app = AppState::default();
        bottom(&mut app, metrics(30)).expect("bottom should apply");
        assert_eq!(app.scroll_offset, 30);
        let outcome = bottom(&mut app, metrics(30)).expect("bottom should dispatch");
        assert_eq!(outcome, crate::command::CommandOutcome::Noop);
    }

    #[test]
    fn section_step_resolution_stops_at_the_edges() {
        let nav = make_nav(&["a", "b", "c"], 2);
        assert!(resolve_section_step(&nav, true).is_none());
        assert_eq!(resolve_section_step(&nav, false).map(|i| i.id.as_str()), Some("b"));

        let nav = make_nav(&["a", "b"], 0);
        assert_eq!(resolve_section_step(&nav, true).map(|i| i.id.as_str()), Some("b"));
        assert!(resolve_section_step(&nav, false).is_none());
    }

    #[test]
    fn section_index_resolution_is_one_based_and_bounded() {
        let nav = make_nav(&["a", "b"], 0);
        assert_eq!(resolve_section_index(&nav, 1).expect("in range").id, "a");
        assert_eq!(resolve_section_index(&nav, 2).expect("in range").id, "b");
        assert!(resolve_section_index(&nav, 0).is_err());
        assert!(resolve_section_index(&nav, 3).is_err());
    }
}
