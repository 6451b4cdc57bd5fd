use crate::app::{App, MenuRequest, Mode};
use crate::command::{Command, CommandOutcome, dispatch};
use crate::config::Config;
use crate::content::Portfolio;
use crate::event::AppEvent;

use super::terminal_surface::TestTerminalSurface;

/// Three sections with enough body text that the document is several
/// hundred rows tall, so the 100-row policies have room to act.
fn tall_portfolio() -> Portfolio {
    let mut raw = String::from(
        "name = \"Amit Khanal\"\n\n[hero]\nquote = \"Dream and write.\"\nattribution = \"a writer\"\n\n",
    );
    for (id, label) in [("about", "About"), ("writing", "Writing"), ("contact", "Contact")] {
        raw.push_str(&format!("[[sections]]\nid = \"{id}\"\nlabel = \"{label}\"\nbody = [\n"));
        for i in 0..120 {
            raw.push_str(&format!("  \"paragraph {i} of {id}\",\n"));
        }
        raw.push_str("]\n\n");
    }
    Portfolio::from_toml_str(&raw).expect("generated content should parse")
}

fn app_and_surface() -> (App, TestTerminalSurface) {
    let app = App::new_with_config(tall_portfolio(), "portfolio.toml", Config::default())
        .expect("app should initialize");
    let surface = TestTerminalSurface::new(80, 24).expect("test terminal should initialize");
    (app, surface)
}

fn run_command(app: &mut App, surface: &TestTerminalSurface, cmd: Command) -> CommandOutcome {
    let metrics = app.view_metrics(surface);
    let before = app.state.scroll_offset;
    let result = dispatch(
        &mut app.state,
        cmd,
        &app.nav.controller,
        metrics,
        &mut app.interaction.pending_menu,
    )
    .expect("dispatch should succeed");
    if app.state.scroll_offset != before {
        app.publish_scroll();
    }
    result.outcome
}

#[test]
fn jumping_to_the_bottom_hides_the_header_and_activates_the_last_section() {
    let (mut app, surface) = app_and_surface();
    let metrics = app.view_metrics(&surface);
    assert!(metrics.max_offset > 200, "content must out-span the viewport");

    let outcome = run_command(&mut app, &surface, Command::Bottom);
    assert_eq!(outcome, CommandOutcome::Applied);

    let events = app.drain_scroll_notifications(&surface);
    assert!(!app.nav.controller.header_visible());
    assert_eq!(app.nav.controller.active_item().id, "contact");
    assert!(events.iter().any(|event| matches!(
        event,
        AppEvent::HeaderVisibilityChanged { visible: false }
    )));
    assert!(events.iter().any(|event| matches!(
        event,
        AppEvent::SectionChanged { to, .. } if to == "contact"
    )));
}

#[test]
fn returning_to_the_top_restores_the_header_and_first_section() {
    let (mut app, surface) = app_and_surface();
    run_command(&mut app, &surface, Command::Bottom);
    app.drain_scroll_notifications(&surface);
    assert!(!app.nav.controller.header_visible());

    run_command(&mut app, &surface, Command::Top);
    app.drain_scroll_notifications(&surface);

    assert!(app.nav.controller.header_visible());
    assert_eq!(app.nav.controller.active_item().id, "about");
}

#[test]
fn navigation_animates_to_the_anchor_and_closes_the_menu() {
    let (mut app, surface) = app_and_surface();
    app.interaction.pending_menu.push_back(MenuRequest::Open);
    app.apply_menu_requests();
    assert_eq!(app.state.mode, Mode::Menu);

    app.begin_navigation("contact", &surface)
        .expect("known section should navigate");

    // The request only starts the animation; the active section is still
    // driven by scroll notifications.
    assert!(app.view.animator.is_active());
    assert_eq!(app.nav.controller.active_item().id, "about");

    app.apply_menu_requests();
    assert_eq!(app.state.mode, Mode::Normal, "navigation closes the menu");

    while let Some(next) = app.view.animator.advance(app.state.scroll_offset) {
        app.state.scroll_offset = next;
        app.publish_scroll();
    }
    app.drain_scroll_notifications(&surface);

    assert_eq!(app.nav.controller.active_item().id, "contact");
    assert!(!app.view.animator.is_active());
}

#[test]
fn unknown_navigation_targets_are_rejected() {
    let (mut app, surface) = app_and_surface();
    let err = app.begin_navigation("guestbook", &surface);
    assert!(err.is_err());
    assert!(!app.view.animator.is_active());
}

#[test]
fn noop_scrolls_do_not_publish_notifications() {
    let (mut app, surface) = app_and_surface();
    let outcome = run_command(&mut app, &surface, Command::ScrollUp { lines: 3 });
    assert_eq!(outcome, CommandOutcome::Noop);

    let events = app.drain_scroll_notifications(&surface);
    assert!(events.is_empty());
    assert!(app.nav.controller.header_visible());
}
