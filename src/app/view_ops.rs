use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::command::{ActionId, ViewMetrics};
use crate::error::AppResult;
use crate::event::{AppEvent, NavReason};
use crate::scroll::{AnchorSource, NavController, ScrollOutcome};
use crate::ui;

use super::core::App;
use super::state::{MenuRequest, Mode};
use super::terminal_session::TerminalSurface;

/// Anchor source used before the first layout exists; every lookup misses,
/// so the controller leaves the active section alone.
struct UnmeasuredAnchors;

impl AnchorSource for UnmeasuredAnchors {
    fn anchor_top(&self, _id: &str) -> Option<usize> {
        None
    }
}

/// Animation keeps the loop on the short timeout; otherwise input latency
/// dominates and the idle timeout is fine.
pub(crate) fn select_wake_timeout(busy: bool, idle: Duration, busy_timeout: Duration) -> Duration {
    if busy { busy_timeout } else { idle }
}

impl App {
    fn body_area(&self, session: &impl TerminalSurface) -> Option<(u16, usize)> {
        let size = session.size().ok()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = ui::split_layout(
            area,
            self.nav.controller.header_visible(),
            self.state.debug_status_visible,
        );
        if layout.body.width == 0 || layout.body.height == 0 {
            return None;
        }
        Some((layout.body.width, layout.body.height as usize))
    }

    pub(crate) fn view_metrics(&mut self, session: &impl TerminalSurface) -> ViewMetrics {
        let Some((width, height)) = self.body_area(session) else {
            return ViewMetrics::default();
        };
        let doc_height = self
            .view
            .layouts
            .layout_for(&self.content, width, &mut self.view.perf)
            .height();

        ViewMetrics {
            viewport_height: height,
            max_offset: doc_height.saturating_sub(height),
            page_step: height.saturating_sub(self.config.scroll.page_overlap).max(1),
        }
    }

    /// Re-clamps the offset against the current document bounds (resize can
    /// shrink them) and publishes when that moved the viewport.
    pub(crate) fn sync_scroll_bounds(&mut self, session: &impl TerminalSurface) -> bool {
        let metrics = self.view_metrics(session);
        if metrics.viewport_height == 0 {
            return false;
        }
        if self.state.scroll_offset > metrics.max_offset {
            self.state.scroll_offset = metrics.max_offset;
            self.publish_scroll();
            return true;
        }
        false
    }

    pub(crate) fn publish_scroll(&mut self) {
        self.nav.feed.publish(self.state.scroll_offset as i64);
    }

    /// Drains the controller's subscription in delivery order against the
    /// current layout, translating state transitions into app events.
    pub(crate) fn drain_scroll_notifications(
        &mut self,
        session: &impl TerminalSurface,
    ) -> Vec<AppEvent> {
        let mut events = Vec::new();
        match self.body_area(session) {
            Some((width, _)) => {
                let layout = self
                    .view
                    .layouts
                    .layout_for(&self.content, width, &mut self.view.perf);
                while let Some(notice) = self.nav.subscription.try_next() {
                    let outcome = self.nav.controller.on_scroll(notice.offset, layout);
                    push_outcome_events(&self.nav.controller, outcome, &mut events);
                }
            }
            None => {
                while let Some(notice) = self.nav.subscription.try_next() {
                    let outcome = self
                        .nav
                        .controller
                        .on_scroll(notice.offset, &UnmeasuredAnchors);
                    push_outcome_events(&self.nav.controller, outcome, &mut events);
                }
            }
        }
        events
    }

    /// Starts the smooth scroll for a validated navigation target and closes
    /// the menu overlay as a side effect. The active section is not touched;
    /// the animation's own scroll notifications will move it.
    pub(crate) fn begin_navigation(
        &mut self,
        target: &str,
        session: &impl TerminalSurface,
    ) -> AppResult<()> {
        let request = self.nav.controller.navigate_to(target)?;
        self.interaction.pending_menu.push_back(MenuRequest::Close);
        self.state.status.last_action_id = Some(ActionId::Navigate);

        let Some((width, height)) = self.body_area(session) else {
            self.state.status.message = "cannot navigate before the first layout".to_string();
            return Ok(());
        };
        let layout = self
            .view
            .layouts
            .layout_for(&self.content, width, &mut self.view.perf);
        let Some(top) = layout.anchor_top(&request.id) else {
            self.state.status.message = format!("section '{}' is not measurable yet", request.id);
            return Ok(());
        };
        let max_offset = layout.height().saturating_sub(height);

        self.view.animator.start(top.min(max_offset));
        let label = &self.nav.controller.items()[request.index].label;
        self.state.status.message = format!("scrolling to {label}");
        Ok(())
    }

    pub(crate) fn render_frame(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let frame_started = Instant::now();
        let size = session.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let header_visible = self.nav.controller.header_visible();
        let debug_status_visible = self.state.debug_status_visible;
        let ui_layout = ui::split_layout(area, header_visible, debug_status_visible);

        let layout = self
            .view
            .layouts
            .layout_for(&self.content, ui_layout.body.width.max(1), &mut self.view.perf);
        let max_offset = layout
            .height()
            .saturating_sub(ui_layout.body.height as usize);

        let state = &self.state;
        let nav = &self.nav.controller;
        let name = self.content.name.as_str();
        let source_name = self.source_name.as_str();
        let perf = &self.view.perf;
        let menu_open = state.mode == Mode::Menu;

        session.draw(|frame| {
            let ui_layout = ui::split_layout(frame.area(), header_visible, debug_status_visible);
            ui::draw_document(frame, ui_layout.body, layout, state.scroll_offset);
            ui::draw_chrome(
                frame,
                ui_layout,
                state,
                nav,
                name,
                source_name,
                max_offset,
                perf,
                layout.anchors.len(),
            );
            if menu_open {
                ui::draw_menu_overlay(
                    frame,
                    ui_layout.body,
                    nav.items(),
                    state.menu.selected,
                    nav.active_index(),
                );
            }
        })?;

        self.view.perf.record_frame(frame_started.elapsed());
        Ok(())
    }
}

fn push_outcome_events(nav: &NavController, outcome: ScrollOutcome, events: &mut Vec<AppEvent>) {
    if outcome.header_changed {
        events.push(AppEvent::HeaderVisibilityChanged {
            visible: nav.header_visible(),
        });
    }
    if let Some(change) = outcome.section_changed {
        events.push(AppEvent::SectionChanged {
            from: nav.items()[change.from].id.clone(),
            to: nav.items()[change.to].id.clone(),
            reason: NavReason::Scroll,
        });
    }
}
