use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, Mode};
use crate::perf::FrameStats;
use crate::scroll::NavController;

use super::layout::UiLayout;

const ACCENT: Color = Color::Red;

#[allow(clippy::too_many_arguments)]
pub fn draw_chrome(
    frame: &mut Frame<'_>,
    layout: UiLayout,
    app: &AppState,
    nav: &NavController,
    name: &str,
    file_name: &str,
    max_offset: usize,
    perf: &FrameStats,
    anchor_count: usize,
) {
    if layout.header.height > 0 {
        let mut spans = vec![
            Span::styled(
                format!(" {name}"),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
        ];
        for (idx, item) in nav.items().iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if idx == nav.active_index() {
                Style::default()
                    .fg(ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(item.label.clone(), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), layout.header);
    }

    let mode = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Menu => "MENU",
    };
    let active = nav.active_item();
    let status_text = format!(
        "{} | {} {}/{} | row {}/{} | {}",
        file_name,
        active.label,
        nav.active_index() + 1,
        nav.items().len(),
        app.scroll_offset,
        max_offset,
        mode
    );

    let status = Paragraph::new(status_text)
        .style(Style::default())
        .wrap(Wrap { trim: true });
    if app.debug_status_visible && layout.status.height >= 2 {
        let top = ratatui::layout::Rect::new(
            layout.status.x,
            layout.status.y,
            layout.status.width,
            1,
        );
        frame.render_widget(status, top);

        let command_id = app
            .status
            .last_action_id
            .map(|id| id.as_str())
            .unwrap_or("-");
        let message = if app.status.message.is_empty() {
            "-"
        } else {
            app.status.message.as_str()
        };
        let header_state = if nav.header_visible() { "shown" } else { "hidden" };
        let debug_text = format!(
            "cmd={command_id} | msg={message} | frame={:.1}ms layout={:.1}ms | cache hit={:.0}% | header={} | anchors={}",
            perf.frame_ms,
            perf.layout_ms,
            perf.layout_cache_hit_rate() * 100.0,
            header_state,
            anchor_count
        );
        let bottom = ratatui::layout::Rect::new(
            layout.status.x,
            layout.status.y + 1,
            layout.status.width,
            layout.status.height.saturating_sub(1).max(1),
        );
        let debug = Paragraph::new(debug_text)
            .style(Style::default())
            .wrap(Wrap { trim: true });
        frame.render_widget(debug, bottom);
        return;
    }

    frame.render_widget(status, layout.status);
}
