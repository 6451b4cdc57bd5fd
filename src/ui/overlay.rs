use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::content::NavItem;

use super::layout::centered_rect;

/// The section-jump popup: every nav destination, with the cursor row
/// highlighted and the currently active section marked.
pub fn draw_menu_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    items: &[NavItem],
    selected: usize,
    active_index: usize,
) {
    if area.width == 0 || area.height == 0 || items.is_empty() {
        return;
    }

    let widest = items
        .iter()
        .map(|item| UnicodeWidthStr::width(item.label.as_str()))
        .max()
        .unwrap_or(0);
    let popup_width = ((widest + 10) as u16).clamp(20, area.width);
    let popup_height = ((items.len() + 2) as u16).min(area.height);
    let popup = centered_rect(area, popup_width, popup_height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let selected = selected.min(items.len() - 1);
    let max_items = inner.height as usize;
    // Keep the cursor row visible when the popup is shorter than the list.
    let start_idx = if items.len() <= max_items || selected < max_items / 2 {
        0
    } else if selected >= items.len() - max_items / 2 {
        items.len().saturating_sub(max_items)
    } else {
        selected.saturating_sub(max_items / 2)
    };

    let mut lines = Vec::new();
    for (idx, item) in items.iter().enumerate().skip(start_idx).take(max_items) {
        let mut spans = Vec::new();

        if idx == selected {
            spans.push(Span::styled(" ┃ ", Style::default().fg(Color::White)));
        } else {
            spans.push(Span::raw("   "));
        }

        spans.push(Span::raw(item.label.clone()));

        if idx == active_index {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("●", Style::default().fg(Color::Red)));
        }

        let line_style = if idx == selected {
            Style::default().bg(Color::Rgb(45, 45, 50))
        } else {
            Style::default()
        };

        let marker_width = if idx == active_index { 3 } else { 0 };
        let total_width = 3 + UnicodeWidthStr::width(item.label.as_str()) + marker_width;
        let padding = " ".repeat((inner.width as usize).saturating_sub(total_width));
        spans.push(Span::raw(padding));

        lines.push(Line::from(spans).style(line_style));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
