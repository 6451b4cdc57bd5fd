use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Vertical split: header bar (collapsed to zero rows while hidden), the
/// scrollable document body, and the status bar.
pub fn split_layout(area: Rect, header_visible: bool, debug_status_visible: bool) -> UiLayout {
    let header_height = if header_visible { 1 } else { 0 };
    let status_height = if debug_status_visible { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(status_height),
        ])
        .split(area);

    UiLayout {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::split_layout;

    #[test]
    fn split_layout_reserves_header_and_status_rows() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };

        let layout = split_layout(area, true, false);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.body.height, 38);
    }

    #[test]
    fn hidden_header_returns_its_row_to_the_body() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };

        let layout = split_layout(area, false, false);
        assert_eq!(layout.header.height, 0);
        assert_eq!(layout.body.height, 39);
    }

    #[test]
    fn debug_status_reserves_two_rows() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };

        let layout = split_layout(area, true, true);
        assert_eq!(layout.status.height, 2);
        assert_eq!(layout.body.height, 37);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(10, 5, 20, 8);
        let centered = super::centered_rect(area, 99, 99);
        assert_eq!(centered.x, 10);
        assert_eq!(centered.y, 5);
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 8);
    }
}
