use std::num::NonZeroUsize;
use std::time::Instant;

use lru::LruCache;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::content::Portfolio;
use crate::perf::FrameStats;
use crate::scroll::AnchorSource;

const ACCENT: Color = Color::Red;

/// Top row of one section in the laid-out document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor {
    pub id: String,
    pub top: usize,
}

/// The portfolio rendered to styled terminal lines at a fixed width. The
/// hero block sits above every anchor; anchors point at section headings.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub width: u16,
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<SectionAnchor>,
}

impl DocumentLayout {
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

impl AnchorSource for DocumentLayout {
    fn anchor_top(&self, id: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|anchor| anchor.id == id)
            .map(|anchor| anchor.top)
    }
}

pub fn layout_document(content: &Portfolio, width: u16) -> DocumentLayout {
    let wrap_width = (width.max(1)) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut anchors = Vec::new();

    // Hero block: not a navigation target, so it carries no anchor and the
    // active section stays untouched while the reader is up here.
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        content.name.clone(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    if !content.tagline.is_empty() {
        for wrapped in wrap_text(&content.tagline, wrap_width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
    }
    lines.push(Line::default());
    if !content.hero.quote.is_empty() {
        for wrapped in wrap_text(&content.hero.quote, wrap_width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        if !content.hero.attribution.is_empty() {
            for wrapped in wrap_text(&content.hero.attribution, wrap_width.saturating_sub(2).max(1))
            {
                lines.push(Line::from(Span::styled(
                    format!("— {wrapped}"),
                    Style::default().fg(ACCENT).add_modifier(Modifier::DIM),
                )));
            }
        }
        lines.push(Line::default());
    }

    for section in &content.sections {
        anchors.push(SectionAnchor {
            id: section.id.clone(),
            top: lines.len(),
        });

        let heading = section.heading().to_string();
        let underline_width = UnicodeWidthStr::width(heading.as_str()).clamp(1, wrap_width);
        lines.push(Line::from(Span::styled(
            heading,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "─".repeat(underline_width),
            Style::default().fg(ACCENT),
        )));
        lines.push(Line::default());

        for (idx, paragraph) in section.body.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            for wrapped in wrap_text(paragraph, wrap_width) {
                lines.push(Line::from(Span::raw(wrapped)));
            }
        }
        lines.push(Line::default());
    }

    DocumentLayout {
        width,
        lines,
        anchors,
    }
}

/// Width-aware word wrap. Words are kept whole when they fit; a word wider
/// than the line is hard-broken by grapheme cluster.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_word_bounds() {
        let word_width = UnicodeWidthStr::width(word);
        if word.chars().all(char::is_whitespace) {
            if line_width > 0 && line_width + word_width <= width {
                line.push_str(word);
                line_width += word_width;
            }
            continue;
        }

        if line_width + word_width <= width {
            line.push_str(word);
            line_width += word_width;
            continue;
        }

        if line_width > 0 {
            flush_line(&mut lines, &mut line, &mut line_width);
        }
        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }

        for grapheme in word.graphemes(true) {
            let grapheme_width = UnicodeWidthStr::width(grapheme);
            if line_width > 0 && line_width + grapheme_width > width {
                flush_line(&mut lines, &mut line, &mut line_width);
            }
            line.push_str(grapheme);
            line_width += grapheme_width;
        }
    }

    if !line.trim_end().is_empty() {
        flush_line(&mut lines, &mut line, &mut line_width);
    }
    lines
}

fn flush_line(lines: &mut Vec<String>, line: &mut String, line_width: &mut usize) {
    lines.push(line.trim_end().to_string());
    line.clear();
    *line_width = 0;
}

/// Per-width layout cache. Resizes are rare and content is immutable, so a
/// handful of entries covers a whole session.
#[derive(Debug)]
pub struct LayoutCache {
    cache: LruCache<u16, DocumentLayout>,
}

impl LayoutCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    pub fn layout_for(
        &mut self,
        content: &Portfolio,
        width: u16,
        perf: &mut FrameStats,
    ) -> &DocumentLayout {
        if self.cache.contains(&width) {
            perf.record_layout_cache_hit();
        } else {
            perf.record_layout_cache_miss();
            let started = Instant::now();
            let layout = layout_document(content, width);
            perf.record_layout(started.elapsed());
            self.cache.put(width, layout);
        }
        self.cache
            .get_or_insert(width, || layout_document(content, width))
    }
}

pub fn draw_document(frame: &mut Frame<'_>, area: Rect, layout: &DocumentLayout, offset: usize) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let start = offset.min(layout.height());
    let end = (start + area.height as usize).min(layout.height());
    let visible: Vec<Line<'static>> = layout.lines[start..end].to_vec();
    frame.render_widget(Paragraph::new(visible), area);
}

#[cfg(test)]
mod tests {
    use crate::content::Portfolio;
    use crate::perf::FrameStats;
    use crate::scroll::AnchorSource;

    use super::{LayoutCache, layout_document, wrap_text};

    const SAMPLE: &str = r#"
        name = "Amit Khanal"
        tagline = "Engineer and writer"

        [hero]
        quote = "Dream, work, and let your words change the world."
        attribution = "a writer's dream"

        [[sections]]
        id = "about"
        label = "About"
        body = ["An engineer who writes about machines and people."]

        [[sections]]
        id = "writing"
        label = "Writing"
        body = ["Essays.", "Short fiction."]
    "#;

    fn sample() -> Portfolio {
        Portfolio::from_toml_str(SAMPLE).expect("sample should parse")
    }

    #[test]
    fn anchors_are_ordered_and_sit_below_the_hero() {
        let layout = layout_document(&sample(), 60);

        assert_eq!(layout.anchors.len(), 2);
        assert!(layout.anchors[0].top > 0, "hero must precede first anchor");
        assert!(layout.anchors[0].top < layout.anchors[1].top);
        assert_eq!(layout.anchor_top("about"), Some(layout.anchors[0].top));
        assert_eq!(layout.anchor_top("missing"), None);
        assert!(layout.height() > layout.anchors[1].top);
    }

    #[test]
    fn narrow_width_produces_taller_layout() {
        let wide = layout_document(&sample(), 80);
        let narrow = layout_document(&sample(), 20);
        assert!(narrow.height() > wide.height());
    }

    #[test]
    fn wrap_text_respects_display_width() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        for line in &lines {
            assert!(unicode_width::UnicodeWidthStr::width(line.as_str()) <= 9);
        }
    }

    #[test]
    fn wrap_text_hard_breaks_oversized_words_by_grapheme() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_text_accounts_for_wide_glyphs() {
        // CJK glyphs are two columns wide.
        let lines = wrap_text("日本語のテキスト", 6);
        for line in &lines {
            assert!(unicode_width::UnicodeWidthStr::width(line.as_str()) <= 6);
        }
        assert!(lines.len() >= 2);
    }

    #[test]
    fn layout_cache_hits_after_first_request_per_width() {
        let content = sample();
        let mut cache = LayoutCache::new(4);
        let mut perf = FrameStats::default();

        let height = cache.layout_for(&content, 60, &mut perf).height();
        assert_eq!(perf.layout_cache_misses, 1);

        let again = cache.layout_for(&content, 60, &mut perf).height();
        assert_eq!(again, height);
        assert_eq!(perf.layout_cache_hits, 1);
        assert_eq!(perf.layout_cache_misses, 1);

        cache.layout_for(&content, 40, &mut perf);
        assert_eq!(perf.layout_cache_misses, 2);
    }
}
