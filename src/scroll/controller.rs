use crate::content::NavItem;
use crate::error::{AppError, AppResult};

/// Read-only seam to the rendered document: where each section starts.
///
/// Anchors may be unmeasurable (document not laid out yet); the controller
/// degrades to "no active-section change" rather than guessing.
pub trait AnchorSource {
    fn anchor_top(&self, id: &str) -> Option<usize>;
}

/// Scroll policy knobs, in rows. Both default to 100: the header only hides
/// once the reader is past the top band, and a section counts as active
/// slightly before its first row reaches the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavPolicy {
    pub hide_header_threshold: usize,
    pub active_look_ahead: usize,
}

impl Default for NavPolicy {
    fn default() -> Self {
        Self {
            hide_header_threshold: 100,
            active_look_ahead: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub from: usize,
    pub to: usize,
}

/// What a scroll notification changed, so the caller can emit events and
/// schedule redraws without diffing state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOutcome {
    pub header_changed: bool,
    pub section_changed: Option<SectionChange>,
}

/// A validated, fire-and-forget smooth-scroll request for the viewport
/// layer. Issuing one never touches the active section; that stays driven
/// by subsequent scroll notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRequest {
    pub index: usize,
    pub id: String,
}

/// Derives header visibility and the active section from the live scroll
/// offset. One instance per page view; the event loop is its only writer.
#[derive(Debug, Clone)]
pub struct NavController {
    items: Vec<NavItem>,
    policy: NavPolicy,
    last_offset: usize,
    header_visible: bool,
    active: usize,
}

impl NavController {
    pub fn new(items: Vec<NavItem>, initial: usize, policy: NavPolicy) -> AppResult<Self> {
        if items.is_empty() {
            return Err(AppError::invalid_argument(
                "nav controller requires at least one section",
            ));
        }
        if initial >= items.len() {
            return Err(AppError::invalid_argument(format!(
                "initial section index {initial} out of range (have {})",
                items.len()
            )));
        }
        Ok(Self {
            items,
            policy,
            last_offset: 0,
            header_visible: true,
            active: initial,
        })
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_item(&self) -> &NavItem {
        &self.items[self.active]
    }

    pub fn last_offset(&self) -> usize {
        self.last_offset
    }

    /// Applies one scroll notification. Notifications must arrive in the
    /// order the viewport produced them; the downward/upward comparison is
    /// against the previous offset.
    pub fn on_scroll(&mut self, raw_offset: i64, anchors: &dyn AnchorSource) -> ScrollOutcome {
        // Overscroll bounce can report negative positions; never let one
        // corrupt the stored offset.
        let offset = usize::try_from(raw_offset.max(0)).unwrap_or(0);

        let scrolling_down = offset > self.last_offset;
        let header_visible = !(scrolling_down && offset > self.policy.hide_header_threshold);
        let header_changed = header_visible != self.header_visible;
        self.header_visible = header_visible;

        // Sections stack top-to-bottom, so the current one is the deepest
        // section whose top has been passed: scan from the last entry and
        // stop at the first hit. Unmeasurable anchors are skipped.
        let probe = offset.saturating_add(self.policy.active_look_ahead);
        let mut section_changed = None;
        for idx in (0..self.items.len()).rev() {
            let Some(top) = anchors.anchor_top(&self.items[idx].id) else {
                continue;
            };
            if top <= probe {
                if idx != self.active {
                    section_changed = Some(SectionChange {
                        from: self.active,
                        to: idx,
                    });
                    self.active = idx;
                }
                break;
            }
        }

        self.last_offset = offset;
        ScrollOutcome {
            header_changed,
            section_changed,
        }
    }

    /// Validates a navigation target against the closed section set. The
    /// id set is known at startup, so a miss is a caller bug surfaced as a
    /// configuration error rather than a panic.
    pub fn navigate_to(&self, id: &str) -> AppResult<NavRequest> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::unknown_section(id))?;
        Ok(NavRequest {
            index,
            id: id.to_string(),
        })
    }
}
