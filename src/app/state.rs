use crate::command::ActionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Menu,
}

/// Deferred menu overlay transitions, applied between events so key
/// handling and command dispatch never race on the mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRequest {
    Open,
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Cursor row in the section menu, an index into the nav item list.
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Vertical scroll distance in rows. Commands and the animator are the
    /// only writers; the nav controller observes it via the scroll feed.
    pub scroll_offset: usize,
    pub mode: Mode,
    pub menu: MenuState,
    pub debug_status_visible: bool,
    pub status: StatusState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            mode: Mode::Normal,
            menu: MenuState::default(),
            debug_status_visible: false,
            status: StatusState::default(),
        }
    }
}
