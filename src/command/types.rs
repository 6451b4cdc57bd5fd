#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScrollDown { lines: usize },
    ScrollUp { lines: usize },
    PageDown,
    PageUp,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    GotoSection { index: usize },
    OpenMenu,
    CloseMenu,
    DebugStatusShow,
    DebugStatusHide,
    DebugStatusToggle,
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    GotoSection,
    OpenMenu,
    CloseMenu,
    DebugStatusShow,
    DebugStatusHide,
    DebugStatusToggle,
    Cancel,
    Quit,
    Navigate,
    Input,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScrollDown => "scroll-down",
            Self::ScrollUp => "scroll-up",
            Self::PageDown => "page-down",
            Self::PageUp => "page-up",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::NextSection => "next-section",
            Self::PrevSection => "prev-section",
            Self::GotoSection => "goto-section",
            Self::OpenMenu => "open-menu",
            Self::CloseMenu => "close-menu",
            Self::DebugStatusShow => "debug-status-show",
            Self::DebugStatusHide => "debug-status-hide",
            Self::DebugStatusToggle => "debug-status-toggle",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Navigate => "navigate",
            Self::Input => "input",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::ScrollDown { .. } => ActionId::ScrollDown,
            Self::ScrollUp { .. } => ActionId::ScrollUp,
            Self::PageDown => ActionId::PageDown,
            Self::PageUp => ActionId::PageUp,
            Self::Top => ActionId::Top,
            Self::Bottom => ActionId::Bottom,
            Self::NextSection => ActionId::NextSection,
            Self::PrevSection => ActionId::PrevSection,
            Self::GotoSection { .. } => ActionId::GotoSection,
            Self::OpenMenu => ActionId::OpenMenu,
            Self::CloseMenu => ActionId::CloseMenu,
            Self::DebugStatusShow => ActionId::DebugStatusShow,
            Self::DebugStatusHide => ActionId::DebugStatusHide,
            Self::DebugStatusToggle => ActionId::DebugStatusToggle,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }

    /// True for the manual viewport movements that should interrupt an
    /// in-flight smooth scroll.
    pub fn is_manual_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollDown { .. }
                | Self::ScrollUp { .. }
                | Self::PageDown
                | Self::PageUp
                | Self::Top
                | Self::Bottom
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}

/// Viewport measurements commands scroll against, captured just before
/// dispatch. Zeroed when the terminal size is not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewMetrics {
    pub viewport_height: usize,
    pub max_offset: usize,
    pub page_step: usize,
}
