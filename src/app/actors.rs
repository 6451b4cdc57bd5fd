use std::time::{Duration, Instant};

pub(crate) struct InputActor {
    last_input_at: Instant,
}

impl InputActor {
    pub(crate) fn new(now: Instant) -> Self {
        Self { last_input_at: now }
    }

    pub(crate) fn last_input_at_mut(&mut self) -> &mut Instant {
        &mut self.last_input_at
    }

    pub(crate) fn is_interactive(&self, window: Duration) -> bool {
        self.last_input_at.elapsed() < window
    }
}

pub(crate) struct UiActor {
    needs_redraw: bool,
}

impl UiActor {
    pub(crate) fn new() -> Self {
        Self { needs_redraw: true }
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    pub(crate) fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub(crate) fn needs_redraw_mut(&mut self) -> &mut bool {
        &mut self.needs_redraw
    }
}
